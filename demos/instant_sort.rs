use stepsort::builder::EngineBuilder;

fn main() {
    // "Instant result" semantics: one run() call sorts the whole array.
    let mut engine = EngineBuilder::new()
        .size(16)
        .seed(7)
        .algorithm_named("quick")
        .randomized()
        .build()
        .unwrap();

    println!("before: {:?}", engine.snapshot());
    engine.run().unwrap();
    println!("after:  {:?}", engine.snapshot());
    println!(
        "comparisons={} swaps={}",
        engine.comparisons(),
        engine.swaps()
    );
}
