use stepsort::algorithm::Algorithm;
use stepsort::engine::Engine;

fn main() {
    // Drive a shuffled 12-bar array one primitive operation per "frame",
    // the way an animation loop would.
    let mut engine = Engine::new_with_seed(12, 42).unwrap();
    engine.randomize();
    engine.select_algorithm(Algorithm::Bubble);
    println!("start        {:?}", engine.snapshot());

    let mut frame = 0u64;
    loop {
        let done = engine.step().unwrap();
        frame += 1;
        if frame % 10 == 0 || done {
            println!(
                "frame {:4}   {:?}  comparisons={} swaps={}",
                frame,
                engine.snapshot(),
                engine.comparisons(),
                engine.swaps()
            );
        }
        if done {
            break;
        }
    }
}
