use std::fs;
use std::path::Path;

/// The stepping hot path must not call the Mutex-acquiring `assert_invariant`.
#[test]
fn hot_path_does_not_call_assert_invariant() {
    for file in ["cursor.rs", "metrics.rs"] {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(file);
        let src =
            fs::read_to_string(&path).unwrap_or_else(|_| panic!("failed to read {}", file));
        assert!(
            !src.contains("assert_invariant("),
            "{} runs once per animation frame and must not call assert_invariant (acquires a Mutex); keep invariant logging on the engine's cold edges",
            file
        );
    }
}
