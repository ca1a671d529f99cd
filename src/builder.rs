//! Builder API for configuring an engine before first use.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::{Algorithm, UnknownAlgorithm};
use crate::engine::{Engine, EngineError};

/// The engine builder.
///
/// Collects sizing, seeding, initial contents and the algorithm choice, then
/// produces a ready-to-drive [`Engine`]. Everything is optional except a way
/// to determine length: either [`EngineBuilder::size`] or
/// [`EngineBuilder::values`] must be given.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    size: Option<usize>,
    seed: Option<u64>,
    algorithm: Option<Algorithm>,
    algorithm_name: Option<String>,
    values: Option<Vec<i32>>,
    randomize: bool,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements. Ignored when [`EngineBuilder::values`] is given;
    /// the payload's length wins.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Fix the shuffle seed so every `randomize()` sequence is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Active algorithm, by kind.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Active algorithm, by wire name (`"bubble"`, `"quick"`, ...).
    /// Parsed at build time; ignored when [`EngineBuilder::algorithm`] was
    /// also set.
    pub fn algorithm_named(mut self, name: &str) -> Self {
        self.algorithm_name = Some(name.to_string());
        self
    }

    /// Start from these exact values instead of the identity sequence.
    pub fn values(mut self, values: &[i32]) -> Self {
        self.values = Some(values.to_vec());
        self
    }

    /// Shuffle once as the final build step. Combined with
    /// [`EngineBuilder::values`] this keeps only their length.
    pub fn randomized(mut self) -> Self {
        self.randomize = true;
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<Engine, BuildError> {
        let size = match (&self.values, self.size) {
            // An empty payload must surface as InvalidInput from load, not
            // as a size error, so construction gets a floor of one slot.
            (Some(v), _) => v.len().max(1),
            (None, Some(s)) => s,
            (None, None) => return Err(BuildError::MissingSize),
        };
        let mut engine = match self.seed {
            Some(seed) => Engine::new_with_seed(size, seed),
            None => Engine::new(size),
        }
        .map_err(BuildError::Engine)?;
        if let Some(values) = &self.values {
            engine.load(values).map_err(BuildError::Engine)?;
        }
        let algorithm = match (self.algorithm, &self.algorithm_name) {
            (Some(kind), _) => Some(kind),
            (None, Some(name)) => {
                Some(Algorithm::from_str(name).map_err(BuildError::UnknownAlgorithm)?)
            }
            (None, None) => None,
        };
        if let Some(algorithm) = algorithm {
            engine.select_algorithm(algorithm);
        }
        if self.randomize {
            engine.randomize();
        }
        Ok(engine)
    }
}

/// Builder-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Neither a size nor initial values were given.
    MissingSize,
    /// The algorithm name matched none of the seven kinds.
    UnknownAlgorithm(UnknownAlgorithm),
    /// Engine construction or load failed.
    Engine(EngineError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingSize => {
                write!(f, "builder needs size() or values() to determine length")
            }
            BuildError::UnknownAlgorithm(e) => write!(f, "{}", e),
            BuildError::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::MissingSize => None,
            BuildError::UnknownAlgorithm(e) => Some(e),
            BuildError::Engine(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArrayError;

    #[test]
    fn builder_equivalence() {
        // Build an engine via the builder and manually, check equivalence.
        let built = EngineBuilder::new()
            .size(12)
            .seed(21)
            .algorithm(Algorithm::Selection)
            .randomized()
            .build()
            .unwrap();

        let mut manual = Engine::new_with_seed(12, 21).unwrap();
        manual.select_algorithm(Algorithm::Selection);
        manual.randomize();

        assert_eq!(built.snapshot(), manual.snapshot());
        assert_eq!(built.algorithm(), manual.algorithm());
    }

    #[test]
    fn missing_size_is_rejected() {
        let err = EngineBuilder::new().build().unwrap_err();
        assert_eq!(err, BuildError::MissingSize);
    }

    #[test]
    fn values_imply_size() {
        let engine = EngineBuilder::new().values(&[4, 1, 3]).build().unwrap();
        assert_eq!(engine.len(), 3);
        assert_eq!(engine.snapshot(), vec![4, 1, 3]);
    }

    #[test]
    fn empty_values_surface_invalid_input() {
        let err = EngineBuilder::new().values(&[]).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::Engine(EngineError::Array(ArrayError::InvalidInput))
        );
    }

    #[test]
    fn zero_size_surfaces_invalid_size() {
        let err = EngineBuilder::new().size(0).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::Engine(EngineError::Array(ArrayError::InvalidSize))
        );
    }

    #[test]
    fn unknown_name_is_rejected_at_build() {
        let err = EngineBuilder::new()
            .size(4)
            .algorithm_named("bogo")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::UnknownAlgorithm(_)));
    }

    #[test]
    fn named_algorithm_is_selected() {
        let engine = EngineBuilder::new()
            .size(4)
            .algorithm_named("heap")
            .build()
            .unwrap();
        assert_eq!(engine.algorithm(), Algorithm::Heap);
    }

    #[test]
    fn randomized_after_values_keeps_only_their_length() {
        let engine = EngineBuilder::new()
            .values(&[90, 80, 70])
            .seed(5)
            .randomized()
            .build()
            .unwrap();
        let mut got = engine.snapshot();
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 3]);
    }
}
