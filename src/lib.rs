//! # confusable-distance
//!
//! Edit distance that ignores visually confusable characters.
//!
//! Each input is first mapped to a *skeleton*: every code point is replaced by
//! the prototype of its confusability class, taken from a versioned subset of
//! the Unicode confusables data (UTS #39). Digit `0` and letter `O` share a
//! skeleton, as do `1`, `I`, `|` and `l`. The result is the Levenshtein
//! distance between the two skeletons, so `0` means the inputs are
//! confusably identical.
//!
//! ## Example
//!
//! ```rust
//! use confusable_distance::confusable_distance;
//!
//! assert_eq!(confusable_distance("HELLO", "HELL0")?, 0);
//! assert_eq!(confusable_distance("admin", "adm1n")?, 1);
//! assert_eq!(confusable_distance("hello", "world")?, 4);
//! # Ok::<(), confusable_distance::DistanceError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confusables;
pub mod distance;
pub mod engine;
pub mod error;
pub mod skeleton;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use confusables::ConfusableTable;
pub use engine::{
    Comparison, ConfusableDistance, ConfusableDistanceBuilder, EngineConfig, Similarity,
    DEFAULT_MAX_INPUT_LEN,
};
pub use error::{ConfigError, DistanceError};
pub use skeleton::{skeleton, Skeleton};

/// Confusable-aware edit distance between `a` and `b` with the default
/// engine configuration.
///
/// Fails with [`DistanceError::ResourceLimitExceeded`] when an input is longer
/// than [`DEFAULT_MAX_INPUT_LEN`] code points. Use a configured
/// [`ConfusableDistance`] for a different limit.
pub fn confusable_distance(a: &str, b: &str) -> error::Result<usize> {
    ConfusableDistance::new().distance(a, b)
}

/// [`confusable_distance`] over byte strings; non-UTF-8 input fails with
/// [`DistanceError::InvalidInput`].
pub fn confusable_distance_bytes(a: &[u8], b: &[u8]) -> error::Result<usize> {
    ConfusableDistance::new().distance_bytes(a, b)
}

/// [`confusable_distance`] over dynamically typed values; anything other than
/// a JSON string fails with [`DistanceError::InvalidInput`].
#[cfg(feature = "serialization")]
pub fn confusable_distance_value(
    a: &serde_json::Value,
    b: &serde_json::Value,
) -> error::Result<usize> {
    ConfusableDistance::new().distance_value(a, b)
}

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::confusables::ConfusableTable;
    pub use crate::distance::{levenshtein, standard_distance};
    pub use crate::engine::{Comparison, ConfusableDistance, EngineConfig, Similarity};
    pub use crate::error::{ConfigError, DistanceError};
    pub use crate::skeleton::{skeleton, Skeleton};
    pub use crate::{confusable_distance, confusable_distance_bytes};

    #[cfg(feature = "serialization")]
    pub use crate::confusable_distance_value;
}
