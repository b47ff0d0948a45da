//! The composed confusable distance operation.
//!
//! [`ConfusableDistance`] validates both arguments, maps them to skeletons and
//! returns the Levenshtein distance between the skeletons. Validation happens
//! before any normalization, so a rejected call does no partial work.
//!
//! The engine holds nothing but its [`EngineConfig`]; the confusable table is
//! the process-wide static, so an engine is cheap to copy and safe to share.

use std::fmt;

use tracing::{debug, warn};

use crate::distance::levenshtein;
use crate::error::{ConfigError, DistanceError, Result};
use crate::skeleton::Skeleton;

/// Default cap on input length, in code points.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Longest accepted input, in code points. `None` disables the check.
    ///
    /// The distance costs `O(n * m)` time, so services exposing the engine
    /// should keep a limit.
    pub max_input_len: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
        }
    }
}

impl EngineConfig {
    /// Configuration without a length limit.
    pub fn unlimited() -> Self {
        Self { max_input_len: None }
    }

    /// Reject configurations that cannot accept any non-empty input.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self.max_input_len {
            Some(0) => Err(ConfigError::ZeroInputLimit),
            _ => Ok(()),
        }
    }
}

/// How close two strings are once confusables are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Similarity {
    /// Distance 0: the skeletons are equal.
    Identical,
    /// Distance 1.
    VerySimilar,
    /// Any larger distance.
    Different(usize),
}

impl Similarity {
    /// Classify a distance.
    pub fn from_distance(distance: usize) -> Self {
        match distance {
            0 => Self::Identical,
            1 => Self::VerySimilar,
            n => Self::Different(n),
        }
    }

    /// Human-readable explanation of the classification.
    pub fn explanation(&self) -> String {
        match self {
            Self::Identical => "These strings are confusably identical! After normalizing \
                 confusable characters (like 0→O, 1→l), they are the same."
                .to_string(),
            Self::VerySimilar => "These strings are very similar - only 1 character edit away \
                 after normalization."
                .to_string(),
            Self::Different(n) => {
                format!("These strings require {n} character edits to match after normalization.")
            }
        }
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identical => write!(f, "confusably identical"),
            Self::VerySimilar => write!(f, "very similar"),
            Self::Different(n) => write!(f, "{n} edits apart"),
        }
    }
}

/// Full result of one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Edit distance between the skeletons.
    pub distance: usize,
    /// Classification of `distance`.
    pub similarity: Similarity,
    /// Skeleton of the first argument.
    pub skeleton_a: String,
    /// Skeleton of the second argument.
    pub skeleton_b: String,
}

/// Confusable-aware edit distance engine.
///
/// # Example
///
/// ```rust
/// use confusable_distance::ConfusableDistance;
///
/// let engine = ConfusableDistance::new();
/// assert_eq!(engine.distance("HELLO", "HELL0").unwrap(), 0);
/// assert_eq!(engine.distance("admin", "adm1n").unwrap(), 1);
/// assert_eq!(engine.distance("hello", "world").unwrap(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusableDistance {
    config: EngineConfig,
}

impl ConfusableDistance {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration.
    pub fn with_config(config: EngineConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start a [`ConfusableDistanceBuilder`].
    pub fn builder() -> ConfusableDistanceBuilder {
        ConfusableDistanceBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Distance between the skeletons of `a` and `b`.
    ///
    /// Fails with [`DistanceError::ResourceLimitExceeded`] if either input is
    /// longer than the configured limit.
    pub fn distance(&self, a: &str, b: &str) -> Result<usize> {
        self.check_len("a", a.chars().count())?;
        self.check_len("b", b.chars().count())?;

        Ok(self.distance_unchecked(&Skeleton::new(a), &Skeleton::new(b)))
    }

    /// Distance between two UTF-16 strings.
    ///
    /// Unpaired surrogates are compared as themselves instead of being
    /// rejected.
    pub fn distance_utf16(&self, a: &[u16], b: &[u16]) -> Result<usize> {
        self.check_len("a", char::decode_utf16(a.iter().copied()).count())?;
        self.check_len("b", char::decode_utf16(b.iter().copied()).count())?;

        Ok(self.distance_unchecked(&Skeleton::from_utf16(a), &Skeleton::from_utf16(b)))
    }

    /// Distance between two byte strings that must be UTF-8.
    pub fn distance_bytes(&self, a: &[u8], b: &[u8]) -> Result<usize> {
        let a = std::str::from_utf8(a)
            .map_err(|e| DistanceError::invalid_input("a", format!("not valid UTF-8: {e}")))?;
        let b = std::str::from_utf8(b)
            .map_err(|e| DistanceError::invalid_input("b", format!("not valid UTF-8: {e}")))?;
        self.distance(a, b)
    }

    /// Distance between two dynamically typed values.
    ///
    /// Both values must be JSON strings; anything else (null, numbers,
    /// arrays, ...) fails with [`DistanceError::InvalidInput`].
    #[cfg(feature = "serialization")]
    pub fn distance_value(&self, a: &serde_json::Value, b: &serde_json::Value) -> Result<usize> {
        let a = expect_str("a", a)?;
        let b = expect_str("b", b)?;
        self.distance(a, b)
    }

    /// Distance plus skeletons and classification.
    pub fn compare(&self, a: &str, b: &str) -> Result<Comparison> {
        self.check_len("a", a.chars().count())?;
        self.check_len("b", b.chars().count())?;

        let skeleton_a = Skeleton::new(a);
        let skeleton_b = Skeleton::new(b);
        let distance = self.distance_unchecked(&skeleton_a, &skeleton_b);

        Ok(Comparison {
            distance,
            similarity: Similarity::from_distance(distance),
            skeleton_a: skeleton_a.to_string_lossy(),
            skeleton_b: skeleton_b.to_string_lossy(),
        })
    }

    fn distance_unchecked(&self, a: &Skeleton, b: &Skeleton) -> usize {
        let distance = levenshtein(a.as_slice(), b.as_slice());
        debug!(len_a = a.len(), len_b = b.len(), distance, "computed confusable distance");
        distance
    }

    fn check_len(&self, argument: &'static str, length: usize) -> Result<()> {
        match self.config.max_input_len {
            Some(max) if length > max => {
                warn!(argument, length, max, "input rejected by length limit");
                Err(DistanceError::ResourceLimitExceeded {
                    argument,
                    length,
                    max,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "serialization")]
fn expect_str<'v>(argument: &'static str, value: &'v serde_json::Value) -> Result<&'v str> {
    use serde_json::Value;

    let kind = match value {
        Value::String(s) => return Ok(s),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Err(DistanceError::invalid_input(
        argument,
        format!("expected a string, got {kind}"),
    ))
}

/// Builder for [`ConfusableDistance`].
///
/// ```rust
/// use confusable_distance::ConfusableDistance;
///
/// let engine = ConfusableDistance::builder().max_input_len(64).build()?;
/// assert!(engine.distance(&"a".repeat(65), "a").is_err());
/// # Ok::<(), confusable_distance::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfusableDistanceBuilder {
    config: EngineConfig,
}

impl ConfusableDistanceBuilder {
    /// Builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input length in code points.
    pub fn max_input_len(mut self, max: usize) -> Self {
        self.config.max_input_len = Some(max);
        self
    }

    /// Disable the input length limit.
    pub fn unlimited(mut self) -> Self {
        self.config.max_input_len = None;
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> std::result::Result<ConfusableDistance, ConfigError> {
        ConfusableDistance::with_config(self.config)
    }
}
