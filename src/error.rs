//! Error types for the composed distance operation.
//!
//! Only the public entry points fail. Skeleton construction and the edit
//! distance itself are total, so their signatures carry no `Result`.

/// Errors returned by [`confusable_distance`](crate::confusable_distance)
/// and the [`ConfusableDistance`](crate::ConfusableDistance) engine.
///
/// Both variants are raised before any normalization work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// An argument is not a valid string value.
    #[error("Invalid input for argument `{argument}`: {reason}")]
    InvalidInput {
        /// Which argument was rejected (`"a"` or `"b"`).
        argument: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An argument is longer than the configured maximum.
    #[error("Input `{argument}` has {length} characters, exceeding the limit of {max}")]
    ResourceLimitExceeded {
        /// Which argument was rejected (`"a"` or `"b"`).
        argument: &'static str,
        /// Length of the argument in code points.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl DistanceError {
    pub(crate) fn invalid_input(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            argument,
            reason: reason.into(),
        }
    }

    /// Whether this is [`DistanceError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether this is [`DistanceError::ResourceLimitExceeded`].
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, Self::ResourceLimitExceeded { .. })
    }

    /// The argument the error refers to.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidInput { argument, .. } | Self::ResourceLimitExceeded { argument, .. } => {
                *argument
            }
        }
    }
}

/// Error type for engine configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A length limit of zero would reject every non-empty input
    #[error("max_input_len must be at least 1. Use .unlimited() to disable the limit.")]
    ZeroInputLimit,
}

/// Result alias for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;
