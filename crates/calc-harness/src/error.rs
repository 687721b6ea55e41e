//! Error types for the verification harness

use calc_strategy::StrategyError;

/// Harness setup error
///
/// Check failures are not errors at this level; they are recorded in the
/// [`HarnessReport`](crate::HarnessReport).
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Strategy selection failed
    #[error("strategy selection failed: {0}")]
    Strategy(#[from] StrategyError),

    /// Configuration rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl HarnessError {
    /// Create invalid configuration error
    #[inline]
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
