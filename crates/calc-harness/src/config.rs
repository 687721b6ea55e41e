//! Harness configuration
//!
//! [`HarnessConfig`] is the single switch that decides which strategy the
//! checks run against.

use crate::error::HarnessError;
use calc_strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Instances created by the sharing check unless configured otherwise
pub const DEFAULT_INSTANCE_COUNT: usize = 10_000;

/// Verification harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Strategy under test
    pub strategy: StrategyKind,
    /// Instances created by the sharing check
    pub instance_count: usize,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl HarnessConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strategy under test
    #[inline]
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// With instance count for the sharing check
    #[inline]
    #[must_use]
    pub fn with_instance_count(mut self, count: usize) -> Self {
        self.instance_count = count;
        self
    }

    /// With default log filter
    #[inline]
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Parse from JSON; missing fields take their defaults
    ///
    /// # Errors
    /// [`HarnessError::ConfigParse`] on malformed JSON or unknown strategy
    /// names, [`HarnessError::InvalidConfig`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    /// [`HarnessError::InvalidConfig`] when the sharing check would create no
    /// instances.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.instance_count == 0 {
            return Err(HarnessError::invalid_config(
                "instance_count must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            instance_count: DEFAULT_INSTANCE_COUNT,
            log_level: "info".to_string(),
        }
    }
}
