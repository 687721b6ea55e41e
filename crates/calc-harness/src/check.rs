//! Checks run against the active strategy

use calc_strategy::CalculatorError;
use serde::{Serialize, Serializer};

/// A single named check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// A fresh instance starts at 0
    DefaultValue,
    /// `add(10)` on a fresh instance gives 10
    Addition,
    /// `times(2).add(10).times(2)` on a fresh instance gives 20
    Chaining,
    /// Creating many instances defines no add capability
    SharingScale,
    /// Mutating one instance leaves another untouched
    Independence,
}

impl CheckKind {
    /// Run order
    pub const ALL: [Self; 5] = [
        Self::DefaultValue,
        Self::Addition,
        Self::Chaining,
        Self::SharingScale,
        Self::Independence,
    ];

    /// Human-readable description, as reported
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::DefaultValue => "has a default result of 0",
            Self::Addition => "can add numbers",
            Self::Chaining => "can chain commands",
            Self::SharingScale => "does not define an add capability per instance",
            Self::Independence => "keeps instances independent",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.description())
    }
}

/// Why a check failed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckFailure {
    /// Observed result differs from the expected one
    #[error("expected result {expected}, got {actual}")]
    Mismatch {
        /// Expected value
        expected: f64,
        /// Observed value
        actual: f64,
    },

    /// The add capability was defined inside the measured window
    #[error("add capability defined {definitions} time(s) across {instances} instance(s), expected 0")]
    CounterChanged {
        /// Definitions observed
        definitions: u64,
        /// Instances created when observed
        instances: usize,
    },

    /// A capability call failed
    #[error("capability failed: {0}")]
    Capability(#[from] CalculatorError),

    /// Two maker calls share state
    #[error("mutating one instance changed another from {before} to {after}")]
    SharedState {
        /// Other instance's result before the mutation
        before: f64,
        /// Other instance's result after the mutation
        after: f64,
    },
}

/// Assert an observed result
///
/// # Errors
/// [`CheckFailure::Mismatch`] when `actual != expected`.
#[allow(clippy::float_cmp)]
pub fn expect_result(expected: f64, actual: f64) -> Result<(), CheckFailure> {
    if actual == expected {
        Ok(())
    } else {
        Err(CheckFailure::Mismatch { expected, actual })
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    /// Which check
    pub check: CheckKind,
    /// Failure, if any
    #[serde(serialize_with = "serialize_failure")]
    pub failure: Option<CheckFailure>,
}

impl CheckOutcome {
    /// Build from a check's result
    #[must_use]
    pub fn from_result(check: CheckKind, result: Result<(), CheckFailure>) -> Self {
        Self {
            check,
            failure: result.err(),
        }
    }

    /// Check if the check passed
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[allow(clippy::ref_option)]
fn serialize_failure<S: Serializer>(
    failure: &Option<CheckFailure>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    failure
        .as_ref()
        .map(ToString::to_string)
        .serialize(serializer)
}
