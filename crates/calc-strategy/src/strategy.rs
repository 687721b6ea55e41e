//! Calculator strategy trait and core types
//!
//! Provides the [`CalculatorStrategy`] trait for pluggable calculator
//! construction, the [`Calculator`] capability interface every produced
//! instance satisfies, and the [`Maker`] handed out by each strategy.

use crate::counter::DefinitionCounter;
use crate::registry::StrategyKind;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Message carried by the add capability that always fails
pub const BROKEN_ADD_MESSAGE: &str = "Whaaat";

/// Chainable calculator instance
///
/// Both mutators hand back the instance they were called on, so calls
/// compose left to right:
///
/// ```rust,ignore
/// calculator.times(2.0).add(10.0)?.times(2.0);
/// ```
pub trait Calculator: std::fmt::Debug {
    /// Current value
    fn result(&self) -> f64;

    /// Add `amount` to the result
    ///
    /// # Errors
    /// Returns [`CalculatorError::CapabilityFailed`] when the strategy's add
    /// capability is broken.
    fn add(&mut self, amount: f64) -> Result<&mut dyn Calculator, CalculatorError>;

    /// Multiply the result by `factor`
    fn times(&mut self, factor: f64) -> &mut dyn Calculator;
}

/// Calculator construction strategy
///
/// A strategy is a provider of [`Maker`]s. Whatever the strategy must define
/// up front (the add capability, a behavior table) is defined inside
/// [`CalculatorStrategy::build`], never inside the maker's hot path, unless the
/// strategy exists to demonstrate the opposite.
pub trait CalculatorStrategy: std::fmt::Debug {
    /// Build the maker, defining shared capabilities against `counter`
    fn build(&self, counter: &Rc<DefinitionCounter>) -> Maker;

    /// Which variant this is
    fn kind(&self) -> StrategyKind;

    /// Whether separate maker calls produce separate state
    fn instance_sharing(&self) -> InstanceSharing;

    /// How the produced instances' add capability behaves
    fn add_behavior(&self) -> AddBehavior;

    /// Strategy name (for logging/serialization)
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Zero-argument producer of calculator instances
pub struct Maker {
    produce: Box<dyn Fn() -> Box<dyn Calculator>>,
    produced: Cell<u64>,
}

impl Maker {
    /// Wrap a producing closure
    #[must_use]
    pub fn new(produce: impl Fn() -> Box<dyn Calculator> + 'static) -> Self {
        Self {
            produce: Box::new(produce),
            produced: Cell::new(0),
        }
    }

    /// Produce one calculator instance
    pub fn make(&self) -> Box<dyn Calculator> {
        self.produced.set(self.produced.get() + 1);
        (self.produce)()
    }

    /// Number of instances produced so far
    #[inline]
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced.get()
    }
}

impl std::fmt::Debug for Maker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maker")
            .field("produced", &self.produced.get())
            .finish_non_exhaustive()
    }
}

/// Instance state sharing characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceSharing {
    /// Every maker call yields independent state
    Independent,

    /// Every maker call yields the same underlying object
    Shared,
}

impl InstanceSharing {
    /// Check if instances carry their own state
    #[inline]
    #[must_use]
    pub fn is_independent(self) -> bool {
        matches!(self, Self::Independent)
    }
}

/// Add capability characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddBehavior {
    /// Add performs addition
    Arithmetic,

    /// Add always fails with [`BROKEN_ADD_MESSAGE`]
    AlwaysFails,
}

/// Calculator capability error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    /// A capability refused to run
    #[error("{message}")]
    CapabilityFailed {
        /// Capability that failed
        capability: &'static str,
        /// Failure message
        message: String,
    },
}

impl CalculatorError {
    /// The error raised by a broken add capability
    #[inline]
    #[must_use]
    pub fn broken_add() -> Self {
        Self::CapabilityFailed {
            capability: "add",
            message: BROKEN_ADD_MESSAGE.to_string(),
        }
    }

    /// Failure message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::CapabilityFailed { message, .. } => message,
        }
    }
}
