//! Shared instance strategy
//!
//! One calculator is built when the strategy is built, and every maker call
//! hands out that same object. Mutations through any handle are visible
//! through all of them.

use crate::counter::{AddCapability, DefinitionCounter};
use crate::registry::StrategyKind;
use crate::strategy::{
    AddBehavior, Calculator, CalculatorError, CalculatorStrategy, InstanceSharing, Maker,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared instance strategy: one object behind every handle
///
/// # Characteristics
/// - Add capability defined once
/// - No per-instance state; separate maker calls alias each other
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedInstanceStrategy;

impl SharedInstanceStrategy {
    /// Create new shared instance strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorStrategy for SharedInstanceStrategy {
    fn build(&self, counter: &Rc<DefinitionCounter>) -> Maker {
        let instance = SharedCalculator {
            inner: Rc::new(RefCell::new(Tally {
                result: 0.0,
                add: AddCapability::define(counter),
            })),
        };
        tracing::debug!(strategy = self.name(), "built the single shared calculator");

        Maker::new(move || Box::new(instance.clone()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::SharedInstance
    }

    fn instance_sharing(&self) -> InstanceSharing {
        InstanceSharing::Shared
    }

    fn add_behavior(&self) -> AddBehavior {
        AddBehavior::Arithmetic
    }
}

#[derive(Debug)]
struct Tally {
    result: f64,
    add: AddCapability,
}

/// Handle onto the single shared calculator
#[derive(Debug, Clone)]
pub struct SharedCalculator {
    inner: Rc<RefCell<Tally>>,
}

impl SharedCalculator {
    /// Check whether two handles point at the same calculator
    #[inline]
    #[must_use]
    pub fn same_object(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Calculator for SharedCalculator {
    fn result(&self) -> f64 {
        self.inner.borrow().result
    }

    fn add(&mut self, amount: f64) -> Result<&mut dyn Calculator, CalculatorError> {
        {
            let mut tally = self.inner.borrow_mut();
            tally.result = tally.add.apply(tally.result, amount);
        }
        Ok(self)
    }

    fn times(&mut self, factor: f64) -> &mut dyn Calculator {
        self.inner.borrow_mut().result *= factor;
        self
    }
}
