//! Shared behavior table strategy
//!
//! Capabilities live in one [`BehaviorTable`] built with the strategy.
//! Instances hold only their own result and delegate every capability lookup
//! to the table.

use crate::counter::{AddCapability, DefinitionCounter};
use crate::registry::StrategyKind;
use crate::strategy::{
    AddBehavior, Calculator, CalculatorError, CalculatorStrategy, InstanceSharing, Maker,
};
use std::rc::Rc;

/// Shared behavior table strategy: per-instance state, shared capabilities
///
/// # Characteristics
/// - One table per strategy build, referenced by every instance
/// - Smallest per-instance footprint of all variants
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedBehaviorTableStrategy;

impl SharedBehaviorTableStrategy {
    /// Create new shared behavior table strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorStrategy for SharedBehaviorTableStrategy {
    fn build(&self, counter: &Rc<DefinitionCounter>) -> Maker {
        let table = Rc::new(BehaviorTable::new(AddCapability::define(counter)));
        tracing::debug!(strategy = self.name(), "behavior table attached");

        Maker::new(move || Box::new(DelegatingCalculator::new(Rc::clone(&table))))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::SharedBehaviorTable
    }

    fn instance_sharing(&self) -> InstanceSharing {
        InstanceSharing::Independent
    }

    fn add_behavior(&self) -> AddBehavior {
        AddBehavior::Arithmetic
    }
}

/// Capabilities shared by every [`DelegatingCalculator`] of one build
#[derive(Debug)]
pub struct BehaviorTable {
    add: AddCapability,
    times: fn(f64, f64) -> f64,
}

impl BehaviorTable {
    fn new(add: AddCapability) -> Self {
        Self {
            add,
            times: |result, factor| result * factor,
        }
    }
}

/// Calculator that owns only its result
#[derive(Debug, Clone)]
pub struct DelegatingCalculator {
    result: f64,
    table: Rc<BehaviorTable>,
}

impl DelegatingCalculator {
    fn new(table: Rc<BehaviorTable>) -> Self {
        Self { result: 0.0, table }
    }

    /// The table this instance delegates to
    #[inline]
    #[must_use]
    pub fn table(&self) -> &Rc<BehaviorTable> {
        &self.table
    }
}

impl Calculator for DelegatingCalculator {
    fn result(&self) -> f64 {
        self.result
    }

    fn add(&mut self, amount: f64) -> Result<&mut dyn Calculator, CalculatorError> {
        self.result = self.table.add.apply(self.result, amount);
        Ok(self)
    }

    fn times(&mut self, factor: f64) -> &mut dyn Calculator {
        self.result = (self.table.times)(self.result, factor);
        self
    }
}
