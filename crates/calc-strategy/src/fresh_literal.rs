//! Fresh literal strategy
//!
//! Every maker call assembles a brand new calculator from parts. The add
//! capability is defined once, outside the maker, and handed to each
//! instance by reference; `times` is written inline per instance.

use crate::counter::{AddCapability, DefinitionCounter};
use crate::registry::StrategyKind;
use crate::strategy::{
    AddBehavior, Calculator, CalculatorError, CalculatorStrategy, InstanceSharing, Maker,
};
use std::rc::Rc;

/// Fresh literal strategy: new aggregate per call, shared add
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshLiteralStrategy;

impl FreshLiteralStrategy {
    /// Create new fresh literal strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorStrategy for FreshLiteralStrategy {
    fn build(&self, counter: &Rc<DefinitionCounter>) -> Maker {
        let add = AddCapability::define(counter);
        tracing::debug!(strategy = self.name(), "add capability defined outside the maker");

        Maker::new(move || Box::new(LiteralCalculator::assemble(add.clone())))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::FreshLiteral
    }

    fn instance_sharing(&self) -> InstanceSharing {
        InstanceSharing::Independent
    }

    fn add_behavior(&self) -> AddBehavior {
        AddBehavior::Arithmetic
    }
}

/// Calculator assembled field by field
pub struct LiteralCalculator {
    result: f64,
    add: AddCapability,
    times: Box<dyn Fn(f64, f64) -> f64>,
}

impl LiteralCalculator {
    /// Assemble around an already defined add capability
    pub(crate) fn assemble(add: AddCapability) -> Self {
        Self {
            result: 0.0,
            add,
            times: Box::new(|result: f64, factor: f64| result * factor),
        }
    }

    /// The add capability this instance holds
    #[inline]
    #[must_use]
    pub fn add_capability(&self) -> &AddCapability {
        &self.add
    }
}

impl std::fmt::Debug for LiteralCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiteralCalculator")
            .field("result", &self.result)
            .field("add", &self.add)
            .finish_non_exhaustive()
    }
}

impl Calculator for LiteralCalculator {
    fn result(&self) -> f64 {
        self.result
    }

    fn add(&mut self, amount: f64) -> Result<&mut dyn Calculator, CalculatorError> {
        self.result = self.add.apply(self.result, amount);
        Ok(self)
    }

    fn times(&mut self, factor: f64) -> &mut dyn Calculator {
        self.result = (self.times)(self.result, factor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_share_one_definition() {
        let counter = DefinitionCounter::new();
        let add = AddCapability::define(&counter);

        let a = LiteralCalculator::assemble(add.clone());
        let b = LiteralCalculator::assemble(add.clone());
        assert!(a.add_capability().same_definition(b.add_capability()));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn maker_does_not_redefine_add() {
        let counter = DefinitionCounter::shared();
        let maker = FreshLiteralStrategy::new().build(&counter);
        counter.reset();

        for _ in 0..1_000 {
            let _ = maker.make();
        }
        assert_eq!(counter.get(), 0);
        assert_eq!(maker.produced(), 1_000);
    }

    #[test]
    fn instances_are_independent() {
        let counter = DefinitionCounter::shared();
        let maker = FreshLiteralStrategy::new().build(&counter);

        let mut first = maker.make();
        let second = maker.make();
        first.add(7.0).unwrap();

        assert_eq!(first.result(), 7.0);
        assert_eq!(second.result(), 0.0);
    }
}
