//! Sealed class strategy with a broken add capability
//!
//! The calculator type's add method is declared to always fail with
//! [`BROKEN_ADD_MESSAGE`]. Methods are fixed once the type is declared, so
//! nothing defined afterwards (including a freshly defined
//! [`AddCapability`](crate::AddCapability)) can stand in for it.

use crate::counter::DefinitionCounter;
use crate::registry::StrategyKind;
use crate::strategy::{
    AddBehavior, Calculator, CalculatorError, CalculatorStrategy, InstanceSharing, Maker,
    BROKEN_ADD_MESSAGE,
};
use std::rc::Rc;

/// Sealed class strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct SealedClassStrategy;

impl SealedClassStrategy {
    /// Create new sealed class strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorStrategy for SealedClassStrategy {
    fn build(&self, _counter: &Rc<DefinitionCounter>) -> Maker {
        tracing::debug!(
            strategy = self.name(),
            add = ?self.add_behavior(),
            message = BROKEN_ADD_MESSAGE,
            "sealed calculator add method"
        );

        Maker::new(|| Box::new(SealedCalculator::new()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::SealedClass
    }

    fn instance_sharing(&self) -> InstanceSharing {
        InstanceSharing::Independent
    }

    fn add_behavior(&self) -> AddBehavior {
        AddBehavior::AlwaysFails
    }
}

/// Calculator whose add always fails
#[derive(Debug, Clone, Default)]
pub struct SealedCalculator {
    result: f64,
}

impl SealedCalculator {
    /// Create a calculator at zero
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Calculator for SealedCalculator {
    fn result(&self) -> f64 {
        self.result
    }

    fn add(&mut self, _amount: f64) -> Result<&mut dyn Calculator, CalculatorError> {
        Err(CalculatorError::broken_add())
    }

    fn times(&mut self, factor: f64) -> &mut dyn Calculator {
        self.result *= factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::AddCapability;

    #[test]
    fn add_fails_with_message() {
        let mut calc = SealedCalculator::new();
        let err = calc.add(10.0).unwrap_err();
        assert_eq!(err.to_string(), "Whaaat");
        assert_eq!(calc.result(), 0.0);
    }

    #[test]
    fn times_still_works() {
        let mut calc = SealedCalculator::new();
        calc.times(3.0);
        assert_eq!(calc.result(), 0.0);

        let mut calc = SealedCalculator { result: 2.5 };
        calc.times(4.0).times(0.5);
        assert_eq!(calc.result(), 5.0);
    }

    #[test]
    fn defining_add_afterwards_does_not_repair() {
        let counter = DefinitionCounter::shared();
        let maker = SealedClassStrategy::new().build(&counter);
        assert_eq!(counter.get(), 0);

        let patch = AddCapability::define(&counter);
        assert_eq!(counter.get(), 1);
        assert_eq!(patch.apply(0.0, 1.0), 1.0);

        let mut calc = maker.make();
        assert_eq!(calc.add(1.0).map(|_| ()), Err(CalculatorError::broken_add()));
        assert_eq!(calc.result(), 0.0);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn build_defines_nothing() {
        let counter = DefinitionCounter::shared();
        let maker = SealedClassStrategy::new().build(&counter);
        let _ = maker.make();
        assert_eq!(counter.get(), 0);
    }
}
