//! Explicit constructor strategy
//!
//! A named constructor initializes each instance's fields and is run through
//! [`CalculatorConstructor::instantiate`] on every maker call. Same layout as
//! the fresh literal, organized around the constructor instead.

use crate::counter::{AddCapability, DefinitionCounter};
use crate::registry::StrategyKind;
use crate::strategy::{
    AddBehavior, Calculator, CalculatorError, CalculatorStrategy, InstanceSharing, Maker,
};
use std::rc::Rc;

/// Explicit constructor strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitConstructorStrategy;

impl ExplicitConstructorStrategy {
    /// Create new explicit constructor strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorStrategy for ExplicitConstructorStrategy {
    fn build(&self, counter: &Rc<DefinitionCounter>) -> Maker {
        let constructor = CalculatorConstructor {
            add: AddCapability::define(counter),
        };
        tracing::debug!(strategy = self.name(), "constructor ready");

        Maker::new(move || Box::new(constructor.instantiate()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::ExplicitConstructor
    }

    fn instance_sharing(&self) -> InstanceSharing {
        InstanceSharing::Independent
    }

    fn add_behavior(&self) -> AddBehavior {
        AddBehavior::Arithmetic
    }
}

/// Named constructor for [`ConstructedCalculator`]
#[derive(Debug, Clone)]
pub struct CalculatorConstructor {
    add: AddCapability,
}

impl CalculatorConstructor {
    /// Run the constructor, producing one initialized instance
    #[must_use]
    pub fn instantiate(&self) -> ConstructedCalculator {
        ConstructedCalculator {
            result: 0.0,
            add: self.add.clone(),
            times: Box::new(|result: f64, factor: f64| result * factor),
        }
    }
}

/// Calculator produced by [`CalculatorConstructor`]
pub struct ConstructedCalculator {
    result: f64,
    add: AddCapability,
    times: Box<dyn Fn(f64, f64) -> f64>,
}

impl std::fmt::Debug for ConstructedCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructedCalculator")
            .field("result", &self.result)
            .field("add", &self.add)
            .finish_non_exhaustive()
    }
}

impl Calculator for ConstructedCalculator {
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
    fn instantiate_initializes_result() {
        let counter = DefinitionCounter::new();
        let constructor = CalculatorConstructor {
            add: AddCapability::define(&counter),
        };

        let calc = constructor.instantiate();
        assert_eq!(calc.result(), 0.0);
    }

    #[test]
    fn instantiate_reuses_constructor_add() {
        let counter = DefinitionCounter::new();
        let constructor = CalculatorConstructor {
            add: AddCapability::define(&counter),
        };

        let a = constructor.instantiate();
        let b = constructor.instantiate();
        assert!(a.add.same_definition(&b.add));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn instantiate_yields_working_times() {
        let counter = DefinitionCounter::new();
        let constructor = CalculatorConstructor {
            add: AddCapability::define(&counter),
        };

        let mut calc = constructor.instantiate();
        calc.add(3.0).unwrap().times(5.0);
        assert_eq!(calc.result(), 15.0);
    }

    #[test]
    fn chain_through_constructed_instance() {
        let counter = DefinitionCounter::shared();
        let maker = ExplicitConstructorStrategy::new().build(&counter);

        let mut calc = maker.make();
        calc.times(2.0).add(10.0).unwrap().times(2.0);
        assert_eq!(calc.result(), 20.0);
    }
}
