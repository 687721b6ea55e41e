//! Redefining literal strategy
//!
//! Assembles instances like [`FreshLiteralStrategy`](crate::FreshLiteralStrategy)
//! but runs the add capability's defining code inside the maker, once per
//! instance. Kept out of the default registry; it exists so the sharing check
//! has a variant it must reject.

use crate::counter::{AddCapability, DefinitionCounter};
use crate::fresh_literal::LiteralCalculator;
use crate::registry::StrategyKind;
use crate::strategy::{AddBehavior, CalculatorStrategy, InstanceSharing, Maker};
use std::rc::Rc;

/// Redefining literal strategy: add defined per maker call
#[derive(Debug, Clone, Copy, Default)]
pub struct RedefiningLiteralStrategy;

impl RedefiningLiteralStrategy {
    /// Create new redefining literal strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorStrategy for RedefiningLiteralStrategy {
    fn build(&self, counter: &Rc<DefinitionCounter>) -> Maker {
        let counter = Rc::clone(counter);
        Maker::new(move || Box::new(LiteralCalculator::assemble(AddCapability::define(&counter))))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::RedefiningLiteral
    }

    fn instance_sharing(&self) -> InstanceSharing {
        InstanceSharing::Independent
    }

    fn add_behavior(&self) -> AddBehavior {
        AddBehavior::Arithmetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_instance_defines_add() {
        let counter = DefinitionCounter::shared();
        let maker = RedefiningLiteralStrategy::new().build(&counter);
        assert_eq!(counter.get(), 0);

        for _ in 0..25 {
            let _ = maker.make();
        }
        assert_eq!(counter.get(), 25);
    }

    #[test]
    fn arithmetic_still_correct() {
        let counter = DefinitionCounter::shared();
        let maker = RedefiningLiteralStrategy::new().build(&counter);

        let mut calc = maker.make();
        calc.times(2.0).add(10.0).unwrap().times(2.0);
        assert_eq!(calc.result(), 20.0);
    }
}
