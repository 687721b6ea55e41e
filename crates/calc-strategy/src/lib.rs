//! Calculator Construction Strategies
//!
//! Interchangeable ways of building chainable calculator objects, each
//! instrumented so callers can see how often the add capability is defined.
//!
//! # Core Concepts
//!
//! - [`CalculatorStrategy`]: Core trait; builds a [`Maker`]
//! - [`Calculator`]: Capability interface every instance satisfies
//! - [`DefinitionCounter`]: Observes [`AddCapability::define`] calls
//! - [`SharedInstanceStrategy`]: One object behind every handle
//! - [`FreshLiteralStrategy`]: New aggregate per call, shared add
//! - [`ExplicitConstructorStrategy`]: Named constructor per call
//! - [`SharedBehaviorTableStrategy`]: Capabilities in one shared table
//! - [`SealedClassStrategy`]: Add always fails
//! - [`StrategyRegistry`]: Registry for strategy selection
//!
//! # Example
//!
//! ```rust
//! use calc_strategy::{DefinitionCounter, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_defaults();
//! let strategy = registry.select("shared_behavior_table").unwrap();
//!
//! let counter = DefinitionCounter::shared();
//! let maker = strategy.build(&counter);
//! counter.reset();
//!
//! let mut calculator = maker.make();
//! calculator.times(2.0).add(10.0).unwrap().times(2.0);
//! assert_eq!(calculator.result(), 20.0);
//! assert_eq!(counter.get(), 0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Strategy implementations
mod behavior_table;
mod counter;
mod explicit_constructor;
mod fresh_literal;
mod redefining;
mod registry;
mod sealed_class;
mod shared_instance;
mod strategy;

// Re-exports
pub use behavior_table::{BehaviorTable, DelegatingCalculator, SharedBehaviorTableStrategy};
pub use counter::{AddCapability, DefinitionCounter};
pub use explicit_constructor::{
    CalculatorConstructor, ConstructedCalculator, ExplicitConstructorStrategy,
};
pub use fresh_literal::{FreshLiteralStrategy, LiteralCalculator};
pub use redefining::RedefiningLiteralStrategy;
pub use registry::{StrategyError, StrategyHint, StrategyKind, StrategyRegistry, StrategySelector};
pub use sealed_class::{SealedCalculator, SealedClassStrategy};
pub use shared_instance::{SharedCalculator, SharedInstanceStrategy};
pub use strategy::{
    AddBehavior, BROKEN_ADD_MESSAGE, Calculator, CalculatorError, CalculatorStrategy,
    InstanceSharing, Maker,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use proptest::prelude::*;

    fn arithmetic_kinds() -> impl Strategy<Value = StrategyKind> {
        prop_oneof![
            Just(StrategyKind::FreshLiteral),
            Just(StrategyKind::ExplicitConstructor),
            Just(StrategyKind::SharedBehaviorTable),
            Just(StrategyKind::RedefiningLiteral),
        ]
    }

    #[test]
    fn every_default_starts_at_zero() {
        for kind in StrategyKind::DEFAULTS {
            let counter = DefinitionCounter::shared();
            let maker = kind.strategy().build(&counter);
            assert_eq!(maker.make().result(), 0.0, "{kind}");
        }
    }

    #[test]
    fn add_behavior_matches_declaration() {
        for kind in StrategyKind::ALL {
            let strategy = kind.strategy();
            let counter = DefinitionCounter::shared();
            let mut calc = strategy.build(&counter).make();

            let outcome = calc.add(1.0).map(|_| ());
            match strategy.add_behavior() {
                AddBehavior::Arithmetic => assert!(outcome.is_ok(), "{kind}"),
                AddBehavior::AlwaysFails => {
                    assert_eq!(outcome, Err(CalculatorError::broken_add()), "{kind}");
                }
            }
        }
    }

    #[test]
    fn sharing_matches_declaration() {
        for kind in StrategyKind::ALL {
            let strategy = kind.strategy();
            let counter = DefinitionCounter::shared();
            let maker = strategy.build(&counter);

            let mut first = maker.make();
            let second = maker.make();
            first.times(0.0).times(3.0);
            let _ = first.add(5.0);
            first.times(2.0);

            let aliased = first.result() == second.result() && first.result() != 0.0;
            assert_eq!(
                aliased,
                !strategy.instance_sharing().is_independent(),
                "{kind}"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_add_is_chainable_addition(
            kind in arithmetic_kinds(),
            start in -1.0e6f64..1.0e6,
            amount in -1.0e6f64..1.0e6,
        ) {
            let counter = DefinitionCounter::shared();
            let mut calc = kind.strategy().build(&counter).make();
            calc.add(start).unwrap();

            let after = calc.add(amount).unwrap().result();
            prop_assert_eq!(after, start + amount);
            prop_assert_eq!(calc.result(), start + amount);
        }

        #[test]
        fn prop_times_is_chainable_multiplication(
            kind in prop_oneof![arithmetic_kinds(), Just(StrategyKind::SharedInstance)],
            start in -1.0e3f64..1.0e3,
            factor in -1.0e3f64..1.0e3,
            other in -1.0e3f64..1.0e3,
        ) {
            let counter = DefinitionCounter::shared();
            let mut calc = kind.strategy().build(&counter).make();
            calc.add(start).unwrap();

            let after = calc.times(factor).times(other).result();
            prop_assert_eq!(after, start * factor * other);
        }

        #[test]
        fn prop_independent_instances(
            kind in arithmetic_kinds(),
            amount in 1.0f64..1.0e6,
        ) {
            let counter = DefinitionCounter::shared();
            let maker = kind.strategy().build(&counter);

            let mut first = maker.make();
            let second = maker.make();
            first.add(amount).unwrap();

            prop_assert_eq!(first.result(), amount);
            prop_assert_eq!(second.result(), 0.0);
        }
    }
}
