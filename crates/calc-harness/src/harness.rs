//! Verification harness
//!
//! Builds one maker from the configured strategy, then runs every
//! [`CheckKind`] against it in order. Each check resets the definition
//! counter first, so the add definition made while building the maker is
//! never inside a measured window.

use crate::check::{CheckFailure, CheckKind, CheckOutcome, expect_result};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::report::HarnessReport;
use calc_strategy::{
    CalculatorStrategy, DefinitionCounter, Maker, StrategyHint, StrategyRegistry, StrategySelector,
};
use std::rc::Rc;

/// Runs the checks against one strategy
#[derive(Debug)]
pub struct Harness {
    config: HarnessConfig,
    strategy: Box<dyn CalculatorStrategy>,
    counter: Rc<DefinitionCounter>,
    maker: Maker,
    definitions_at_build: u64,
}

impl Harness {
    /// Build the configured strategy's maker
    ///
    /// # Errors
    /// [`HarnessError::InvalidConfig`] if the configuration does not validate.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        let strategy = config.strategy.strategy();
        Ok(Self::with_strategy(config, strategy))
    }

    /// Build a strategy picked by name from `registry`
    ///
    /// # Errors
    /// [`HarnessError::Strategy`] if the name is unknown or unregistered,
    /// [`HarnessError::InvalidConfig`] if the configuration does not validate.
    pub fn from_registry(
        registry: &StrategyRegistry,
        name: &str,
        config: HarnessConfig,
    ) -> Result<Self, HarnessError> {
        config.validate()?;
        let strategy = registry.select(name)?;
        let config = config.with_strategy(strategy.kind());
        Ok(Self::with_strategy(config, strategy))
    }

    /// Build the strategy a [`StrategySelector`] picks for `hint`
    ///
    /// # Errors
    /// [`HarnessError::Strategy`] if the picked strategy is not in `registry`,
    /// [`HarnessError::InvalidConfig`] if the configuration does not validate.
    pub fn from_hint(
        registry: &StrategyRegistry,
        hint: StrategyHint,
        config: HarnessConfig,
    ) -> Result<Self, HarnessError> {
        let kind = StrategySelector::new().with_hint(hint).select_kind();
        Self::from_registry(registry, kind.as_str(), config)
    }

    fn with_strategy(config: HarnessConfig, strategy: Box<dyn CalculatorStrategy>) -> Self {
        let counter = DefinitionCounter::shared();
        let maker = strategy.build(&counter);
        let definitions_at_build = counter.get();
        tracing::debug!(
            strategy = strategy.name(),
            definitions = definitions_at_build,
            "maker built"
        );

        Self {
            config,
            strategy,
            counter,
            maker,
            definitions_at_build,
        }
    }

    /// The definition counter checks reset and read
    #[inline]
    #[must_use]
    pub fn counter(&self) -> &Rc<DefinitionCounter> {
        &self.counter
    }

    /// The strategy under test
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> &dyn CalculatorStrategy {
        self.strategy.as_ref()
    }

    /// Run every check in order
    pub fn run(&self) -> HarnessReport {
        let checks = CheckKind::ALL
            .into_iter()
            .map(|check| CheckOutcome::from_result(check, self.run_check(check)))
            .collect();

        let report = HarnessReport {
            strategy: self.strategy.kind(),
            instance_count: self.config.instance_count,
            definitions_at_build: self.definitions_at_build,
            instances_created: self.maker.produced(),
            checks,
        };
        tracing::info!(
            strategy = self.strategy.name(),
            passed = report.passed_count(),
            failed = report.failed_count(),
            "checks finished"
        );
        report
    }

    /// Reset the counter and run one check
    ///
    /// # Errors
    /// The check's [`CheckFailure`].
    pub fn run_check(&self, check: CheckKind) -> Result<(), CheckFailure> {
        self.counter.reset();
        tracing::debug!(strategy = self.strategy.name(), %check, "running check");

        let result = match check {
            CheckKind::DefaultValue => self.default_value(),
            CheckKind::Addition => self.addition(),
            CheckKind::Chaining => self.chaining(),
            CheckKind::SharingScale => self.sharing_scale(),
            CheckKind::Independence => self.independence(),
        };
        if let Err(failure) = &result {
            tracing::warn!(strategy = self.strategy.name(), %check, %failure, "check failed");
        }
        result
    }

    fn default_value(&self) -> Result<(), CheckFailure> {
        let calculator = self.maker.make();
        expect_result(0.0, calculator.result())
    }

    fn addition(&self) -> Result<(), CheckFailure> {
        let mut calculator = self.maker.make();
        expect_result(0.0, calculator.result())?;
        calculator.add(10.0)?;
        expect_result(10.0, calculator.result())
    }

    fn chaining(&self) -> Result<(), CheckFailure> {
        let mut calculator = self.maker.make();
        expect_result(0.0, calculator.result())?;
        calculator.times(2.0).add(10.0)?.times(2.0);
        expect_result(20.0, calculator.result())
    }

    fn sharing_scale(&self) -> Result<(), CheckFailure> {
        let definitions = self.counter.get();
        if definitions != 0 {
            return Err(CheckFailure::CounterChanged {
                definitions,
                instances: 0,
            });
        }

        let instances = self.config.instance_count;
        for _ in 0..instances {
            let _calculator = self.maker.make();
        }

        match self.counter.get() {
            0 => Ok(()),
            definitions => Err(CheckFailure::CounterChanged {
                definitions,
                instances,
            }),
        }
    }

    #[allow(clippy::float_cmp)]
    fn independence(&self) -> Result<(), CheckFailure> {
        let mut first = self.maker.make();
        let second = self.maker.make();

        let before = second.result();
        first.add(10.0)?;
        let after = second.result();

        if after == before {
            Ok(())
        } else {
            Err(CheckFailure::SharedState { before, after })
        }
    }
}
