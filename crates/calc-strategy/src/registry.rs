//! Strategy registry for calculator strategies
//!
//! Provides [`StrategyKind`], the closed set of variants, and
//! [`StrategyRegistry`] for managing and selecting them by name.

use crate::behavior_table::SharedBehaviorTableStrategy;
use crate::explicit_constructor::ExplicitConstructorStrategy;
use crate::fresh_literal::FreshLiteralStrategy;
use crate::redefining::RedefiningLiteralStrategy;
use crate::sealed_class::SealedClassStrategy;
use crate::shared_instance::SharedInstanceStrategy;
use crate::strategy::CalculatorStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Every calculator construction variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// One object handed out by every maker call
    SharedInstance,

    /// New aggregate per call around a shared add
    FreshLiteral,

    /// Named constructor run per call
    ExplicitConstructor,

    /// Per-instance result, capabilities in one shared table
    #[default]
    SharedBehaviorTable,

    /// Class-style type whose add always fails
    SealedClass,

    /// Defines add on every maker call
    RedefiningLiteral,
}

impl StrategyKind {
    /// The five variants registered by default
    pub const DEFAULTS: [Self; 5] = [
        Self::SharedInstance,
        Self::FreshLiteral,
        Self::ExplicitConstructor,
        Self::SharedBehaviorTable,
        Self::SealedClass,
    ];

    /// Every variant, including those kept out of the default registry
    pub const ALL: [Self; 6] = [
        Self::SharedInstance,
        Self::FreshLiteral,
        Self::ExplicitConstructor,
        Self::SharedBehaviorTable,
        Self::SealedClass,
        Self::RedefiningLiteral,
    ];

    /// Stable name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SharedInstance => "shared_instance",
            Self::FreshLiteral => "fresh_literal",
            Self::ExplicitConstructor => "explicit_constructor",
            Self::SharedBehaviorTable => "shared_behavior_table",
            Self::SealedClass => "sealed_class",
            Self::RedefiningLiteral => "redefining_literal",
        }
    }

    /// Instantiate the strategy for this variant
    #[must_use]
    pub fn strategy(self) -> Box<dyn CalculatorStrategy> {
        match self {
            Self::SharedInstance => Box::new(SharedInstanceStrategy::new()),
            Self::FreshLiteral => Box::new(FreshLiteralStrategy::new()),
            Self::ExplicitConstructor => Box::new(ExplicitConstructorStrategy::new()),
            Self::SharedBehaviorTable => Box::new(SharedBehaviorTableStrategy::new()),
            Self::SealedClass => Box::new(SealedClassStrategy::new()),
            Self::RedefiningLiteral => Box::new(RedefiningLiteralStrategy::new()),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StrategyError::Unknown(s.to_string()))
    }
}

/// Strategy selection error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// No variant carries this name
    #[error("unknown strategy: {0}")]
    Unknown(String),

    /// Variant exists but is not registered
    #[error("strategy not registered: {0}")]
    NotRegistered(StrategyKind),

    /// No hint carries this name
    #[error("unknown strategy hint: {0}")]
    UnknownHint(String),
}

/// Registry of selectable calculator strategies
#[derive(Debug, Default, Clone)]
pub struct StrategyRegistry {
    strategies: BTreeMap<&'static str, StrategyKind>,
}

impl StrategyRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// Create registry with the five built-in strategies
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in StrategyKind::DEFAULTS {
            registry.register(kind);
        }
        registry
    }

    /// Register a strategy
    pub fn register(&mut self, kind: StrategyKind) {
        self.strategies.insert(kind.as_str(), kind);
    }

    /// Check if strategy is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: StrategyKind) -> bool {
        self.strategies.contains_key(kind.as_str())
    }

    /// Remove strategy
    #[inline]
    pub fn remove(&mut self, kind: StrategyKind) -> bool {
        self.strategies.remove(kind.as_str()).is_some()
    }

    /// Look up a registered strategy by name
    ///
    /// # Errors
    /// [`StrategyError::Unknown`] for names no variant carries,
    /// [`StrategyError::NotRegistered`] for variants left out of this registry.
    pub fn select(&self, name: &str) -> Result<Box<dyn CalculatorStrategy>, StrategyError> {
        let kind: StrategyKind = name.parse()?;
        self.select_kind(kind)
    }

    /// Look up a registered strategy by variant
    ///
    /// # Errors
    /// [`StrategyError::NotRegistered`] if the variant is not registered.
    pub fn select_kind(
        &self,
        kind: StrategyKind,
    ) -> Result<Box<dyn CalculatorStrategy>, StrategyError> {
        if self.contains(kind) {
            Ok(kind.strategy())
        } else {
            Err(StrategyError::NotRegistered(kind))
        }
    }

    /// List all registered strategy names, sorted
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.keys().copied().collect()
    }

    /// Get number of registered strategies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Iterate over registered variants
    pub fn iter(&self) -> impl Iterator<Item = StrategyKind> + '_ {
        self.strategies.values().copied()
    }
}

/// Strategy selection hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyHint {
    /// Independent instances with shared capabilities - default
    #[default]
    Isolation,

    /// A single object for every caller
    Singleton,

    /// Ad hoc aggregate per call
    Literal,

    /// Named constructor per call
    Constructor,

    /// Class-style sealed type
    Sealed,
}

impl StrategyHint {
    /// Every hint
    pub const ALL: [Self; 5] = [
        Self::Isolation,
        Self::Singleton,
        Self::Literal,
        Self::Constructor,
        Self::Sealed,
    ];

    /// Stable name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Isolation => "isolation",
            Self::Singleton => "singleton",
            Self::Literal => "literal",
            Self::Constructor => "constructor",
            Self::Sealed => "sealed",
        }
    }
}

impl FromStr for StrategyHint {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hint| hint.as_str() == s)
            .ok_or_else(|| StrategyError::UnknownHint(s.to_string()))
    }
}

/// Builder for strategy selection
#[derive(Debug, Default)]
pub struct StrategySelector {
    hint: StrategyHint,
}

impl StrategySelector {
    /// Create new selector
    #[must_use]
    pub fn new() -> Self {
        Self {
            hint: StrategyHint::Isolation,
        }
    }

    /// Set selection hint
    #[inline]
    #[must_use]
    pub fn with_hint(mut self, hint: StrategyHint) -> Self {
        self.hint = hint;
        self
    }

    /// Select strategy variant based on hint
    #[must_use]
    pub fn select_kind(&self) -> StrategyKind {
        match self.hint {
            StrategyHint::Isolation => StrategyKind::SharedBehaviorTable,
            StrategyHint::Singleton => StrategyKind::SharedInstance,
            StrategyHint::Literal => StrategyKind::FreshLiteral,
            StrategyHint::Constructor => StrategyKind::ExplicitConstructor,
            StrategyHint::Sealed => StrategyKind::SealedClass,
        }
    }
}
