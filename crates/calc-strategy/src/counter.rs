//! Add capability definitions and the counter that observes them

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times the add capability has been defined
///
/// Owned by whoever runs the checks and handed to strategies explicitly,
/// so every harness gets its own isolated count.
#[derive(Debug, Default)]
pub struct DefinitionCounter {
    count: Cell<u64>,
}

impl DefinitionCounter {
    /// Create a counter at zero
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter ready to be shared with a strategy
    #[inline]
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Definitions recorded since the last reset
    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.count.get()
    }

    /// Set the count back to zero
    #[inline]
    pub fn reset(&self) {
        self.count.set(0);
    }

    fn record(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// A defined add capability
///
/// Cloning shares the definition; only [`AddCapability::define`] creates a
/// new one.
#[derive(Clone)]
pub struct AddCapability {
    apply: Rc<dyn Fn(f64, f64) -> f64>,
}

impl AddCapability {
    /// Run the add capability's defining code once
    #[must_use]
    pub fn define(counter: &DefinitionCounter) -> Self {
        counter.record();
        tracing::trace!(definitions = counter.get(), "add capability defined");
        Self {
            apply: Rc::new(|result: f64, amount: f64| result + amount),
        }
    }

    /// Apply to a result
    #[inline]
    #[must_use]
    pub fn apply(&self, result: f64, amount: f64) -> f64 {
        (self.apply)(result, amount)
    }

    /// Check whether two values come from the same definition
    #[inline]
    #[must_use]
    pub fn same_definition(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.apply, &other.apply)
    }
}

impl std::fmt::Debug for AddCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddCapability")
            .field("shares", &Rc::strong_count(&self.apply))
            .finish()
    }
}
