//! Calculator Verification Harness
//!
//! Runs a fixed set of checks against one calculator construction strategy
//! and reports a pass/fail outcome per check.
//!
//! # Core Concepts
//!
//! - [`HarnessConfig`]: Selects the strategy and the sharing check's scale
//! - [`Harness`]: Builds the strategy's maker once, then runs every check
//! - [`CheckKind`]: Default value, addition, chaining, sharing, independence
//! - [`HarnessReport`]: Per-check outcomes, as text or JSON
//!
//! # Example
//!
//! ```rust
//! use calc_harness::{Harness, HarnessConfig};
//! use calc_strategy::StrategyKind;
//!
//! let config = HarnessConfig::new().with_strategy(StrategyKind::SharedBehaviorTable);
//! let report = Harness::new(config).unwrap().run();
//! assert!(report.passed());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod check;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod report;

pub use check::{CheckFailure, CheckKind, CheckOutcome};
pub use config::{DEFAULT_INSTANCE_COUNT, HarnessConfig};
pub use error::HarnessError;
pub use harness::Harness;
pub use report::HarnessReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
