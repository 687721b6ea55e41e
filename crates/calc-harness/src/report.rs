//! Harness run report

use crate::check::CheckOutcome;
use calc_strategy::StrategyKind;
use serde::Serialize;
use std::fmt::Write;

/// Report from one harness run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarnessReport {
    /// Strategy under test
    pub strategy: StrategyKind,
    /// Instances the sharing check was configured to create
    pub instance_count: usize,
    /// Add definitions made while building the maker
    pub definitions_at_build: u64,
    /// Instances the maker produced across all checks
    pub instances_created: u64,
    /// Per-check outcomes, in run order
    pub checks: Vec<CheckOutcome>,
}

impl HarnessReport {
    /// Check if every check passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }

    /// Number of passed checks
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    /// Number of failed checks
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count()
    }

    /// Outcomes of the failed checks
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed())
    }

    /// Generate text report
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = String::new();

        let _ = writeln!(report, "=== Calculator ({}) ===\n", self.strategy);
        let _ = writeln!(report, "Add Definitions At Build: {}", self.definitions_at_build);
        let _ = writeln!(report, "Sharing Check Instances: {}", self.instance_count);
        let _ = writeln!(report, "Instances Created: {}", self.instances_created);
        let _ = writeln!(report);

        for outcome in &self.checks {
            match &outcome.failure {
                None => {
                    let _ = writeln!(report, "  ok    {}", outcome.check);
                }
                Some(failure) => {
                    let _ = writeln!(report, "  FAIL  {}: {failure}", outcome.check);
                }
            }
        }

        let _ = writeln!(
            report,
            "\n=== Result: {} ({} passed, {} failed) ===",
            if self.passed() { "PASS" } else { "FAIL" },
            self.passed_count(),
            self.failed_count()
        );

        report
    }

    /// Serialize as pretty JSON
    ///
    /// # Errors
    /// Propagates serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckFailure, CheckKind};
    use pretty_assertions::assert_eq;

    fn report(failure: Option<CheckFailure>) -> HarnessReport {
        HarnessReport {
            strategy: StrategyKind::FreshLiteral,
            instance_count: 10,
            definitions_at_build: 1,
            instances_created: 14,
            checks: vec![
                CheckOutcome {
                    check: CheckKind::DefaultValue,
                    failure: None,
                },
                CheckOutcome {
                    check: CheckKind::Chaining,
                    failure,
                },
            ],
        }
    }

    #[test]
    fn counts() {
        let passing = report(None);
        assert!(passing.passed());
        assert_eq!(passing.passed_count(), 2);
        assert_eq!(passing.failed_count(), 0);

        let failing = report(Some(CheckFailure::Mismatch {
            expected: 20.0,
            actual: 60.0,
        }));
        assert!(!failing.passed());
        assert_eq!(failing.failed_count(), 1);
        assert_eq!(failing.failures().count(), 1);
    }

    #[test]
    fn text_report() {
        let text = report(Some(CheckFailure::Mismatch {
            expected: 20.0,
            actual: 60.0,
        }))
        .generate_text();

        assert_eq!(
            text,
            "=== Calculator (fresh_literal) ===\n\n\
             Add Definitions At Build: 1\n\
             Sharing Check Instances: 10\n\
             Instances Created: 14\n\
             \n  \
             ok    has a default result of 0\n  \
             FAIL  can chain commands: expected result 20, got 60\n\
             \n=== Result: FAIL (1 passed, 1 failed) ===\n"
        );
    }

    #[test]
    fn json_report() {
        let json: serde_json::Value =
            serde_json::from_str(&report(None).to_json().unwrap()).unwrap();
        assert_eq!(json["strategy"], "fresh_literal");
        assert_eq!(json["checks"][1]["failure"], serde_json::Value::Null);
    }
}
