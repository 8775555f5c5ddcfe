//! Human-readable reports for asserted facts.

use crate::tally::Tally;
use layered_facts::{AssertionError, Fact, Succeeded};
use std::fmt;

/// One asserted fact together with its outcome, for formatting purposes.
pub struct OutcomeReport<'a> {
    pub name: &'a str,
    pub fact: &'a Fact,
    pub outcome: &'a Result<Succeeded, AssertionError>,
}

impl fmt::Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let err = match self.outcome {
            Ok(Succeeded) => return writeln!(f, "PASS: {}", self.name),
            Err(err) => err,
        };

        let status = if err.is_canceled() { "CANCELED" } else { "FAIL" };
        writeln!(f, "\n{}: {} ({})", status, self.name, err.position())?;
        writeln!(f)?;
        writeln!(f, "  {}", err.message())?;
        writeln!(f)?;

        // Diagram, indented under the header
        for line in self.fact.fact_diagram(0).lines() {
            writeln!(f, "    {}", line)?;
        }

        if err.is_canceled() {
            writeln!(f)?;
            writeln!(
                f,
                "  hint: the fact only held vacuously - an antecedent was false, so nothing was checked"
            )?;
        }

        Ok(())
    }
}

/// Format an asserted fact with its diagram when it did not succeed.
pub fn format_outcome(
    name: &str,
    fact: &Fact,
    outcome: &Result<Succeeded, AssertionError>,
) -> String {
    OutcomeReport {
        name,
        fact,
        outcome,
    }
    .to_string()
}

/// Format a summary of a whole run.
pub fn format_summary(name: &str, tally: &Tally) -> String {
    let status = if tally.success() { "PASS" } else { "FAIL" };
    format!(
        "\n{}: {}\n  {} succeeded, {} canceled, {} failed ({} total)\n",
        status, name, tally.succeeded, tally.canceled, tally.failed, tally.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_facts::SourcePosition;

    fn position() -> SourcePosition {
        SourcePosition::new("lease.rs", 40, 9)
    }

    #[test]
    fn test_format_pass() {
        let fact = Fact::yes("It held", "it held");
        let outcome = fact.to_assertion_at(position());
        assert_eq!(format_outcome("lease term", &fact, &outcome), "PASS: lease term\n");
    }

    #[test]
    fn test_format_failure_includes_diagram() {
        let fact = Fact::yes("Expected 1, and got 1", "expected 1, and got 1")
            .and(|| Fact::no("Expected 2, but got 3", "expected 2, but got 3"));
        let outcome = fact.to_assertion_at(position());
        let output = format_outcome("rent", &fact, &outcome);

        assert!(output.contains("FAIL: rent (lease.rs:40:9)"));
        assert!(output.contains("    No(\n"));
        assert!(output.contains("      Yes(Expected 1, and got 1) &&\n"));
        assert!(output.contains("      No(Expected 2, but got 3)\n"));
        assert!(!output.contains("hint:"));
    }

    #[test]
    fn test_format_canceled_has_hint() {
        let fact = Fact::no("The tenant left", "the tenant left")
            .implies(|| Fact::yes("The deposit was returned", "the deposit was returned"));
        let outcome = fact.to_assertion_at(position());
        let output = format_outcome("deposit", &fact, &outcome);

        assert!(output.contains("CANCELED: deposit (lease.rs:40:9)"));
        assert!(output.contains("  The tenant left\n"));
        assert!(output.contains("    VacuousYes(The tenant left)"));
        assert!(output.contains("hint:"));
    }

    #[test]
    fn test_format_summary() {
        let tally = Tally {
            total: 4,
            succeeded: 2,
            canceled: 1,
            failed: 1,
        };
        let output = format_summary("lease.rs", &tally);
        assert!(output.contains("FAIL: lease.rs"));
        assert!(output.contains("2 succeeded, 1 canceled, 1 failed (4 total)"));

        let clean = Tally {
            total: 1,
            succeeded: 0,
            canceled: 1,
            failed: 0,
        };
        assert!(format_summary("lease.rs", &clean).contains("PASS: lease.rs"));
    }
}
