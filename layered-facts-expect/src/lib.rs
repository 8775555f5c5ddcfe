#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Expectations built on [`layered_facts`].
//!
//! Each expectation runs a check and returns a leaf [`Fact`] explaining the
//! result instead of panicking, so several checks can be combined before
//! anything is reported.
//!
//! ```
//! use layered_facts_expect::{expect_eq, expect_result};
//!
//! let fact = expect_result(3, 1 + 2).and(|| expect_eq("a", "b"));
//! assert!(fact.is_no());
//! assert_eq!(fact.fact_message(), "3 equaled 3, but \"a\" did not equal \"b\"");
//! ```
//!
//! ## Modules
//!
//! - [`expect`](mod@expect) - Leaf facts from equality, ordering, boolean and panic checks
//! - [`report`] - Human-readable outcome reports
//! - [`tally`] - Counting outcomes over a run

pub mod expect;
pub mod report;
pub mod tally;

pub use expect::{
    expect, expect_eq, expect_ge, expect_gt, expect_le, expect_lt, expect_panics, expect_result,
};
pub use layered_facts::Fact;
pub use report::{format_outcome, format_summary, OutcomeReport};
pub use tally::Tally;

/// Expect a boolean expression to hold, describing it by its source text.
#[macro_export]
macro_rules! expect {
    ($condition:expr) => {
        $crate::expect($condition, stringify!($condition))
    };
}
