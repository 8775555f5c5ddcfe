#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Composable yes/no facts for soft assertions.
//!
//! A [`Fact`] is an immutable boolean outcome (`Yes` or `No`) that carries
//! the human-readable explanation of why it holds. Facts compose with the
//! usual logical operators while keeping track of *vacuous* truth, so that
//! `p.implies(|| q)` with a false `p` stays distinguishable from a fact that
//! was actually verified.
//!
//! ## Overview
//!
//! ```
//! use layered_facts::Fact;
//!
//! let equal = Fact::yes_with_args("Expected {0}, and got {1}", "{0} equaled {1}", [3, 3], [3, 3]);
//! let unequal = Fact::no_with_args("Expected {0}, but got {1}", "{0} did not equal {1}", [3, 4], [3, 4]);
//!
//! let both = equal.and(|| unequal);
//! assert!(both.is_no());
//! assert_eq!(both.fact_message(), "3 equaled 3, but 3 did not equal 4");
//! ```
//!
//! ## Modules
//!
//! - [`fact`] - The fact variants, queries, operators and diagram rendering
//! - [`assertion`] - Converts a fact into a success, cancellation or failure
//! - [`config`] - Argument prettifying configuration
//! - [`errors`] - Error types for configuration loading

pub mod assertion;
pub mod config;
pub mod errors;
pub mod fact;

pub use assertion::{AssertionError, SourcePosition, Succeeded};
pub use config::Prettifier;
pub use errors::{FactsError, FactsResult};
pub use fact::message::{Arg, MessageRef, MessageSlot};
pub use fact::{Binary, BinaryOp, Fact, FactKind, Leaf, LeafBuilder};

#[cfg(test)]
mod tests {
    mod deep_chains;
    mod diagram;
    mod messages;
    mod short_circuit;
    mod support;
    mod vacuity;
}
