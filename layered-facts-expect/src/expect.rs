//! Leaf facts from runtime checks.

use layered_facts::{Arg, Fact, LeafBuilder};
use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use tracing::trace;

/// Expect `condition` to hold. `description` is inserted verbatim.
///
/// See also the [`expect!`](crate::expect!) macro, which describes the
/// condition by its source text.
pub fn expect(condition: bool, description: impl Into<String>) -> Fact {
    let description = Arg::Value(description.into());
    if condition {
        Fact::yes_with_args("{0} was true", "{0} was true", [description.clone()], [description])
    } else {
        Fact::no_with_args("{0} was false", "{0} was false", [description.clone()], [description])
    }
}

/// Expect `actual` to be `expected`, phrased as expected/actual.
pub fn expect_result<T>(expected: T, actual: T) -> Fact
where
    T: PartialEq + Debug,
{
    let args = [Arg::debug(&expected), Arg::debug(&actual)];
    let builder = if expected == actual {
        LeafBuilder::yes("Expected {0}, and got {1}", "{0} equaled {1}")
            .mid_sentence("expected {0}, and got {1}", "{0} equaled {1}")
    } else {
        LeafBuilder::no("Expected {0}, but got {1}", "{0} did not equal {1}")
            .mid_sentence("expected {0}, but got {1}", "{0} did not equal {1}")
    };
    builder.args(args.clone()).simplified_args(args).build()
}

/// Expect `left` to equal `right`.
pub fn expect_eq<T>(left: T, right: T) -> Fact
where
    T: PartialEq + Debug,
{
    let holds = left == right;
    relation(&left, &right, holds, "{0} equaled {1}", "{0} did not equal {1}")
}

pub fn expect_lt<T>(left: T, right: T) -> Fact
where
    T: PartialOrd + Debug,
{
    let holds = left < right;
    relation(&left, &right, holds, "{0} was less than {1}", "{0} was not less than {1}")
}

pub fn expect_le<T>(left: T, right: T) -> Fact
where
    T: PartialOrd + Debug,
{
    let holds = left <= right;
    relation(
        &left,
        &right,
        holds,
        "{0} was less than or equal to {1}",
        "{0} was not less than or equal to {1}",
    )
}

pub fn expect_gt<T>(left: T, right: T) -> Fact
where
    T: PartialOrd + Debug,
{
    let holds = left > right;
    relation(&left, &right, holds, "{0} was greater than {1}", "{0} was not greater than {1}")
}

pub fn expect_ge<T>(left: T, right: T) -> Fact
where
    T: PartialOrd + Debug,
{
    let holds = left >= right;
    relation(
        &left,
        &right,
        holds,
        "{0} was greater than or equal to {1}",
        "{0} was not greater than or equal to {1}",
    )
}

fn relation<T: Debug>(left: &T, right: &T, holds: bool, held: &str, failed: &str) -> Fact {
    let args = [Arg::debug(left), Arg::debug(right)];
    if holds {
        Fact::yes_with_args(held, held, args.clone(), args)
    } else {
        Fact::no_with_args(failed, failed, args.clone(), args)
    }
}

/// Expect `f` to panic. The panic is caught; its message ends up in the fact.
pub fn expect_panics<F, R>(f: F) -> Fact
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => LeafBuilder::no("Expected a panic, but none occurred", "no panic occurred")
            .mid_sentence("expected a panic, but none occurred", "no panic occurred")
            .build(),
        Err(payload) => {
            let message = panic_message(&*payload);
            trace!(%message, "caught expected panic");
            let args = [Arg::text(message)];
            LeafBuilder::yes(
                "Expected a panic, and one occurred: {0}",
                "a panic occurred: {0}",
            )
            .mid_sentence("expected a panic, and one occurred: {0}", "a panic occurred: {0}")
            .args(args.clone())
            .simplified_args(args)
            .build()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
