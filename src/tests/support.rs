use crate::{Fact, LeafBuilder};

/// "Expected a, and got b" / "a equaled b".
pub fn equaled(a: i32, b: i32) -> Fact {
    LeafBuilder::yes("Expected {0}, and got {1}", "{0} equaled {1}")
        .mid_sentence("expected {0}, and got {1}", "{0} equaled {1}")
        .args([a, b])
        .simplified_args([a, b])
        .build()
}

/// "Expected a, but got b" / "a did not equal b".
pub fn did_not_equal(a: i32, b: i32) -> Fact {
    LeafBuilder::no("Expected {0}, but got {1}", "{0} did not equal {1}")
        .mid_sentence("expected {0}, but got {1}", "{0} did not equal {1}")
        .args([a, b])
        .simplified_args([a, b])
        .build()
}

pub fn yes(message: &str) -> Fact {
    Fact::yes(message, message)
}

pub fn no(message: &str) -> Fact {
    Fact::no(message, message)
}

/// A false antecedent implying a true consequent.
pub fn vacuous() -> Fact {
    no("false was true").implies(|| yes("true was true"))
}
