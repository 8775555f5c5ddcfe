//! Message slots, positional arguments and template substitution.
//!
//! Every fact exposes four message slots. A slot renders by substituting its
//! argument list into its raw template at `{0}`, `{1}`, ... placeholders.
//! Composite facts never store strings: their arguments are [`MessageRef`]s
//! pointing at the operands, resolved only when the message is rendered.

use super::Fact;
use crate::config::Prettifier;
use std::fmt;

/// One of the four message forms carried by every fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSlot {
    /// Standalone sentence form, e.g. `Expected 3, but got 2`.
    Fact,
    /// The form a negation of this fact uses, e.g. `3 did not equal 2`.
    Simplified,
    /// Clause-embeddable form of [`MessageSlot::Fact`].
    MidSentence,
    /// Clause-embeddable form of [`MessageSlot::Simplified`].
    MidSentenceSimplified,
}

impl MessageSlot {
    pub const ALL: [MessageSlot; 4] = [
        MessageSlot::Fact,
        MessageSlot::Simplified,
        MessageSlot::MidSentence,
        MessageSlot::MidSentenceSimplified,
    ];

    /// The slot a negation reads from the fact it wraps.
    pub fn negated(self) -> Self {
        match self {
            MessageSlot::Fact => MessageSlot::Simplified,
            MessageSlot::Simplified => MessageSlot::Fact,
            MessageSlot::MidSentence => MessageSlot::MidSentenceSimplified,
            MessageSlot::MidSentenceSimplified => MessageSlot::MidSentence,
        }
    }

    pub fn is_mid_sentence(self) -> bool {
        matches!(
            self,
            MessageSlot::MidSentence | MessageSlot::MidSentenceSimplified
        )
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MessageSlot::Fact => 0,
            MessageSlot::Simplified => 1,
            MessageSlot::MidSentence => 2,
            MessageSlot::MidSentenceSimplified => 3,
        }
    }
}

/// A positional argument substituted into a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Inserted verbatim (numbers, booleans, pre-formatted values).
    Value(String),
    /// Inserted double-quoted under the default prettifier.
    Text(String),
    /// Inserted single-quoted under the default prettifier.
    Char(char),
    /// Another fact's message, rendered lazily.
    Message(MessageRef),
}

/// Lazy reference to one message slot of another fact.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRef {
    pub fact: Fact,
    pub slot: MessageSlot,
}

impl Arg {
    /// An argument rendered with the value's `Display` output.
    pub fn display(value: impl fmt::Display) -> Self {
        Arg::Value(value.to_string())
    }

    /// An argument rendered with the value's `Debug` output.
    pub fn debug(value: impl fmt::Debug) -> Self {
        Arg::Value(format!("{:?}", value))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Arg::Text(text.into())
    }

    pub fn message(fact: &Fact, slot: MessageSlot) -> Self {
        Arg::Message(MessageRef {
            fact: fact.clone(),
            slot,
        })
    }

    /// Render this argument. Nested messages are not prettified or truncated.
    pub fn render(&self, prettifier: &Prettifier) -> String {
        let mut output = String::new();
        self.write_to(&mut output, prettifier);
        output
    }

    /// Append this argument to `output`. A nested message is rendered in
    /// place and not memoised on the fact it refers to.
    pub(crate) fn write_to(&self, output: &mut String, prettifier: &Prettifier) {
        match self {
            Arg::Value(value) => output.push_str(&prettifier.value(value)),
            Arg::Text(text) => output.push_str(&prettifier.text(text)),
            Arg::Char(c) => output.push_str(&prettifier.char(*c)),
            Arg::Message(reference) => reference.fact.write_message(reference.slot, output),
        }
    }
}

macro_rules! value_args {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(value.to_string())
                }
            }
        )*
    };
}

value_args!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl From<MessageRef> for Arg {
    fn from(reference: MessageRef) -> Self {
        Arg::Message(reference)
    }
}

/// Substitute `args` into `raw` at `{i}` placeholders.
///
/// An empty argument list returns the template verbatim. Placeholders with no
/// matching argument are left as written.
pub fn format_template(raw: &str, args: &[Arg], prettifier: &Prettifier) -> String {
    let mut output = String::with_capacity(raw.len());
    write_template(&mut output, raw, args, prettifier);
    output
}

/// [`format_template`], appending to `output`.
pub(crate) fn write_template(
    output: &mut String,
    raw: &str,
    args: &[Arg],
    prettifier: &Prettifier,
) {
    if args.is_empty() {
        output.push_str(raw);
        return;
    }

    let mut rest = raw;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index = &after[..close];
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            index
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|arg| (arg, close))
        });

        match arg {
            Some((arg, close)) => {
                arg.write_to(output, prettifier);
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);
}

/// The word joining the two operand messages of a binary fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    /// Operands agree in polarity.
    And,
    /// Operands contrast in polarity.
    But,
}

impl Connective {
    pub fn between(left: &Fact, right: &Fact) -> Self {
        if left.is_yes() == right.is_yes() {
            Connective::And
        } else {
            Connective::But
        }
    }

    /// Template joining `{0}` and `{1}`; composite operands are parenthesized.
    pub fn template(self, left_composite: bool, right_composite: bool) -> String {
        let word = match self {
            Connective::And => "and",
            Connective::But => "but",
        };
        let left = if left_composite { "({0})" } else { "{0}" };
        let right = if right_composite { "({1})" } else { "{1}" };
        format!("{}, {} {}", left, word, right)
    }
}
