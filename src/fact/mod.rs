//! The fact variants and their queries.
//!
//! A [`Fact`] is a handle to an immutable node. Leaves store their message
//! templates and arguments; every other variant derives its messages from the
//! facts it wraps. Polarity, vacuity and shape flags are computed once when a
//! node is built, and rendered messages are memoised per node.

pub mod display;
pub mod message;
mod ops;

use self::message::{write_template, Arg, Connective, MessageSlot};
use crate::config::Prettifier;
use once_cell::unsync::OnceCell;
use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::rc::Rc;

/// An immutable yes/no outcome with its explanation.
///
/// Cloning is cheap and shares the underlying node; see [`Fact::ptr_eq`].
#[derive(Clone)]
pub struct Fact(Rc<Node>);

struct Node {
    kind: FactKind,
    is_yes: bool,
    is_vacuous_yes: bool,
    is_leaf: bool,
    is_composite: bool,
    rendered: [OnceCell<String>; 4],
}

impl Drop for Node {
    // Operands are released from a worklist so that dropping a long chain
    // does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_operands(&mut self.kind, &mut pending);
        while let Some(fact) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(fact.0) {
                take_operands(&mut node.kind, &mut pending);
            }
        }
    }
}

/// Move the facts held by `kind` into `pending`, leaving an empty leaf behind.
fn take_operands(kind: &mut FactKind, pending: &mut Vec<Fact>) {
    if let FactKind::Leaf(leaf) = kind {
        if !leaf.args.iter().flatten().any(|arg| matches!(arg, Arg::Message(_))) {
            return;
        }
    }

    match mem::replace(kind, FactKind::Leaf(Leaf::empty())) {
        FactKind::Leaf(leaf) => {
            for args in leaf.args {
                pending.extend(args.into_iter().filter_map(|arg| match arg {
                    Arg::Message(reference) => Some(reference.fact),
                    _ => None,
                }));
            }
        }
        FactKind::Not(underlying) | FactKind::VacuousYes(underlying) => pending.push(underlying),
        FactKind::Binary(binary) => {
            pending.push(binary.left);
            pending.push(binary.right);
        }
    }
}

/// The shape of a fact.
#[derive(Debug, Clone, PartialEq)]
pub enum FactKind {
    /// A primitive outcome.
    Leaf(Leaf),
    /// Logical negation of the wrapped fact.
    Not(Fact),
    /// Two facts joined by an operator.
    Binary(Binary),
    /// An implication whose antecedent (the wrapped fact) was false.
    VacuousYes(Fact),
}

/// A primitive fact: polarity plus its four templates and argument lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    is_yes: bool,
    raw: [String; 4],
    args: [Vec<Arg>; 4],
    composite: bool,
    prettifier: Prettifier,
}

impl Leaf {
    fn empty() -> Self {
        Leaf {
            is_yes: false,
            raw: Default::default(),
            args: Default::default(),
            composite: false,
            prettifier: Prettifier::default(),
        }
    }

    pub fn is_yes(&self) -> bool {
        self.is_yes
    }

    pub fn raw(&self, slot: MessageSlot) -> &str {
        &self.raw[slot.index()]
    }

    pub fn args(&self, slot: MessageSlot) -> &[Arg] {
        &self.args[slot.index()]
    }

    pub fn is_composite(&self) -> bool {
        self.composite
    }

    pub fn prettifier(&self) -> &Prettifier {
        &self.prettifier
    }
}

/// Two operand facts and the operator that joined them.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub op: BinaryOp,
    pub left: Fact,
    pub right: Fact,
}

/// Binary operators. The short-circuiting ones only appear in a [`Binary`]
/// when their right operand was actually evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `&&`
    ShortCircuitAnd,
    /// `&`
    And,
    /// `||`
    ShortCircuitOr,
    /// `|`
    Or,
    Implies,
    IsEqvTo,
}

impl BinaryOp {
    /// The operator as written in fact diagrams.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::ShortCircuitAnd => "&&",
            BinaryOp::And => "&",
            BinaryOp::ShortCircuitOr => "||",
            BinaryOp::Or => "|",
            BinaryOp::Implies => "implies",
            BinaryOp::IsEqvTo => "isEqvTo",
        }
    }

    pub fn evaluate(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::ShortCircuitAnd | BinaryOp::And => left && right,
            BinaryOp::ShortCircuitOr | BinaryOp::Or => left || right,
            BinaryOp::Implies => !left || right,
            BinaryOp::IsEqvTo => left == right,
        }
    }

    /// Conjunctive operators stay vacuous if either operand was; disjunctive
    /// ones only while no operand is a substantive yes.
    fn is_vacuous(self, left: &Fact, right: &Fact) -> bool {
        match self {
            BinaryOp::ShortCircuitAnd | BinaryOp::And | BinaryOp::Implies | BinaryOp::IsEqvTo => {
                left.is_vacuous_yes() || right.is_vacuous_yes()
            }
            BinaryOp::ShortCircuitOr | BinaryOp::Or => {
                (left.is_vacuous_yes() || left.is_no()) && (right.is_vacuous_yes() || right.is_no())
            }
        }
    }
}

impl Fact {
    fn from_kind(kind: FactKind) -> Self {
        let (is_yes, is_vacuous_yes, is_leaf, is_composite) = match &kind {
            FactKind::Leaf(leaf) => (leaf.is_yes, false, true, leaf.composite),
            FactKind::Not(underlying) => (
                !underlying.is_yes(),
                false,
                underlying.is_leaf(),
                underlying.is_composite(),
            ),
            FactKind::VacuousYes(underlying) => {
                (true, true, underlying.is_leaf(), underlying.is_composite())
            }
            FactKind::Binary(binary) => {
                let is_yes = binary
                    .op
                    .evaluate(binary.left.is_yes(), binary.right.is_yes());
                let is_vacuous_yes = is_yes && binary.op.is_vacuous(&binary.left, &binary.right);
                (is_yes, is_vacuous_yes, false, true)
            }
        };

        Fact(Rc::new(Node {
            kind,
            is_yes,
            is_vacuous_yes,
            is_leaf,
            is_composite,
            rendered: Default::default(),
        }))
    }

    pub(crate) fn binary(op: BinaryOp, left: Fact, right: Fact) -> Self {
        Fact::from_kind(FactKind::Binary(Binary { op, left, right }))
    }

    pub(crate) fn vacuous_yes(underlying: Fact) -> Self {
        debug_assert!(underlying.is_no(), "only a false antecedent is vacuous");
        Fact::from_kind(FactKind::VacuousYes(underlying))
    }

    /// A yes leaf whose messages take no arguments.
    pub fn yes(raw: impl Into<String>, raw_simplified: impl Into<String>) -> Self {
        LeafBuilder::yes(raw, raw_simplified).build()
    }

    /// A no leaf whose messages take no arguments.
    pub fn no(raw: impl Into<String>, raw_simplified: impl Into<String>) -> Self {
        LeafBuilder::no(raw, raw_simplified).build()
    }

    /// A yes leaf; the mid-sentence forms reuse the standalone templates and arguments.
    pub fn yes_with_args<A, S>(
        raw: impl Into<String>,
        raw_simplified: impl Into<String>,
        args: A,
        simplified_args: S,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Arg>,
        S: IntoIterator,
        S::Item: Into<Arg>,
    {
        LeafBuilder::yes(raw, raw_simplified)
            .args(args)
            .simplified_args(simplified_args)
            .build()
    }

    /// A no leaf; the mid-sentence forms reuse the standalone templates and arguments.
    pub fn no_with_args<A, S>(
        raw: impl Into<String>,
        raw_simplified: impl Into<String>,
        args: A,
        simplified_args: S,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Arg>,
        S: IntoIterator,
        S::Item: Into<Arg>,
    {
        LeafBuilder::no(raw, raw_simplified)
            .args(args)
            .simplified_args(simplified_args)
            .build()
    }

    pub fn kind(&self) -> &FactKind {
        &self.0.kind
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(a: &Fact, b: &Fact) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    pub fn is_yes(&self) -> bool {
        self.0.is_yes
    }

    pub fn is_no(&self) -> bool {
        !self.0.is_yes
    }

    /// True only for implication-derived truth; always paired with `is_yes`.
    pub fn is_vacuous_yes(&self) -> bool {
        self.0.is_vacuous_yes
    }

    /// Leaves, and negations or vacuous wrappers of leaves.
    pub fn is_leaf(&self) -> bool {
        self.0.is_leaf
    }

    /// Whether this fact's message is a compound sentence. Composite operands
    /// are parenthesized inside a larger message.
    pub fn is_composite(&self) -> bool {
        self.0.is_composite
    }

    pub fn to_boolean(&self) -> bool {
        self.is_yes()
    }

    /// The prettifier used for this fact's own arguments.
    pub fn prettifier(&self) -> Prettifier {
        match self.kind() {
            FactKind::Leaf(leaf) => leaf.prettifier,
            FactKind::Not(underlying) | FactKind::VacuousYes(underlying) => underlying.prettifier(),
            FactKind::Binary(_) => Prettifier::default(),
        }
    }

    /// The unsubstituted template for `slot`.
    pub fn raw_message(&self, slot: MessageSlot) -> Cow<'_, str> {
        match self.kind() {
            FactKind::Leaf(leaf) => Cow::Borrowed(leaf.raw(slot)),
            FactKind::Not(underlying) => underlying.raw_message(slot.negated()),
            FactKind::VacuousYes(underlying) => underlying.raw_message(slot),
            FactKind::Binary(binary) => Cow::Owned(
                Connective::between(&binary.left, &binary.right)
                    .template(binary.left.is_composite(), binary.right.is_composite()),
            ),
        }
    }

    /// The arguments substituted into `slot`'s template.
    pub fn message_args(&self, slot: MessageSlot) -> Cow<'_, [Arg]> {
        match self.kind() {
            FactKind::Leaf(leaf) => Cow::Borrowed(leaf.args(slot)),
            FactKind::Not(underlying) => underlying.message_args(slot.negated()),
            FactKind::VacuousYes(underlying) => underlying.message_args(slot),
            FactKind::Binary(binary) => {
                let left_slot = if slot.is_mid_sentence() {
                    MessageSlot::MidSentenceSimplified
                } else {
                    MessageSlot::Simplified
                };
                Cow::Owned(vec![
                    Arg::message(&binary.left, left_slot),
                    Arg::message(&binary.right, MessageSlot::MidSentenceSimplified),
                ])
            }
        }
    }

    /// The rendered message for `slot`, computed on first use.
    ///
    /// Only the requested slot is memoised. Operand messages are rendered
    /// straight into it and are not kept.
    pub fn message(&self, slot: MessageSlot) -> &str {
        match self.kind() {
            FactKind::Not(underlying) => underlying.message(slot.negated()),
            FactKind::VacuousYes(underlying) => underlying.message(slot),
            FactKind::Leaf(_) | FactKind::Binary(_) => self.0.rendered[slot.index()]
                .get_or_init(|| {
                    let mut output = String::new();
                    self.render_into(slot, &mut output);
                    output
                })
                .as_str(),
        }
    }

    /// Append the message for `slot` to `output`. Uses a memoised copy if one
    /// exists but never fills one.
    pub(crate) fn write_message(&self, slot: MessageSlot, output: &mut String) {
        match self.kind() {
            FactKind::Not(underlying) => underlying.write_message(slot.negated(), output),
            FactKind::VacuousYes(underlying) => underlying.write_message(slot, output),
            FactKind::Leaf(_) | FactKind::Binary(_) => match self.0.rendered[slot.index()].get() {
                Some(rendered) => output.push_str(rendered),
                None => self.render_into(slot, output),
            },
        }
    }

    fn render_into(&self, slot: MessageSlot, output: &mut String) {
        write_template(
            output,
            &self.raw_message(slot),
            &self.message_args(slot),
            &self.prettifier(),
        );
    }

    pub fn fact_message(&self) -> &str {
        self.message(MessageSlot::Fact)
    }

    pub fn simplified_fact_message(&self) -> &str {
        self.message(MessageSlot::Simplified)
    }

    pub fn mid_sentence_fact_message(&self) -> &str {
        self.message(MessageSlot::MidSentence)
    }

    pub fn mid_sentence_simplified_fact_message(&self) -> &str {
        self.message(MessageSlot::MidSentenceSimplified)
    }

    pub fn raw_fact_message(&self) -> Cow<'_, str> {
        self.raw_message(MessageSlot::Fact)
    }

    pub fn raw_simplified_fact_message(&self) -> Cow<'_, str> {
        self.raw_message(MessageSlot::Simplified)
    }

    pub fn raw_mid_sentence_fact_message(&self) -> Cow<'_, str> {
        self.raw_message(MessageSlot::MidSentence)
    }

    pub fn raw_mid_sentence_simplified_fact_message(&self) -> Cow<'_, str> {
        self.raw_message(MessageSlot::MidSentenceSimplified)
    }

    pub fn fact_message_args(&self) -> Cow<'_, [Arg]> {
        self.message_args(MessageSlot::Fact)
    }

    pub fn simplified_fact_message_args(&self) -> Cow<'_, [Arg]> {
        self.message_args(MessageSlot::Simplified)
    }

    pub fn mid_sentence_fact_message_args(&self) -> Cow<'_, [Arg]> {
        self.message_args(MessageSlot::MidSentence)
    }

    pub fn mid_sentence_simplified_fact_message_args(&self) -> Cow<'_, [Arg]> {
        self.message_args(MessageSlot::MidSentenceSimplified)
    }
}

impl PartialEq for Fact {
    fn eq(&self, other: &Self) -> bool {
        Fact::ptr_eq(self, other) || self.kind() == other.kind()
    }
}

impl fmt::Debug for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fact").field(self.kind()).finish()
    }
}

/// Builds a leaf with all four templates and argument lists.
///
/// Starts with the mid-sentence templates equal to the standalone ones and
/// every argument list empty.
#[derive(Debug, Clone)]
pub struct LeafBuilder {
    leaf: Leaf,
}

impl LeafBuilder {
    fn new(is_yes: bool, raw: String, raw_simplified: String) -> Self {
        Self {
            leaf: Leaf {
                is_yes,
                raw: [raw.clone(), raw_simplified.clone(), raw, raw_simplified],
                args: Default::default(),
                composite: false,
                prettifier: Prettifier::default(),
            },
        }
    }

    pub fn yes(raw: impl Into<String>, raw_simplified: impl Into<String>) -> Self {
        Self::new(true, raw.into(), raw_simplified.into())
    }

    pub fn no(raw: impl Into<String>, raw_simplified: impl Into<String>) -> Self {
        Self::new(false, raw.into(), raw_simplified.into())
    }

    pub fn mid_sentence(
        mut self,
        raw_mid_sentence: impl Into<String>,
        raw_mid_sentence_simplified: impl Into<String>,
    ) -> Self {
        self.leaf.raw[MessageSlot::MidSentence.index()] = raw_mid_sentence.into();
        self.leaf.raw[MessageSlot::MidSentenceSimplified.index()] =
            raw_mid_sentence_simplified.into();
        self
    }

    /// Arguments for the fact message and its mid-sentence form.
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let args = collect_args(args);
        self.leaf.args[MessageSlot::MidSentence.index()] = args.clone();
        self.leaf.args[MessageSlot::Fact.index()] = args;
        self
    }

    /// Arguments for the simplified message and its mid-sentence form.
    pub fn simplified_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let args = collect_args(args);
        self.leaf.args[MessageSlot::MidSentenceSimplified.index()] = args.clone();
        self.leaf.args[MessageSlot::Simplified.index()] = args;
        self
    }

    /// Override only the mid-sentence argument lists.
    pub fn mid_sentence_args<M, N>(mut self, mid_sentence: M, mid_sentence_simplified: N) -> Self
    where
        M: IntoIterator,
        M::Item: Into<Arg>,
        N: IntoIterator,
        N::Item: Into<Arg>,
    {
        self.leaf.args[MessageSlot::MidSentence.index()] = collect_args(mid_sentence);
        self.leaf.args[MessageSlot::MidSentenceSimplified.index()] =
            collect_args(mid_sentence_simplified);
        self
    }

    pub fn composite(mut self, composite: bool) -> Self {
        self.leaf.composite = composite;
        self
    }

    pub fn prettifier(mut self, prettifier: Prettifier) -> Self {
        self.leaf.prettifier = prettifier;
        self
    }

    pub fn build(self) -> Fact {
        Fact::from_kind(FactKind::Leaf(self.leaf))
    }
}

impl From<LeafBuilder> for Fact {
    fn from(builder: LeafBuilder) -> Self {
        builder.build()
    }
}

fn collect_args<I>(args: I) -> Vec<Arg>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    args.into_iter().map(Into::into).collect()
}
