//! Logical operators over facts.
//!
//! `and`, `or` and `implies` take their right operand as a thunk and only
//! call it when the left operand does not decide the result. `&`, `|` and
//! `is_eqv_to` always take both operands.

use super::{BinaryOp, Fact, FactKind};
use std::ops::{BitAnd, BitOr, Not};
use tracing::trace;

impl Fact {
    /// Short-circuiting conjunction (`&&`).
    ///
    /// A no on the left is returned as is, without calling `rhs`.
    pub fn and<F>(self, rhs: F) -> Fact
    where
        F: FnOnce() -> Fact,
    {
        if self.is_no() {
            trace!(op = "&&", "left operand is no, right operand skipped");
            return self;
        }
        Fact::binary(BinaryOp::ShortCircuitAnd, self, rhs())
    }

    /// Short-circuiting disjunction (`||`).
    ///
    /// A yes on the left (vacuous or not) is returned as is, without calling `rhs`.
    pub fn or<F>(self, rhs: F) -> Fact
    where
        F: FnOnce() -> Fact,
    {
        if self.is_yes() {
            trace!(op = "||", "left operand is yes, right operand skipped");
            return self;
        }
        Fact::binary(BinaryOp::ShortCircuitOr, self, rhs())
    }

    /// Material implication.
    ///
    /// A no antecedent yields a vacuous yes wrapping it, without calling `rhs`.
    pub fn implies<F>(self, rhs: F) -> Fact
    where
        F: FnOnce() -> Fact,
    {
        if self.is_no() {
            trace!(op = "implies", "antecedent is no, result is vacuous");
            return Fact::vacuous_yes(self);
        }
        Fact::binary(BinaryOp::Implies, self, rhs())
    }

    /// Biconditional: yes when both operands have the same polarity.
    pub fn is_eqv_to(self, rhs: Fact) -> Fact {
        Fact::binary(BinaryOp::IsEqvTo, self, rhs)
    }

    /// Negation. Negating a negation hands back the wrapped fact itself.
    fn negate(&self) -> Fact {
        match self.kind() {
            FactKind::Not(underlying) => underlying.clone(),
            _ => Fact::from_kind(FactKind::Not(self.clone())),
        }
    }
}

impl BitAnd for Fact {
    type Output = Fact;

    /// Non-short-circuiting conjunction (`&`).
    fn bitand(self, rhs: Fact) -> Fact {
        Fact::binary(BinaryOp::And, self, rhs)
    }
}

impl BitAnd<&Fact> for &Fact {
    type Output = Fact;

    fn bitand(self, rhs: &Fact) -> Fact {
        Fact::binary(BinaryOp::And, self.clone(), rhs.clone())
    }
}

impl BitOr for Fact {
    type Output = Fact;

    /// Non-short-circuiting disjunction (`|`).
    fn bitor(self, rhs: Fact) -> Fact {
        Fact::binary(BinaryOp::Or, self, rhs)
    }
}

impl BitOr<&Fact> for &Fact {
    type Output = Fact;

    fn bitor(self, rhs: &Fact) -> Fact {
        Fact::binary(BinaryOp::Or, self.clone(), rhs.clone())
    }
}

impl Not for Fact {
    type Output = Fact;

    fn not(self) -> Fact {
        self.negate()
    }
}

impl Not for &Fact {
    type Output = Fact;

    fn not(self) -> Fact {
        self.negate()
    }
}
