//! Construction helpers for operator terms and rules.
//!
//! Every helper here is plain sugar over [`Term::new`] and [`Rule::new`]:
//! the operator symbol becomes the predicate of an ordinary compound
//! term, so renderers treat these terms like any other.
//!
//! ```rust
//! # use prolog_terms::{infix, term, Op, PrologRenderer, Renderer, Value};
//! let x = term!("x");
//! let t = infix::ge(x.clone() + 1, 0);
//! assert_eq!(t.predicate(), Op::Ge.symbol());
//! assert_eq!(PrologRenderer.render(&Value::from(!t)), "\\+(>=(+(x, 1), 0))");
//! ```

use crate::{Body, Rule, Term, Value, Var};
use std::fmt;
use std::ops;
use std::sync::Arc;

/// Predicate of arithmetic negation, `-(X)`.
pub const NEG: &str = "-";

/// Predicate of negation as failure, `\+(Goal)`.
pub const NOT: &str = "\\+";

/// Binary operators with a fixed output symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`
    Unify,
    /// `\=`
    NotUnify,
    Lt,
    Gt,
    Ge,
    Sub,
    Add,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub const ALL: [Op; 10] = [
        Op::Unify,
        Op::NotUnify,
        Op::Lt,
        Op::Gt,
        Op::Ge,
        Op::Sub,
        Op::Add,
        Op::Mul,
        Op::Div,
        Op::Pow,
    ];

    /// The predicate name this operator produces.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Unify => "=",
            Op::NotUnify => "\\=",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Sub => "-",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "**",
        }
    }

    /// Builds the 2-argument term `symbol(lhs, rhs)`.
    #[inline]
    pub fn apply(self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
        Term::new(self.symbol(), [lhs.into(), rhs.into()])
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `lhs = rhs`
pub fn unify(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Unify.apply(lhs, rhs)
}

/// `lhs \= rhs`
pub fn not_unify(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::NotUnify.apply(lhs, rhs)
}

pub fn lt(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Lt.apply(lhs, rhs)
}

pub fn gt(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Gt.apply(lhs, rhs)
}

pub fn ge(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Ge.apply(lhs, rhs)
}

pub fn sub(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Sub.apply(lhs, rhs)
}

pub fn add(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Add.apply(lhs, rhs)
}

pub fn mul(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Mul.apply(lhs, rhs)
}

pub fn div(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Div.apply(lhs, rhs)
}

pub fn pow(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Term {
    Op::Pow.apply(lhs, rhs)
}

/// `-(operand)`
pub fn neg(operand: impl Into<Value>) -> Term {
    Term::new(NEG, [operand.into()])
}

/// `\+(goal)`
pub fn not(goal: impl Into<Value>) -> Term {
    Term::new(NOT, [goal.into()])
}

/// `head :- body`.  Same as [`Rule::new`].
pub fn rule(head: impl Into<Arc<Term>>, body: impl Into<Body>) -> Rule {
    Rule::new(head, body)
}

impl Term {
    /// Makes this term the head of a rule: `self :- body`.
    pub fn implied_by(self, body: impl Into<Body>) -> Rule {
        Rule::new(self, body)
    }
}

// Arithmetic operators and `!` build terms from any left operand that
// can stand in a term position.
macro_rules! impl_ops {
    ($($t:ty),* $(,)?) => {$(
        impl<R: Into<Value>> ops::Add<R> for $t {
            type Output = Term;
            fn add(self, rhs: R) -> Term { Op::Add.apply(self, rhs) }
        }

        impl<R: Into<Value>> ops::Sub<R> for $t {
            type Output = Term;
            fn sub(self, rhs: R) -> Term { Op::Sub.apply(self, rhs) }
        }

        impl<R: Into<Value>> ops::Mul<R> for $t {
            type Output = Term;
            fn mul(self, rhs: R) -> Term { Op::Mul.apply(self, rhs) }
        }

        impl<R: Into<Value>> ops::Div<R> for $t {
            type Output = Term;
            fn div(self, rhs: R) -> Term { Op::Div.apply(self, rhs) }
        }

        impl ops::Neg for $t {
            type Output = Term;
            fn neg(self) -> Term { neg(self) }
        }

        impl ops::Not for $t {
            type Output = Term;
            fn not(self) -> Term { not(self) }
        }
    )*};
}
impl_ops!(Term, Var, Value);
