//! Defines the core term model and its constructors.
//!
//! A [`Value`] is anything the renderers know how to print: atoms,
//! numbers, variables, compound [`Term`]s, [`Rule`]s, whole
//! [`Program`]s, and lists or tuples of those.  Compound values are
//! held behind [`Arc`] so a subterm can be shared by any number of
//! parents without copying.

use crate::TermError;
use core::fmt;
use smartstring::alias::String;
use std::borrow::Cow;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A logic variable, identified only by its name.
///
/// By convention names start with an uppercase letter or `_`, but
/// this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Var {
    name: String,
}

impl Var {
    #[inline]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: String::from(name.as_ref()),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A compound term: a predicate name applied to zero or more arguments.
///
/// The predicate and arguments are fixed once the term is built.  The
/// comment list may be changed while the term is still owned, using
/// [`Term::add_comment`], [`Term::commented`] or [`Term::with_comment`].
/// Once a term is wrapped in a [`Value`] it is shared and immutable;
/// use [`Value::with_comment`] to get an annotated copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    predicate: String,
    #[cfg_attr(feature = "serde", serde(default))]
    args: Vec<Value>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    comments: Vec<String>,
}

impl Term {
    /// Construct a new compound term named `predicate` with the given
    /// arguments.  Arguments are not validated; any [`Value`] is
    /// accepted.  An empty argument list yields a term of arity zero.
    #[inline]
    pub fn new(
        predicate: impl AsRef<str>,
        args: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self {
            predicate: String::from(predicate.as_ref()),
            args: args.into_iter().map(Into::into).collect(),
            comments: Vec::new(),
        }
    }

    #[inline]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    #[inline]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Appends a comment.  Comments are rendered in the order they were added.
    pub fn add_comment(&mut self, comment: impl AsRef<str>) {
        self.comments.push(String::from(comment.as_ref()));
    }

    /// Builder-style [`Term::add_comment`].
    pub fn commented(mut self, comment: impl AsRef<str>) -> Self {
        self.add_comment(comment);
        self
    }

    /// Replaces all comments with the single `comment`.
    pub fn with_comment(mut self, comment: impl AsRef<str>) -> Self {
        self.comments = vec![String::from(comment.as_ref())];
        self
    }

    /// Returns the arguments as a fixed-size array if the term has
    /// arity `ARITY`, otherwise an error.
    ///
    /// ```rust
    /// # use prolog_terms::{term, Value};
    /// let t = term!("pair"; 1, 2);
    /// let [a, b] = t.unpack::<2>().unwrap();
    /// assert_eq!(a, &Value::Int(1));
    /// assert_eq!(b, &Value::Int(2));
    /// assert!(t.unpack::<3>().is_err());
    /// ```
    pub fn unpack<const ARITY: usize>(&self) -> Result<&[Value; ARITY], TermError> {
        self.args
            .as_slice()
            .try_into()
            .map_err(|_| TermError::UnexpectedArity {
                expected: ARITY,
                found: self.args.len(),
            })
    }
}

/// Construct a compound term by name.  Equivalent to [`Term::new`].
#[inline]
pub fn term(
    predicate: impl AsRef<str>,
    args: impl IntoIterator<Item = impl Into<Value>>,
) -> Term {
    Term::new(predicate, args)
}

/// The condition part of a [`Rule`].
///
/// A single goal renders on its own; a conjunction renders its goals
/// joined by the syntax's conjunction separator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Body {
    Goal(Value),
    Conjunction(Vec<Value>),
}

impl Body {
    /// Builds a conjunction from any sequence of goals.
    pub fn conjunction(goals: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Body::Conjunction(goals.into_iter().map(Into::into).collect())
    }

    /// The body as a single value: the goal itself, or a tuple holding
    /// the conjuncts.
    pub fn to_value(&self) -> Value {
        match self {
            Body::Goal(goal) => goal.clone(),
            Body::Conjunction(goals) => Value::Tuple(goals.clone()),
        }
    }
}

/// A tuple becomes a conjunction; anything else is a single goal.
impl From<Value> for Body {
    fn from(value: Value) -> Self {
        match value {
            Value::Tuple(goals) => Body::Conjunction(goals),
            goal => Body::Goal(goal),
        }
    }
}

macro_rules! impl_from_for_body {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Body {
            #[inline]
            fn from(goal: $t) -> Self { Body::Goal(goal.into()) }
        }
    )*};
}
impl_from_for_body!(Term, Arc<Term>, Var, Rule);

impl From<Vec<Term>> for Body {
    fn from(goals: Vec<Term>) -> Self {
        Body::conjunction(goals)
    }
}

impl<const N: usize> From<[Term; N]> for Body {
    fn from(goals: [Term; N]) -> Self {
        Body::conjunction(goals)
    }
}

/// A clause `head :- body`.
///
/// A rule is a compound term whose predicate is always [`Rule::PREDICATE`]
/// and whose two arguments are the head, which is always a [`Term`],
/// and the [`Body`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    head: Arc<Term>,
    body: Body,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    comments: Vec<String>,
}

impl Rule {
    /// The rule connective.
    pub const PREDICATE: &'static str = ":-";

    #[inline]
    pub fn new(head: impl Into<Arc<Term>>, body: impl Into<Body>) -> Self {
        Self {
            head: head.into(),
            body: body.into(),
            comments: Vec::new(),
        }
    }

    /// Like [`Rule::new`] but accepts any value as head, failing unless
    /// it is a compound term.
    pub fn try_new(head: Value, body: impl Into<Body>) -> Result<Self, TermError> {
        match head {
            Value::Term(head) => Ok(Self::new(head, body)),
            other => Err(TermError::UnexpectedKind {
                expected: "term",
                found: other.kind_name(),
            }),
        }
    }

    #[inline]
    pub fn head(&self) -> &Term {
        &self.head
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn predicate(&self) -> &'static str {
        Self::PREDICATE
    }

    #[inline]
    pub fn arity(&self) -> usize {
        2
    }

    #[inline]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn add_comment(&mut self, comment: impl AsRef<str>) {
        self.comments.push(String::from(comment.as_ref()));
    }

    pub fn commented(mut self, comment: impl AsRef<str>) -> Self {
        self.add_comment(comment);
        self
    }

    pub fn with_comment(mut self, comment: impl AsRef<str>) -> Self {
        self.comments = vec![String::from(comment.as_ref())];
        self
    }

    /// The equivalent generic term `':-'(Head, Body)`, with the
    /// conjunction, if any, as a tuple.  Comments are carried over.
    pub fn to_term(&self) -> Term {
        let mut t = Term::new(
            Self::PREDICATE,
            [Value::Term(Arc::clone(&self.head)), self.body.to_value()],
        );
        t.comments = self.comments.clone();
        t
    }
}

/// An ordered collection of clauses.  Each entry is rendered as one
/// successive clause; order is kept and duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Program {
    #[cfg_attr(feature = "serde", serde(default))]
    entries: Vec<Value>,
}

impl Program {
    pub fn new(entries: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, entry: impl Into<Value>) {
        self.entries.push(entry.into());
    }

    #[inline]
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.entries.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for Program {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<V: Into<Value>> Extend<V> for Program {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Every shape a renderer accepts.
///
/// The variants are disjoint, so a renderer dispatches with a single
/// exhaustive `match`; a [`Rule`] can never be mistaken for a plain
/// [`Term`].
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Value {
    Program(Arc<Program>),
    Rule(Arc<Rule>),
    Var(Var),
    Term(Arc<Term>),
    /// An ordered sequence, `[a, b]` in Prolog.
    List(Vec<Value>),
    /// A fixed sequence, `(a, b)` in Prolog.
    Tuple(Vec<Value>),
    Atom(String),
    Int(i64),
    Real(f64),
    /// Any other scalar; rendered with its [`fmt::Display`] form.
    #[cfg_attr(feature = "serde", serde(skip))]
    Other(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    #[inline]
    pub fn atom(name: impl AsRef<str>) -> Self {
        Value::Atom(String::from(name.as_ref()))
    }

    #[inline]
    pub fn var(name: impl AsRef<str>) -> Self {
        Value::Var(Var::new(name))
    }

    /// Wraps an arbitrary displayable value.  Permissive rendering
    /// prints it as is; strict rendering rejects it.
    #[inline]
    pub fn other(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Value::Other(Arc::new(value))
    }

    /// Returns a string describing the kind of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Program(_) => "program",
            Value::Rule(_) => "rule",
            Value::Var(_) => "var",
            Value::Term(_) => "term",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Atom(_) => "atom",
            Value::Int(_) => "int",
            Value::Real(_) => "real",
            Value::Other(_) => "other",
        }
    }

    /// The comments attached to a term or rule; empty for everything else.
    pub fn comments(&self) -> &[String] {
        match self {
            Value::Term(t) => t.comments(),
            Value::Rule(r) => r.comments(),
            _ => &[],
        }
    }

    /// Returns a copy of this term or rule whose comment list is exactly
    /// `[comment]`.  Arguments stay shared with the original.
    pub fn with_comment(&self, comment: impl AsRef<str>) -> Result<Value, TermError> {
        match self {
            Value::Term(t) => Ok(Value::Term(Arc::new(
                Term::clone(t).with_comment(comment),
            ))),
            Value::Rule(r) => Ok(Value::Rule(Arc::new(
                Rule::clone(r).with_comment(comment),
            ))),
            other => Err(TermError::UnexpectedKind {
                expected: "term or rule",
                found: other.kind_name(),
            }),
        }
    }

    pub fn as_term(&self) -> Result<&Term, TermError> {
        match self {
            Value::Term(t) => Ok(t),
            other => Err(other.mismatch("term")),
        }
    }

    pub fn as_rule(&self) -> Result<&Rule, TermError> {
        match self {
            Value::Rule(r) => Ok(r),
            other => Err(other.mismatch("rule")),
        }
    }

    pub fn as_program(&self) -> Result<&Program, TermError> {
        match self {
            Value::Program(p) => Ok(p),
            other => Err(other.mismatch("program")),
        }
    }

    pub fn as_var(&self) -> Result<&Var, TermError> {
        match self {
            Value::Var(v) => Ok(v),
            other => Err(other.mismatch("var")),
        }
    }

    pub fn as_atom(&self) -> Result<&str, TermError> {
        match self {
            Value::Atom(a) => Ok(a),
            other => Err(other.mismatch("atom")),
        }
    }

    pub fn as_int(&self) -> Result<i64, TermError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn as_real(&self) -> Result<f64, TermError> {
        match self {
            Value::Real(r) => Ok(*r),
            other => Err(other.mismatch("real")),
        }
    }

    pub fn as_list(&self) -> Result<&[Value], TermError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch("list")),
        }
    }

    pub fn as_tuple(&self) -> Result<&[Value], TermError> {
        match self {
            Value::Tuple(items) => Ok(items),
            other => Err(other.mismatch("tuple")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> TermError {
        TermError::UnexpectedKind {
            expected,
            found: self.kind_name(),
        }
    }
}

/// Structural equality.  `Other` values compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Program(a), Value::Program(b)) => a == b,
            (Value::Rule(a), Value::Rule(b)) => a == b,
            (Value::Var(a), Value::Var(b)) => a == b,
            (Value::Term(a), Value::Term(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Program(p) => f.debug_tuple("Program").field(p).finish(),
            Value::Rule(r) => f.debug_tuple("Rule").field(r).finish(),
            Value::Var(v) => f.debug_tuple("Var").field(&v.name()).finish(),
            Value::Term(t) => f.debug_tuple("Term").field(t).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Tuple(items) => f.debug_tuple("Tuple").field(items).finish(),
            Value::Atom(a) => f.debug_tuple("Atom").field(a).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Real(r) => f.debug_tuple("Real").field(r).finish(),
            Value::Other(o) => f
                .debug_tuple("Other")
                .field(&format_args!("{}", o))
                .finish(),
        }
    }
}

macro_rules! impl_from_integers_for_value {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self { Value::Int(v as i64) }
        }
    )*};
}
impl_from_integers_for_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_floats_for_value {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self { Value::Real(v as f64) }
        }
    )*};
}
impl_from_floats_for_value!(f32, f64);

impl From<&str> for Value {
    #[inline]
    fn from(name: &str) -> Self {
        Value::atom(name)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(name: String) -> Self {
        Value::Atom(name)
    }
}

impl From<std::string::String> for Value {
    #[inline]
    fn from(name: std::string::String) -> Self {
        Value::atom(name)
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    #[inline]
    fn from(name: Cow<'a, str>) -> Self {
        Value::atom(name)
    }
}

impl From<Var> for Value {
    #[inline]
    fn from(v: Var) -> Self {
        Value::Var(v)
    }
}

impl From<&Var> for Value {
    #[inline]
    fn from(v: &Var) -> Self {
        Value::Var(v.clone())
    }
}

macro_rules! impl_from_shared_for_value {
    ($($t:ident),* $(,)?) => {$(
        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self { Value::$t(Arc::new(v)) }
        }

        impl From<Arc<$t>> for Value {
            #[inline]
            fn from(v: Arc<$t>) -> Self { Value::$t(v) }
        }
    )*};
}
impl_from_shared_for_value!(Term, Rule, Program);

impl From<&Value> for Value {
    #[inline]
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Construct a compound [`Term`] by name.
///
/// ```rust
/// # use prolog_terms::{list, term, var};
/// let t = term!("member"; var!("X"), list![1, 2, 3]);
/// assert_eq!(t.arity(), 2);
/// let nilary = term!("foo");
/// assert_eq!(nilary.arity(), 0);
/// ```
#[macro_export]
macro_rules! term {
    ($predicate:expr; $($arg:expr),+ $(,)?) => {
        $crate::Term::new($predicate, [$($crate::Value::from($arg)),+])
    };
    ($predicate:expr) => {
        $crate::Term::new($predicate, ::std::iter::empty::<$crate::Value>())
    };
}

#[macro_export]
macro_rules! list {
    ($($arg:expr),* $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! tuple {
    ($($arg:expr),* $(,)?) => {
        $crate::Value::Tuple(vec![$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! var {
    ($name:expr) => {
        $crate::Value::var($name)
    };
}

#[macro_export]
macro_rules! atom {
    ($name:expr) => {
        $crate::Value::atom($name)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{atom, list, tuple, var};

    fn comment_texts(v: &[String]) -> Vec<&str> {
        v.iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn term_construction_by_name() {
        let t = term("member", [var!("X"), list![1, 2, 3]]);
        assert_eq!(t.predicate(), "member");
        assert_eq!(t.arity(), 2);
        assert_eq!(t.args()[0], Value::var("X"));
        assert_eq!(
            t.args()[1],
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
        assert!(t.comments().is_empty());
    }

    #[test]
    fn macro_matches_factory() {
        let a = crate::term!("parent"; "a", "b");
        let b = term("parent", ["a", "b"]);
        assert_eq!(a, b);
        let z = crate::term!("foo");
        assert_eq!(z.arity(), 0);
        assert_eq!(z.predicate(), "foo");
    }

    #[test]
    fn mixed_argument_kinds() {
        let t = crate::term!(
            "point";
            1u8, -2i32, 2.5, "x", atom!("Y"), var!("Z"),
            tuple!(1, 2), Var::new("W"),
        );
        let kinds: Vec<_> = t.args().iter().map(Value::kind_name).collect();
        assert_eq!(
            kinds,
            ["int", "int", "real", "atom", "atom", "var", "tuple", "var"]
        );
        assert_eq!(t.args()[1].as_int().unwrap(), -2);
        assert_eq!(t.args()[4].as_atom().unwrap(), "Y");
    }

    #[test]
    fn comments_append_and_replace() {
        let mut t = crate::term!("member"; var!("X"));
        t.add_comment("first");
        t.add_comment("second");
        assert_eq!(comment_texts(t.comments()), ["first", "second"]);
        let t = t.commented("third");
        assert_eq!(t.comments().len(), 3);
        let t = t.with_comment("only");
        assert_eq!(comment_texts(t.comments()), ["only"]);
    }

    #[test]
    fn shared_subterms() {
        let shared = Arc::new(crate::term!("leaf"; 1));
        let a = crate::term!("left"; Arc::clone(&shared));
        let b = crate::term!("right"; Arc::clone(&shared));
        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(a.args()[0], b.args()[0]);
    }

    #[test]
    fn value_with_comment_copies_outer_node() {
        let inner = Value::from(crate::term!("inner"; 1));
        let outer = Value::from(crate::term!("outer"; inner.clone()));
        let annotated = outer.with_comment("note").unwrap();
        assert_eq!(comment_texts(annotated.comments()), ["note"]);
        assert!(outer.comments().is_empty());
        assert_eq!(annotated.as_term().unwrap().args()[0], inner);
        assert!(Value::Int(1).with_comment("x").is_err());
    }

    #[test]
    fn unpack_fixed_arity() {
        let t = crate::term!("pair"; 1, 2);
        let [x, y] = t.unpack::<2>().unwrap();
        assert_eq!(x.as_int().unwrap(), 1);
        assert_eq!(y.as_int().unwrap(), 2);
        assert_eq!(
            t.unpack::<3>(),
            Err(TermError::UnexpectedArity {
                expected: 3,
                found: 2
            })
        );
        assert!(crate::term!("foo").unpack::<0>().is_ok());
    }

    #[test]
    fn accessors_report_kind_mismatch() {
        let v = Value::atom("a");
        assert_eq!(v.as_atom().unwrap(), "a");
        assert_eq!(
            v.as_term().unwrap_err(),
            TermError::UnexpectedKind {
                expected: "term",
                found: "atom"
            }
        );
        assert!(v.as_var().is_err());
        assert!(v.as_list().is_err());
        assert!(Value::Real(1.5).as_int().is_err());
        assert_eq!(Value::Real(1.5).as_real().unwrap(), 1.5);
        assert_eq!(tuple!(1).as_tuple().unwrap().len(), 1);
    }

    #[test]
    fn rule_shape() {
        let r = Rule::new(
            crate::term!("ancestor"; var!("X"), var!("Y")),
            [
                crate::term!("parent"; var!("X"), var!("Z")),
                crate::term!("ancestor"; var!("Z"), var!("Y")),
            ],
        );
        assert_eq!(r.predicate(), ":-");
        assert_eq!(r.arity(), 2);
        assert_eq!(r.head().predicate(), "ancestor");
        assert!(matches!(r.body(), Body::Conjunction(goals) if goals.len() == 2));

        let generic = r.to_term();
        assert_eq!(generic.predicate(), ":-");
        assert_eq!(generic.arity(), 2);
        assert_eq!(generic.args()[1].as_tuple().unwrap().len(), 2);
    }

    #[test]
    fn rule_body_from_value() {
        assert!(matches!(Body::from(tuple!(1, 2)), Body::Conjunction(_)));
        assert!(matches!(Body::from(list![1, 2]), Body::Goal(Value::List(_))));
        assert!(matches!(
            Body::from(crate::term!("p")),
            Body::Goal(Value::Term(_))
        ));
    }

    #[test]
    fn rule_head_must_be_term() {
        assert!(Rule::try_new(Value::from(crate::term!("p")), crate::term!("q")).is_ok());
        assert_eq!(
            Rule::try_new(var!("X"), crate::term!("q")).unwrap_err(),
            TermError::UnexpectedKind {
                expected: "term",
                found: "var"
            }
        );
        assert!(Rule::try_new(Value::Int(1), crate::term!("q")).is_err());
    }

    #[test]
    fn program_keeps_order_and_duplicates() {
        let fact = crate::term!("parent"; "a", "b");
        let mut p = Program::new([fact.clone(), fact.clone()]);
        p.push(crate::term!("parent"; "b", "c"));
        p.extend([crate::term!("parent"; "c", "d")]);
        assert_eq!(p.len(), 4);
        assert!(!p.is_empty());
        assert_eq!(p.entries()[0], p.entries()[1]);
        let names: Vec<_> = p
            .iter()
            .map(|v| v.as_term().unwrap().args()[1].as_atom().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["b", "b", "c", "d"]);

        let collected: Program = (0..3).collect();
        assert_eq!(collected.len(), 3);
        assert!(Program::default().is_empty());
    }

    #[test]
    fn other_values_compare_by_identity() {
        let o = Value::other(true);
        assert_eq!(o, o.clone());
        assert_ne!(o, Value::other(true));
        assert_eq!(format!("{:?}", o), "Other(true)");
    }

    #[test]
    fn model_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
        assert_send_sync::<Program>();
    }
}
