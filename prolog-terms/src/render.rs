//! Renders [`Value`]s as Prolog text or as S-expressions.
//!
//! [`Renderer`] is the strategy trait; [`PrologRenderer`] and
//! [`SExprRenderer`] are its two implementations.  Both share the atom
//! quoting rule ([`quote_atom`]), the number formatting and the way
//! comments are emitted, and differ only in how compound shapes are
//! bracketed and separated.
//!
//! ```rust
//! # use prolog_terms::{list, term, var, PrologRenderer, Renderer, SExprRenderer, Value};
//! let t = Value::from(term!("member"; var!("X"), list![1, 2, 3]));
//! assert_eq!(PrologRenderer.render(&t), "member(X, [1, 2, 3])");
//! assert_eq!(SExprRenderer.render(&t), "(member ?X (list 1 2 3))");
//! assert_eq!(format!("{}", t.display(&SExprRenderer)), "(member ?X (list 1 2 3))");
//! ```

use crate::{Body, Program, Rule, Term, TermError, Value, Var};
use smartstring::alias::String;
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Returns `true` if `s` can be written as an atom without quotes: a
/// lowercase ASCII letter followed by alphanumerics or `_`.
pub fn is_plain_atom(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Returns the atom as it must appear in output: unchanged when
/// [`is_plain_atom`] holds, otherwise wrapped in single quotes with
/// `\`, `'` and newline escaped.
pub fn quote_atom(s: &str) -> Cow<'_, str> {
    if is_plain_atom(s) {
        return Cow::Borrowed(s);
    }
    let mut out = std::string::String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    Cow::Owned(out)
}

/// Output sink handed to [`Renderer`] methods.
///
/// Wraps any [`fmt::Write`] and remembers whether rendering is strict.
/// In strict mode values without a faithful textual form are reported
/// as errors; otherwise they are written on a best-effort basis.
pub struct Writer<'a> {
    out: &'a mut dyn fmt::Write,
    strict: bool,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut dyn fmt::Write, strict: bool) -> Self {
        Self { out, strict }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn write_atom(&mut self, name: &str) -> Result<(), TermError> {
        Ok(self.out.write_str(&quote_atom(name))?)
    }

    pub fn write_int(&mut self, i: i64) -> Result<(), TermError> {
        Ok(write!(self.out, "{}", i)?)
    }

    /// Integral reals keep one decimal place so they still read as reals.
    pub fn write_real(&mut self, r: f64) -> Result<(), TermError> {
        if self.strict && !r.is_finite() {
            return Err(TermError::UnrenderableValue(String::from(format!(
                "non-finite real {}",
                r
            ))));
        }
        if r.fract() == 0.0 {
            Ok(write!(self.out, "{:.1}", r)?)
        } else {
            Ok(write!(self.out, "{}", r)?)
        }
    }

    pub fn write_other(&mut self, value: &dyn fmt::Display) -> Result<(), TermError> {
        if self.strict {
            return Err(TermError::UnrenderableValue(String::from(format!(
                "{}",
                value
            ))));
        }
        Ok(write!(self.out, "{}", value)?)
    }
}

impl fmt::Write for Writer<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

/// A serialization strategy.
///
/// Implementors supply the syntax of each compound shape; dispatch,
/// comment emission and the permissive/strict entry points are
/// provided.  The trait is object safe, so a renderer can be picked at
/// run time (see [`Syntax::renderer`]).
pub trait Renderer {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Text that opens a comment line.
    fn comment_marker(&self) -> &'static str;

    fn write_program(&self, w: &mut Writer<'_>, program: &Program) -> Result<(), TermError>;

    /// Writes the rule itself; its comments are already written.
    fn write_rule(&self, w: &mut Writer<'_>, rule: &Rule) -> Result<(), TermError>;

    fn write_var(&self, w: &mut Writer<'_>, var: &Var) -> Result<(), TermError>;

    /// Writes the term itself; its comments are already written.
    fn write_term(&self, w: &mut Writer<'_>, term: &Term) -> Result<(), TermError>;

    fn write_list(&self, w: &mut Writer<'_>, items: &[Value]) -> Result<(), TermError>;

    fn write_tuple(&self, w: &mut Writer<'_>, items: &[Value]) -> Result<(), TermError>;

    fn write_value(&self, w: &mut Writer<'_>, value: &Value) -> Result<(), TermError> {
        match value {
            Value::Program(p) => self.write_program(w, p),
            Value::Rule(r) => self.write_commented_rule(w, r),
            Value::Var(v) => self.write_var(w, v),
            Value::Term(t) => self.write_commented_term(w, t),
            Value::List(items) => self.write_list(w, items),
            Value::Tuple(items) => self.write_tuple(w, items),
            Value::Atom(a) => w.write_atom(a),
            Value::Int(i) => w.write_int(*i),
            Value::Real(r) => w.write_real(*r),
            Value::Other(o) => w.write_other(&**o),
        }
    }

    /// One line per comment, in order.
    fn write_comments(&self, w: &mut Writer<'_>, comments: &[String]) -> Result<(), TermError> {
        for comment in comments {
            writeln!(w, "{} {}", self.comment_marker(), comment)?;
        }
        Ok(())
    }

    fn write_commented_term(&self, w: &mut Writer<'_>, term: &Term) -> Result<(), TermError> {
        if w.is_strict() && term.predicate().is_empty() {
            return Err(TermError::EmptyPredicate);
        }
        self.write_comments(w, term.comments())?;
        self.write_term(w, term)
    }

    fn write_commented_rule(&self, w: &mut Writer<'_>, rule: &Rule) -> Result<(), TermError> {
        self.write_comments(w, rule.comments())?;
        self.write_rule(w, rule)
    }

    fn write_joined(
        &self,
        w: &mut Writer<'_>,
        items: &[Value],
        separator: &str,
    ) -> Result<(), TermError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                w.write_str(separator)?;
            }
            self.write_value(w, item)?;
        }
        Ok(())
    }

    /// A single goal as is, a conjunction joined by `separator`.
    fn write_body(&self, w: &mut Writer<'_>, body: &Body, separator: &str) -> Result<(), TermError> {
        match body {
            Body::Goal(goal) => self.write_value(w, goal),
            Body::Conjunction(goals) => self.write_joined(w, goals, separator),
        }
    }

    /// Renders `value`, falling back to a best-effort textual form for
    /// values the syntax cannot express.  Never fails.
    fn render(&self, value: &Value) -> std::string::String {
        log::trace!("rendering {} as {}", value.kind_name(), self.name());
        let mut out = std::string::String::new();
        if let Err(e) = self.write_value(&mut Writer::new(&mut out, false), value) {
            log::debug!("{} rendering of {} stopped: {}", self.name(), value.kind_name(), e);
        }
        out
    }

    /// Renders `value`, failing on empty predicates, non-finite reals
    /// and [`Value::Other`] values.
    fn try_render(&self, value: &Value) -> Result<std::string::String, TermError> {
        log::trace!("strictly rendering {} as {}", value.kind_name(), self.name());
        let mut out = std::string::String::new();
        self.write_value(&mut Writer::new(&mut out, true), value)?;
        Ok(out)
    }
}

/// Prolog syntax: `head :- body`, `f(a, b)`, `[a, b]`, `% comment`.
///
/// A program renders as one clause per entry, each terminated by
/// `.` and a newline.  A single term renders without the terminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrologRenderer;

impl Renderer for PrologRenderer {
    fn name(&self) -> &'static str {
        "prolog"
    }

    fn comment_marker(&self) -> &'static str {
        "%"
    }

    fn write_program(&self, w: &mut Writer<'_>, program: &Program) -> Result<(), TermError> {
        for clause in program {
            self.write_value(w, clause)?;
            w.write_str(".\n")?;
        }
        Ok(())
    }

    fn write_rule(&self, w: &mut Writer<'_>, rule: &Rule) -> Result<(), TermError> {
        self.write_commented_term(w, rule.head())?;
        w.write_str(" :-\n    ")?;
        self.write_body(w, rule.body(), ", ")
    }

    fn write_var(&self, w: &mut Writer<'_>, var: &Var) -> Result<(), TermError> {
        Ok(w.write_str(var.name())?)
    }

    fn write_term(&self, w: &mut Writer<'_>, term: &Term) -> Result<(), TermError> {
        w.write_str(term.predicate())?;
        if term.arity() > 0 {
            w.write_char('(')?;
            self.write_joined(w, term.args(), ", ")?;
            w.write_char(')')?;
        }
        Ok(())
    }

    fn write_list(&self, w: &mut Writer<'_>, items: &[Value]) -> Result<(), TermError> {
        w.write_char('[')?;
        self.write_joined(w, items, ", ")?;
        Ok(w.write_char(']')?)
    }

    fn write_tuple(&self, w: &mut Writer<'_>, items: &[Value]) -> Result<(), TermError> {
        w.write_char('(')?;
        self.write_joined(w, items, ", ")?;
        Ok(w.write_char(')')?)
    }
}

/// S-expression syntax: `(<= head body)`, `(f a b)`, `(list a b)`,
/// `?X` for variables, `; comment`.
///
/// Every compound term is written as `(pred args)` with the predicate
/// always followed by a space, so a nilary term renders as `(foo )`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SExprRenderer;

impl Renderer for SExprRenderer {
    fn name(&self) -> &'static str {
        "sexpr"
    }

    fn comment_marker(&self) -> &'static str {
        ";"
    }

    fn write_program(&self, w: &mut Writer<'_>, program: &Program) -> Result<(), TermError> {
        self.write_joined(w, program.entries(), " ")
    }

    fn write_rule(&self, w: &mut Writer<'_>, rule: &Rule) -> Result<(), TermError> {
        w.write_str("(<= ")?;
        self.write_commented_term(w, rule.head())?;
        w.write_char(' ')?;
        self.write_body(w, rule.body(), " ")?;
        Ok(w.write_char(')')?)
    }

    fn write_var(&self, w: &mut Writer<'_>, var: &Var) -> Result<(), TermError> {
        w.write_char('?')?;
        Ok(w.write_str(var.name())?)
    }

    fn write_term(&self, w: &mut Writer<'_>, term: &Term) -> Result<(), TermError> {
        w.write_char('(')?;
        w.write_str(term.predicate())?;
        w.write_char(' ')?;
        self.write_joined(w, term.args(), " ")?;
        Ok(w.write_char(')')?)
    }

    fn write_list(&self, w: &mut Writer<'_>, items: &[Value]) -> Result<(), TermError> {
        w.write_str("(list ")?;
        self.write_joined(w, items, " ")?;
        Ok(w.write_char(')')?)
    }

    fn write_tuple(&self, w: &mut Writer<'_>, items: &[Value]) -> Result<(), TermError> {
        w.write_char('(')?;
        self.write_joined(w, items, " ")?;
        Ok(w.write_char(')')?)
    }
}

/// The available output syntaxes, for choosing a renderer at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syntax {
    #[default]
    Prolog,
    SExpr,
}

impl Syntax {
    pub fn renderer(self) -> &'static dyn Renderer {
        match self {
            Syntax::Prolog => &PrologRenderer,
            Syntax::SExpr => &SExprRenderer,
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.renderer().name())
    }
}

impl FromStr for Syntax {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prolog" | "pl" => Ok(Syntax::Prolog),
            "sexpr" | "s-expr" | "s-expression" => Ok(Syntax::SExpr),
            _ => Err(TermError::UnexpectedKind {
                expected: "prolog or sexpr",
                found: "unknown syntax",
            }),
        }
    }
}

/// A [`Value`] paired with a [`Renderer`], printable with `{}`.
///
/// Formatting is permissive, like [`Renderer::render`].  Construct it
/// with [`Value::display`].
pub struct RenderDisplay<'a> {
    value: &'a Value,
    renderer: &'a dyn Renderer,
}

impl Value {
    /// Return a [`RenderDisplay`] for use with `format!`, `println!` and
    /// friends.
    #[inline]
    pub fn display<'a>(&'a self, renderer: &'a dyn Renderer) -> RenderDisplay<'a> {
        RenderDisplay {
            value: self,
            renderer,
        }
    }
}

impl fmt::Display for RenderDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer
            .write_value(&mut Writer::new(f, false), self.value)
            .map_err(|_| fmt::Error)
    }
}

/// Formats in Prolog syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(&PrologRenderer), f)
    }
}
