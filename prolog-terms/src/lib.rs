//! # Prolog Terms
//!
//! Build logic-programming terms in memory and render them as Prolog
//! text or as S-expressions.
//!
//! The model is a small set of owned types: [`Var`], compound [`Term`]s,
//! [`Rule`]s and [`Program`]s, tied together by the [`Value`] union that
//! also carries atoms, numbers, lists and tuples.  Terms are built by
//! name with [`term()`] or the [`term!`] macro; [`infix`] adds operator
//! and rule sugar.  A [`Renderer`] (either [`PrologRenderer`] or
//! [`SExprRenderer`]) turns any value into text.
//!
//! ## Example
//! ```rust
//! # use prolog_terms::{term, var, PrologRenderer, Program, Renderer, SExprRenderer, Value};
//! let recursive = term!("ancestor"; var!("X"), var!("Y"))
//!     .implied_by([
//!         term!("parent"; var!("X"), var!("Z")),
//!         term!("ancestor"; var!("Z"), var!("Y")),
//!     ])
//!     .with_comment("recursive");
//! let program = Program::new([Value::from(recursive), term!("parent"; "a", "B").into()]);
//! let program = Value::from(program);
//!
//! assert_eq!(
//!     PrologRenderer.render(&program),
//!     "% recursive\nancestor(X, Y) :-\n    parent(X, Z), ancestor(Z, Y).\nparent(a, 'B').\n"
//! );
//! assert_eq!(
//!     SExprRenderer.render(&program),
//!     "; recursive\n(<= (ancestor ?X ?Y) (parent ?X ?Z) (ancestor ?Z ?Y)) (parent a 'B')"
//! );
//! ```
//!
//! ## Features
//! - `serde`: derives `Serialize`/`Deserialize` for the model types.
//!   [`Value::Other`] is never serialized.
//!
//! ## License
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0 or
//! (at your option) any later version (LGPL-3.0-or-later).

mod error;
pub mod infix;
mod render;
mod term;

pub use error::TermError;
pub use infix::Op;
pub use render::{
    PrologRenderer, RenderDisplay, Renderer, SExprRenderer, Syntax, Writer, is_plain_atom,
    quote_atom,
};
pub use term::{Body, Program, Rule, Term, Value, Var, term};
