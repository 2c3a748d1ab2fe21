//! Defines [`TermError`], the unified error type for term operations.
//!
//! Provides descriptive error variants for kind and arity mismatches
//! reported by the accessors, and for values rejected by strict rendering.

use smartstring::alias::String;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur when inspecting or
/// rendering terms.
///
/// [`TermError`] provides a single error surface for higher-level functions.
/// Formatting failures convert via `#[from]`, so `?` works at call sites
/// that write through [`fmt::Write`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Arity mismatch: expected {expected}, found {found}")]
    UnexpectedArity { expected: usize, found: usize },

    /// A compound term with an empty predicate name.
    #[error("Empty predicate")]
    EmptyPredicate,

    /// A value that has no textual form in the target syntax.
    #[error("Unrenderable value: {0}")]
    UnrenderableValue(String),

    #[error("formatting error")]
    Fmt(#[from] fmt::Error),
}
