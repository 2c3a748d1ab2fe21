//! # CLI Error Type
//!
//! [`CliError`] aggregates everything the renderer binary can fail on:
//! reading the input, decoding it as JSON, and strict rendering.
//! Conversions are derived with `#[from]`, so `?` propagates them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The input file or stdin could not be read.
    #[error("io error {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid JSON program.
    #[error("json error {0}")]
    Json(#[from] serde_json::Error),

    /// Strict rendering rejected a value.
    #[error("term error {0}")]
    Term(#[from] prolog_terms::TermError),
}
