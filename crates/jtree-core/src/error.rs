//! Error types for JSON parsing.

use thiserror::Error;

/// Errors that can occur while parsing JSON text.
///
/// These are ordinary return values, never panics: every internal failure
/// (including text-to-number conversion overflow) is remapped into one of
/// these four kinds before crossing the public boundary. The generator has
/// no error channel, since a [`crate::Value`] tree is well-formed by
/// construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or exhausted where a value was required.
    #[error("expected a value, found end of input")]
    ExpectValue,

    /// A malformed token of any kind: a misspelled literal, a bad number,
    /// an unknown escape, an unterminated string or container.
    #[error("invalid value")]
    InvalidValue,

    /// The document contained extra non-whitespace content after the
    /// single root value.
    #[error("unexpected content after the root value")]
    RootNotSingular,

    /// A numeric literal exceeds the representable range for its type
    /// (i64 for integers, finite f64 for floats).
    #[error("number out of representable range")]
    NumberTooBig,
}

/// Convenience alias used throughout jtree-core.
pub type Result<T> = std::result::Result<T, ParseError>;
