//! Error types for enumerated attributes
//!
//! Error kinds:
//! - `InvalidSymbol`: non-blank write or filter value that is not a declared
//!   symbol. The message format is a stable contract relied on by callers:
//!   `<input> is not one of {<sorted, double-quoted symbol names>}`.
//! - `BlankNotAllowed`: blank write while `allow_blank` is false. A distinct
//!   kind so callers can tell "missing" from "wrong".
//! - `Configuration`: declaration-time failures (empty mapping, duplicate
//!   symbol, duplicate registration, unknown enumeration name).
//!
//! All failures are deterministic given the same input and schema; nothing
//! here is ever retried.

use thiserror::Error;

use super::types::EnumSchema;

/// Result type for enumeration operations
pub type EnumResult<T> = Result<T, EnumError>;

/// Errors raised by declaration, assignment, and predicate translation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumError {
    /// Non-blank input that is not a declared symbol.
    ///
    /// `input` is the rendered input (`:beige` for a symbol, `"beige"` for a
    /// string); `expected` is the sorted, double-quoted symbol list.
    #[error("{input} is not one of {{{expected}}}")]
    InvalidSymbol { input: String, expected: String },

    /// Blank write or filter value while `allow_blank` is false.
    #[error("blank is not allowed for '{attribute}'")]
    BlankNotAllowed { attribute: String },

    /// Malformed declaration or registry misuse.
    #[error("invalid enumeration declaration: {0}")]
    Configuration(String),
}

impl EnumError {
    /// Builds the invalid-symbol error for `input` against `schema`.
    ///
    /// `input` must already be rendered in inspect form (`Sym::inspect` /
    /// `RawValue::inspect`).
    pub fn invalid_symbol(input: impl Into<String>, schema: &EnumSchema) -> Self {
        let expected = schema
            .sorted_symbols()
            .iter()
            .map(|s| format!("{:?}", s.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        EnumError::InvalidSymbol {
            input: input.into(),
            expected,
        }
    }

    /// Builds the blank-rejected error for `schema`'s attribute.
    pub fn blank_not_allowed(schema: &EnumSchema) -> Self {
        EnumError::BlankNotAllowed {
            attribute: schema.attribute().to_string(),
        }
    }

    /// Builds a declaration-time configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        EnumError::Configuration(message.into())
    }
}
