//! Query-predicate translation
//!
//! The query layer calls `translate_for_query` once per predicate that
//! references an enumerated attribute, before the predicate reaches the
//! executor. Translation is an explicit interception point, not a patch on
//! the query builder:
//!
//! - a symbol is validated against the schema and replaced by its raw
//!   counterpart, failing fast with the same `InvalidSymbol` message as a
//!   direct assignment;
//! - a list is translated element-wise, order preserved, first invalid
//!   element fails;
//! - anything else passes through unchanged.
//!
//! Pure and side-effect-free; never retried.

use crate::schema::{EnumError, EnumResult, EnumSchema, RawValue, Sym};

/// A filter argument as seen by the query layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterArg {
    /// Symbolic value, translated before execution
    Symbol(Sym),
    /// Raw value, passed through unchanged
    Value(RawValue),
    /// SQL-style null, passed through unchanged
    Null,
    /// "IN"-style list, translated element-wise
    List(Vec<FilterArg>),
}

impl FilterArg {
    /// Convenience constructor for a symbolic argument.
    pub fn symbol(name: impl Into<Sym>) -> Self {
        FilterArg::Symbol(name.into())
    }

    /// Convenience constructor for a raw argument.
    pub fn value(raw: impl Into<RawValue>) -> Self {
        FilterArg::Value(raw.into())
    }
}

impl From<Sym> for FilterArg {
    fn from(sym: Sym) -> Self {
        FilterArg::Symbol(sym)
    }
}

impl From<RawValue> for FilterArg {
    fn from(raw: RawValue) -> Self {
        FilterArg::Value(raw)
    }
}

impl TryFrom<&serde_json::Value> for FilterArg {
    type Error = EnumError;

    /// Bridge for JSON-speaking query layers. Strings arrive as raw values,
    /// not symbols: a JSON predicate has no symbol type, and strings pass
    /// through translation untouched just as they do in the native API.
    fn try_from(value: &serde_json::Value) -> EnumResult<Self> {
        match value {
            serde_json::Value::Null => Ok(FilterArg::Null),
            serde_json::Value::Array(items) => items
                .iter()
                .map(FilterArg::try_from)
                .collect::<EnumResult<Vec<_>>>()
                .map(FilterArg::List),
            other => RawValue::try_from(other).map(FilterArg::Value),
        }
    }
}

impl From<FilterArg> for serde_json::Value {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Symbol(sym) => serde_json::Value::String(sym.as_str().to_string()),
            FilterArg::Value(raw) => raw.into(),
            FilterArg::Null => serde_json::Value::Null,
            FilterArg::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
        }
    }
}

/// Translates a filter argument into raw storage terms.
///
/// # Errors
///
/// `InvalidSymbol` when a symbolic argument (or list element) is not a
/// declared member; the message matches the assignment-time contract.
pub fn translate_for_query(schema: &EnumSchema, arg: FilterArg) -> EnumResult<FilterArg> {
    match arg {
        FilterArg::Symbol(sym) => match schema.raw_of(&sym) {
            Some(raw) => Ok(FilterArg::Value(raw.clone())),
            None => Err(EnumError::invalid_symbol(sym.inspect(), schema)),
        },
        FilterArg::List(items) => items
            .into_iter()
            .map(|item| translate_for_query(schema, item))
            .collect::<EnumResult<Vec<_>>>()
            .map(FilterArg::List),
        passthrough @ (FilterArg::Value(_) | FilterArg::Null) => Ok(passthrough),
    }
}
