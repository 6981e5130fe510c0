//! The enumeration value object
//!
//! One `EnumValue` is constructed per attribute read (`from_raw`) and per
//! attribute write (`from_symbol`). Construction is the only place behavior
//! differs between the two directions:
//!
//! - writes are strict: a non-member symbol fails with `InvalidSymbol`, a
//!   blank fails with `BlankNotAllowed` unless the schema allows blanks;
//! - reads are permissive: an out-of-band raw value simply resolves to
//!   blank/false through every derived accessor.
//!
//! Values are immutable and never persisted themselves; only the raw value
//! crosses into storage.

use std::fmt;
use std::sync::Arc;

use crate::schema::{humanize, EnumError, EnumResult, EnumSchema, RawValue, Sym};

/// Assignment/translation input: a symbol, a string, or blank.
///
/// Strings are accepted wherever symbols are and validated against the same
/// member set; they only differ in how an invalid input is rendered in the
/// error message (`"beige"` instead of `:beige`).
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolInput {
    Symbol(Sym),
    Text(String),
    Blank,
}

impl SymbolInput {
    fn is_blank(&self) -> bool {
        match self {
            SymbolInput::Blank => true,
            SymbolInput::Symbol(s) => s.as_str().is_empty(),
            SymbolInput::Text(t) => t.is_empty(),
        }
    }

    fn name(&self) -> &str {
        match self {
            SymbolInput::Symbol(s) => s.as_str(),
            SymbolInput::Text(t) => t.as_str(),
            SymbolInput::Blank => "",
        }
    }

    /// Inspect form for the validation message.
    fn rendered(&self) -> String {
        match self {
            SymbolInput::Symbol(s) => s.inspect(),
            SymbolInput::Text(t) => format!("{:?}", t),
            SymbolInput::Blank => "blank".to_string(),
        }
    }
}

impl From<Sym> for SymbolInput {
    fn from(sym: Sym) -> Self {
        SymbolInput::Symbol(sym)
    }
}

impl From<&Sym> for SymbolInput {
    fn from(sym: &Sym) -> Self {
        SymbolInput::Symbol(sym.clone())
    }
}

impl From<&str> for SymbolInput {
    fn from(text: &str) -> Self {
        SymbolInput::Text(text.to_string())
    }
}

impl From<String> for SymbolInput {
    fn from(text: String) -> Self {
        SymbolInput::Text(text)
    }
}

impl<T: Into<SymbolInput>> From<Option<T>> for SymbolInput {
    fn from(input: Option<T>) -> Self {
        match input {
            Some(inner) => inner.into(),
            None => SymbolInput::Blank,
        }
    }
}

/// An enumerated attribute's value, bound to its schema.
///
/// Equality compares raw values only; schema identity is not part of it.
#[derive(Debug, Clone)]
pub struct EnumValue {
    schema: Arc<EnumSchema>,
    raw: Option<RawValue>,
}

impl EnumValue {
    /// Constructs a value from an assigned symbol, string, or blank.
    ///
    /// The validated value's raw form is the symbol's string form; the
    /// declared raw counterpart is what query translation and `initial`
    /// produce (see `predicate::translate_for_query`).
    ///
    /// # Errors
    ///
    /// - `BlankNotAllowed` for a blank input when the schema forbids blanks
    /// - `InvalidSymbol` for a non-member input, message listing all
    ///   declared symbols sorted and double-quoted
    pub fn from_symbol(
        schema: &Arc<EnumSchema>,
        input: impl Into<SymbolInput>,
    ) -> EnumResult<EnumValue> {
        let input = input.into();

        if input.is_blank() {
            if !schema.allow_blank() {
                return Err(EnumError::blank_not_allowed(schema));
            }
            return Ok(EnumValue::from_raw(schema, None));
        }

        let symbol = Sym::new(input.name());
        if !schema.contains(&symbol) {
            return Err(EnumError::invalid_symbol(input.rendered(), schema));
        }

        Ok(EnumValue {
            schema: Arc::clone(schema),
            raw: Some(RawValue::from(&symbol)),
        })
    }

    /// Constructs a value from the stored raw column value. Never fails:
    /// unknown raw values yield a value whose accessors resolve to blank.
    pub fn from_raw(schema: &Arc<EnumSchema>, raw: Option<RawValue>) -> EnumValue {
        EnumValue {
            schema: Arc::clone(schema),
            raw,
        }
    }

    /// The schema this value was constructed against.
    pub fn schema(&self) -> &EnumSchema {
        &self.schema
    }

    /// The value as stored/assigned; blank stays blank even with a default.
    pub fn raw_value(&self) -> Option<&RawValue> {
        self.raw.as_ref()
    }

    /// The raw value with the read-time default applied: the stored value if
    /// present, else the default symbol's raw counterpart, else blank.
    pub fn effective_raw(&self) -> Option<&RawValue> {
        self.raw.as_ref().or_else(|| {
            self.schema
                .default_symbol()
                .and_then(|d| self.schema.raw_of(d))
        })
    }

    /// The symbolic form, resolved permissively from the effective raw value.
    pub fn to_symbol(&self) -> Option<&Sym> {
        self.effective_raw().and_then(|raw| self.schema.resolve(raw))
    }

    /// The declared label; may be non-textual.
    pub fn label(&self) -> Option<&RawValue> {
        self.to_symbol().and_then(|s| self.schema.label_of(s))
    }

    /// String form of the effective raw value (not of the label). Blank
    /// renders as the empty string.
    pub fn to_display_string(&self) -> String {
        self.effective_raw()
            .map(|raw| raw.to_string())
            .unwrap_or_default()
    }

    /// Human-friendly rendering of the display string.
    pub fn humanize(&self) -> String {
        humanize(&self.to_display_string())
    }

    /// Per-symbol predicate: true iff this value resolves to `candidate`.
    pub fn is(&self, candidate: &Sym) -> bool {
        self.to_symbol() == Some(candidate)
    }

    /// The full predicate dispatch table, one entry per declared symbol in
    /// declaration order.
    pub fn flags(&self) -> Vec<(&Sym, bool)> {
        let current = self.to_symbol();
        self.schema
            .members()
            .iter()
            .map(|m| (&m.symbol, current == Some(&m.symbol)))
            .collect()
    }

    /// True iff the stored raw value is blank (ignores any default).
    pub fn is_blank(&self) -> bool {
        self.raw.is_none()
    }

    /// Negation of [`is_blank`](Self::is_blank).
    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for EnumValue {}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
