//! Core vocabulary for enumerated attributes
//!
//! - `Sym`: a declared symbolic name (`red`, `green`, ...)
//! - `RawValue`: the storage-side counterpart (integer or string)
//! - `Member`: one enumeration member (symbol + raw + label)
//! - `EnumSchema`: the immutable per-attribute schema
//!
//! Blank is modeled as `Option<RawValue>::None` everywhere; it is never a
//! `RawValue` variant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{EnumError, EnumResult};

/// A symbolic name for one enumeration member.
///
/// Symbols are plain lowercase-ish identifiers in practice (`red`, `in_review`),
/// but no character set is enforced beyond non-emptiness at declaration time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sym(String);

impl Sym {
    /// Creates a symbol from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the symbol the way validation messages expect it (`:red`).
    pub fn inspect(&self) -> String {
        format!(":{}", self.0)
    }
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sym {
    fn from(name: &str) -> Self {
        Sym::new(name)
    }
}

impl From<String> for Sym {
    fn from(name: String) -> Self {
        Sym(name)
    }
}

/// The value that actually crosses into the persistence layer for an
/// enumerated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// 64-bit signed integer column value
    Int(i64),
    /// String column value
    Str(String),
}

impl RawValue {
    /// Returns the string payload if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s.as_str()),
            RawValue::Int(_) => None,
        }
    }

    /// Returns the integer payload if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(n) => Some(*n),
            RawValue::Str(_) => None,
        }
    }

    /// Renders the value the way validation messages expect a string input
    /// (`"beige"`); integers render bare.
    pub fn inspect(&self) -> String {
        match self {
            RawValue::Int(n) => n.to_string(),
            RawValue::Str(s) => format!("{:?}", s),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(n) => write!(f, "{}", n),
            RawValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Str(s)
    }
}

impl From<&Sym> for RawValue {
    fn from(sym: &Sym) -> Self {
        RawValue::Str(sym.as_str().to_string())
    }
}

impl From<RawValue> for serde_json::Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Int(n) => serde_json::Value::from(n),
            RawValue::Str(s) => serde_json::Value::String(s),
        }
    }
}

impl TryFrom<&serde_json::Value> for RawValue {
    type Error = EnumError;

    fn try_from(value: &serde_json::Value) -> EnumResult<Self> {
        match value {
            serde_json::Value::String(s) => Ok(RawValue::Str(s.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(RawValue::Int)
                .ok_or_else(|| EnumError::configuration("raw values must be integers or strings")),
            other => Err(EnumError::configuration(format!(
                "raw values must be integers or strings, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// One declared enumeration member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Symbolic name
    pub symbol: Sym,
    /// Storage/query counterpart
    pub raw: RawValue,
    /// Human-facing label; may be non-textual (e.g. a number)
    pub label: RawValue,
}

/// Immutable schema for one enumerated attribute.
///
/// Built once at declaration time and never mutated afterwards, so it may be
/// shared freely (the registry hands out `Arc<EnumSchema>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumSchema {
    pub(crate) name: String,
    pub(crate) attribute: String,
    pub(crate) members: Vec<Member>,
    pub(crate) allow_blank: bool,
    pub(crate) default: Option<Sym>,
    pub(crate) initial: Option<Sym>,
}

impl EnumSchema {
    /// The enumeration's name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying raw column name (defaults to the enumeration name).
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Whether a blank write is acceptable.
    pub fn allow_blank(&self) -> bool {
        self.allow_blank
    }

    /// Read-time fallback symbol, if a valid one was declared.
    pub fn default_symbol(&self) -> Option<&Sym> {
        self.default.as_ref()
    }

    /// Materialization-time fallback symbol, if a valid one was declared.
    pub fn initial_symbol(&self) -> Option<&Sym> {
        self.initial.as_ref()
    }

    /// Declared members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Sym> {
        self.members.iter().map(|m| &m.symbol)
    }

    /// Symbols sorted alphabetically, the order the validation message uses.
    pub fn sorted_symbols(&self) -> Vec<&Sym> {
        let mut symbols: Vec<&Sym> = self.symbols().collect();
        symbols.sort();
        symbols
    }

    /// True iff `symbol` is a declared member.
    pub fn contains(&self, symbol: &Sym) -> bool {
        self.member(symbol).is_some()
    }

    fn member(&self, symbol: &Sym) -> Option<&Member> {
        self.members.iter().find(|m| &m.symbol == symbol)
    }

    /// The raw storage counterpart of a declared symbol.
    pub fn raw_of(&self, symbol: &Sym) -> Option<&RawValue> {
        self.member(symbol).map(|m| &m.raw)
    }

    /// The label of a declared symbol.
    pub fn label_of(&self, symbol: &Sym) -> Option<&RawValue> {
        self.member(symbol).map(|m| &m.label)
    }

    /// Resolves a stored raw value back to its symbol.
    ///
    /// A string matching a symbol's name resolves to that symbol; otherwise
    /// the members' raw counterparts are searched in declaration order and
    /// the first match wins (multiple symbols may share a raw value). An
    /// unknown value resolves to `None`, never an error: reads are
    /// permissive, only writes validate.
    pub fn resolve(&self, raw: &RawValue) -> Option<&Sym> {
        if let RawValue::Str(s) = raw {
            if let Some(m) = self.members.iter().find(|m| m.symbol.as_str() == s) {
                return Some(&m.symbol);
            }
        }
        self.members.iter().find(|m| &m.raw == raw).map(|m| &m.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::declare::{Mapping, Options};

    fn color_schema() -> EnumSchema {
        EnumSchema::declare(
            "color",
            Mapping::explicit([
                ("red", RawValue::from("Red color")),
                ("green", RawValue::from(2)),
                ("blue", RawValue::from(3)),
            ]),
            <Options as Default>::default().allow_blank(true),
        )
        .unwrap()
    }

    #[test]
    fn test_raw_of_and_label_of() {
        let schema = color_schema();
        assert_eq!(
            schema.raw_of(&Sym::new("red")),
            Some(&RawValue::from("Red color"))
        );
        assert_eq!(schema.raw_of(&Sym::new("green")), Some(&RawValue::Int(2)));
        assert_eq!(schema.raw_of(&Sym::new("beige")), None);
        assert_eq!(schema.label_of(&Sym::new("green")), Some(&RawValue::Int(2)));
    }

    #[test]
    fn test_resolve_prefers_symbol_name() {
        let schema = color_schema();
        assert_eq!(schema.resolve(&RawValue::from("red")), Some(&Sym::new("red")));
        assert_eq!(
            schema.resolve(&RawValue::from("Red color")),
            Some(&Sym::new("red"))
        );
        assert_eq!(schema.resolve(&RawValue::Int(3)), Some(&Sym::new("blue")));
        assert_eq!(schema.resolve(&RawValue::Int(9)), None);
    }

    #[test]
    fn test_resolve_first_declared_wins_on_shared_raw() {
        let schema = EnumSchema::declare(
            "status",
            Mapping::explicit([
                ("open", RawValue::Int(1)),
                ("active", RawValue::Int(1)),
            ]),
            <Options as Default>::default(),
        )
        .unwrap();
        assert_eq!(schema.resolve(&RawValue::Int(1)), Some(&Sym::new("open")));
    }

    #[test]
    fn test_sorted_symbols() {
        let schema = color_schema();
        let sorted: Vec<&str> = schema.sorted_symbols().iter().map(|s| s.as_str()).collect();
        assert_eq!(sorted, vec!["blue", "green", "red"]);
    }

    #[test]
    fn test_raw_value_json_bridge() {
        let v: serde_json::Value = RawValue::Int(2).into();
        assert_eq!(v, serde_json::json!(2));

        let raw = RawValue::try_from(&serde_json::json!("red")).unwrap();
        assert_eq!(raw, RawValue::from("red"));

        assert!(RawValue::try_from(&serde_json::json!(true)).is_err());
        assert!(RawValue::try_from(&serde_json::json!(1.5)).is_err());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(RawValue::Int(2).to_string(), "2");
        assert_eq!(RawValue::from("red").to_string(), "red");
        assert_eq!(Sym::new("red").inspect(), ":red");
        assert_eq!(RawValue::from("beige").inspect(), "\"beige\"");
    }
}
