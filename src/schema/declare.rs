//! Schema declaration
//!
//! A declaration takes a `Mapping` plus `Options` and produces an immutable
//! `EnumSchema`. Two mapping forms exist, mirroring string-backed and
//! arbitrarily-backed columns:
//!
//! - sequence: `Mapping::sequence(["red", "green", "blue"])` — the raw value
//!   is the symbol's string form and the label its humanized form;
//! - explicit: `Mapping::explicit([("red", "Red color".into()), ("green", 2.into())])`
//!   — the mapped value is both the raw counterpart and the label.
//!
//! Declaration fails fast on an empty mapping or a duplicate symbol. A
//! `default`/`initial` option naming an undeclared symbol is accepted with a
//! warning and never applies; reads simply resolve to blank.

use tracing::warn;

use super::errors::{EnumError, EnumResult};
use super::types::{EnumSchema, Member, RawValue, Sym};

/// Declaration input: the symbol set and its raw counterparts.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    /// Ordered symbols; raw value = the symbol's string form.
    Sequence(Vec<Sym>),
    /// Ordered symbol/raw pairs; arbitrary raw types (e.g. integers).
    Explicit(Vec<(Sym, RawValue)>),
}

impl Mapping {
    /// Sequence form: raw values are the symbols' string forms.
    pub fn sequence<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sym>,
    {
        Mapping::Sequence(symbols.into_iter().map(Into::into).collect())
    }

    /// Explicit form: each symbol carries its own raw counterpart.
    pub fn explicit<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, RawValue)>,
        S: Into<Sym>,
    {
        Mapping::Explicit(pairs.into_iter().map(|(s, r)| (s.into(), r)).collect())
    }

    fn is_empty(&self) -> bool {
        match self {
            Mapping::Sequence(symbols) => symbols.is_empty(),
            Mapping::Explicit(pairs) => pairs.is_empty(),
        }
    }

    fn into_members(self) -> Vec<Member> {
        match self {
            Mapping::Sequence(symbols) => symbols
                .into_iter()
                .map(|symbol| {
                    let raw = RawValue::from(&symbol);
                    let label = RawValue::Str(humanize(symbol.as_str()));
                    Member { symbol, raw, label }
                })
                .collect(),
            Mapping::Explicit(pairs) => pairs
                .into_iter()
                .map(|(symbol, raw)| Member {
                    symbol,
                    label: raw.clone(),
                    raw,
                })
                .collect(),
        }
    }
}

/// Declaration options.
///
/// Builder-style; everything defaults to off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    attribute: Option<String>,
    allow_blank: bool,
    default: Option<Sym>,
    initial: Option<Sym>,
}

impl Options {
    /// Binds the enumeration to a raw column with a different name.
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Accepts blank writes (and blank filter values).
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Read-time fallback symbol when storage is blank. Never mutates storage.
    pub fn default(mut self, symbol: impl Into<Sym>) -> Self {
        self.default = Some(symbol.into());
        self
    }

    /// Symbol written to storage at materialization when storage is blank.
    pub fn initial(mut self, symbol: impl Into<Sym>) -> Self {
        self.initial = Some(symbol.into());
        self
    }
}

impl EnumSchema {
    /// Builds the immutable schema for one enumerated attribute.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::Configuration` if the mapping is empty, a symbol
    /// name is empty, or a symbol is declared twice.
    pub fn declare(
        name: impl Into<String>,
        mapping: Mapping,
        options: Options,
    ) -> EnumResult<EnumSchema> {
        let name = name.into();

        if mapping.is_empty() {
            return Err(EnumError::configuration(format!(
                "enumeration '{}' must declare at least one symbol",
                name
            )));
        }

        let members = mapping.into_members();

        for (i, member) in members.iter().enumerate() {
            if member.symbol.as_str().is_empty() {
                return Err(EnumError::configuration(format!(
                    "enumeration '{}' declares an empty symbol name",
                    name
                )));
            }
            if members[..i].iter().any(|m| m.symbol == member.symbol) {
                return Err(EnumError::configuration(format!(
                    "enumeration '{}' declares symbol {} more than once",
                    name,
                    member.symbol.inspect()
                )));
            }
        }

        let attribute = options.attribute.unwrap_or_else(|| name.clone());
        let default = check_fallback(&name, "default", options.default, &members);
        let initial = check_fallback(&name, "initial", options.initial, &members);

        Ok(EnumSchema {
            name,
            attribute,
            members,
            allow_blank: options.allow_blank,
            default,
            initial,
        })
    }
}

/// Drops a `default`/`initial` symbol that is not a member, with a warning.
fn check_fallback(
    name: &str,
    option: &str,
    symbol: Option<Sym>,
    members: &[Member],
) -> Option<Sym> {
    let symbol = symbol?;
    if members.iter().any(|m| m.symbol == symbol) {
        Some(symbol)
    } else {
        warn!(
            enumeration = name,
            option,
            symbol = symbol.as_str(),
            "ignoring fallback symbol that is not a declared member"
        );
        None
    }
}

/// The humanize transform: separators become spaces, first letter upcased.
///
/// `"in_review"` becomes `"In review"`, matching the label derivation for
/// sequence-form declarations.
pub fn humanize(input: &str) -> String {
    let spaced: String = input
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
