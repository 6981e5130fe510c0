//! Enumeration value objects
//!
//! Strict on construction from a symbol, permissive on construction from a
//! stored raw value; immutable afterwards.

mod enum_value;

pub use enum_value::{EnumValue, SymbolInput};
