//! Predicate translation for the query layer
//!
//! Symbolic filter values are rewritten into raw storage values before a
//! predicate is handed to the query executor, failing fast on invalid
//! symbols.

mod translate;

pub use translate::{translate_for_query, FilterArg};
