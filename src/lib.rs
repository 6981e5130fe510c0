//! enumattr - enumerated attributes for record models
//!
//! Maps a raw stored column value (integer or string) to a rich, symbol-like
//! value object with bidirectional lookup, strict write-time validation,
//! permissive read-time resolution, blank/default/initial policy, and
//! query-predicate translation.
//!
//! ```
//! use std::sync::Arc;
//! use enumattr::{EnumSchema, EnumValue, Mapping, Options, RawValue, Sym};
//!
//! let schema = Arc::new(
//!     EnumSchema::declare(
//!         "color",
//!         Mapping::explicit([
//!             ("red", RawValue::from("Red color")),
//!             ("green", RawValue::from(2)),
//!             ("blue", RawValue::from(3)),
//!         ]),
//!         <Options as Default>::default().allow_blank(true),
//!     )
//!     .unwrap(),
//! );
//!
//! let color = EnumValue::from_symbol(&schema, Sym::new("red")).unwrap();
//! assert_eq!(color.label(), Some(&RawValue::from("Red color")));
//! assert_eq!(color.humanize(), "Red");
//! ```

pub mod predicate;
pub mod registry;
pub mod schema;
pub mod value;

pub use predicate::{translate_for_query, FilterArg};
pub use registry::{EnumRegistry, RawRecord};
pub use schema::{EnumError, EnumResult, EnumSchema, Mapping, Member, Options, RawValue, Sym};
pub use value::{EnumValue, SymbolInput};
