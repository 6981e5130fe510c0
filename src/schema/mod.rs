//! Enumeration schemas
//!
//! One `EnumSchema` per declared attribute, built once at declaration time
//! and immutable afterwards:
//!
//! - declaration order is retained for iteration; validation messages use
//!   the sorted order
//! - forward lookup (`raw_of`, `label_of`) and permissive reverse lookup
//!   (`resolve`)
//! - blank/default/initial policy carried as schema options

pub mod declare;
mod errors;
mod types;

pub use declare::{humanize, Mapping, Options};
pub use errors::{EnumError, EnumResult};
pub use types::{EnumSchema, Member, RawValue, Sym};
