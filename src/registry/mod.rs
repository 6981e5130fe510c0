//! Model-type integration
//!
//! - `RawRecord`: the persistence seam a host model implements
//! - `EnumRegistry`: per-model-type schema registry with attribute
//!   read/write, the materialization hook, and the query-layer translation
//!   entry point

mod record;
#[allow(clippy::module_inception)]
mod registry;

pub use record::RawRecord;
pub use registry::EnumRegistry;
