//! Persistence seam
//!
//! The crate never talks to storage directly; the host model implements
//! `RawRecord` over whatever row representation it has. Only raw column
//! values cross this boundary, in either direction.

use crate::schema::RawValue;

/// Raw column access for one record instance.
pub trait RawRecord {
    /// Reads the stored raw value of `attribute`; `None` means blank.
    fn read_raw(&self, attribute: &str) -> Option<RawValue>;

    /// Writes (or clears, with `None`) the stored raw value of `attribute`.
    fn write_raw(&mut self, attribute: &str, value: Option<RawValue>);
}
