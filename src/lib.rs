//! Typed notation properties
//!
//! A single dynamically typed [`PropertyValue`] that can hold any engraving
//! payload (numbers, geometry, units, durations, fractions, enumerations),
//! compared under an explicit coercion policy, converted to and from a
//! generic [`InterchangeValue`], and read from / written to XML through
//! delegating per-element reader chains.

pub mod interchange;
pub mod models;
pub mod property;
pub mod rw;
pub mod settings;

// Re-export commonly used types
pub use interchange::{from_interchange, to_interchange, ConversionError, InterchangeValue};
pub use models::{ElementType, Item};
pub use property::{Pid, PropertyTarget, PropertyType, PropertyValue};
pub use rw::{read_item_from_str, write_item, ReadError, WriteError};
pub use settings::{ReadSettings, UnknownElementPolicy};
