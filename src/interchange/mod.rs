//! Interchange boundary
//!
//! Converts typed property values to and from the generic
//! [`InterchangeValue`] used by hosts that do not know engraving types.
//!
//! ```text
//! PropertyValue ──to_interchange──▶ InterchangeValue   (lossy: units, fractions)
//! PropertyValue ◀─from_interchange─ InterchangeValue + PropertyType
//! ```

pub mod convert;
pub mod value;

pub use convert::{
    from_interchange, infer_from_interchange, to_interchange, ConversionError, Direction,
};
pub use value::{InterchangeType, InterchangeValue, OpaqueValue};
