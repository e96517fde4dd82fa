//! Reading and writing element properties
//!
//! The reader side is a delegation framework: every element type has an
//! ordered chain of [`PropertyReader`]s (most specific first) and
//! [`read_properties`] asks each in turn before declaring a child element
//! unknown. The writer side walks the same chains and emits every property
//! that differs from its default, so written documents read back to the
//! same values.

pub mod context;
pub mod cursor;
pub mod dispatch;
pub mod errors;
pub mod readers;
pub mod value_codec;
pub mod writer;

pub use context::ReadContext;
pub use cursor::{ElementCursor, UnknownElement, XmlReader};
pub use dispatch::{
    read_element, read_pid, read_properties, store, PropertyReader, ReadOutcome,
};
pub use errors::{ReadError, WriteError};
pub use readers::{
    read_item, read_item_from_str, reader_chain, write_item, BarLineRw, DynamicRw,
    EngravingItemRw, ReadReport, TextBaseRw, BARLINE_CHAIN, DYNAMIC_CHAIN, FINGERING_CHAIN,
};
pub use value_codec::{encode_value, read_value, EncodedValue};
pub use writer::XmlWriter;
