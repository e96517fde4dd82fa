//! Error types for reading and writing element properties

use thiserror::Error;

use crate::property::{Pid, PropertyType};

/// Errors raised while reading a document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadError {
    /// Document is not well-formed
    #[error("XML parsing failed: {0}")]
    Xml(String),

    /// Document ended inside an open element
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// Element content could not be turned into a value of the expected type
    #[error("invalid value {value:?} in <{element}>: {reason}")]
    InvalidValue {
        element: String,
        value: String,
        reason: String,
    },

    /// The target would not store a value read for one of its properties
    #[error("<{element}>: {value_type} value refused for {pid:?}")]
    Refused {
        element: String,
        pid: Pid,
        value_type: PropertyType,
    },

    /// No reader in the chain recognized the element and the policy is strict
    #[error("unknown element <{name}> at line {line}")]
    UnknownElement { name: String, line: usize },

    /// The document's root element is not an element type we can read
    #[error("unsupported element type <{0}>")]
    UnsupportedElement(String),

    /// Values of this type have no document form
    #[error("{0} values cannot be read from documents")]
    UnsupportedType(PropertyType),

    #[error("missing required element: {0}")]
    MissingElement(String),
}

/// Errors raised while writing a document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WriteError {
    /// Values of this type have no document form
    #[error("{0} values cannot be written to documents")]
    UnsupportedType(PropertyType),

    /// Attempt to close an element that is not open
    #[error("unbalanced end of element <{0}>")]
    Unbalanced(String),
}

pub type Result<T> = std::result::Result<T, ReadError>;
