//! The object side of property reading and writing

use super::pid::Pid;
use super::value::PropertyValue;

/// An object whose properties can be populated by a document reader.
///
/// The reader framework only ever uses these capabilities; it never looks at
/// the object's representation.
pub trait PropertyTarget {
    /// Whether this object carries the property at all
    fn recognizes(&self, pid: Pid) -> bool;

    /// Store a value. Returns `false` when the object refuses it (unknown
    /// property or a value of the wrong type).
    fn set_property(&mut self, pid: Pid, value: PropertyValue) -> bool;

    /// Current value, `Undefined` for properties the object does not carry
    fn property(&self, pid: Pid) -> PropertyValue;
}
