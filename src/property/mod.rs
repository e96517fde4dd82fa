//! Typed property values
//!
//! A `PropertyValue` holds exactly one of the payload types in
//! [`crate::models`], tagged by a [`PropertyType`]. Equality between values
//! follows the ordered coercion policy in [`equality`], not plain structural
//! comparison.

pub mod equality;
pub mod pid;
pub mod target;
pub mod types;
pub mod value;

pub use equality::{matching_rule, real_is_equal, Comparison, EqualityRule, EQUALITY_POLICY};
pub use pid::{Pid, PidGroup};
pub use target::PropertyTarget;
pub use types::PropertyType;
pub use value::{PropertyPayload, PropertyValue};
