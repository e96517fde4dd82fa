//! Configuration for reading documents and comparing values

use serde::{Deserialize, Serialize};

/// Absolute tolerance for `Real` and `Spatium` comparisons
pub const REAL_EPSILON: f64 = 1e-6;

/// What the reader does with an element no reader in the chain recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownElementPolicy {
    /// Record and skip silently
    Ignore,

    /// Record, skip and emit a `warn!` log record
    #[default]
    Log,

    /// Record and fail the read with `ReadError::UnknownElement`
    Strict,
}

/// Configuration options for reading element properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadSettings {
    /// Handling of unrecognized child elements
    pub unknown_elements: UnknownElementPolicy,

    /// Whether enumeration properties may be written as integer ordinals
    /// instead of their XML names
    pub accept_numeric_enums: bool,
}

impl Default for ReadSettings {
    fn default() -> Self {
        Self {
            unknown_elements: UnknownElementPolicy::Log,
            accept_numeric_enums: true,
        }
    }
}

impl ReadSettings {
    /// Settings that reject anything not understood
    pub fn strict() -> Self {
        Self {
            unknown_elements: UnknownElementPolicy::Strict,
            accept_numeric_enums: false,
        }
    }
}
