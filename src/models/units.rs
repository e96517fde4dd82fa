//! Measurement units
//!
//! `Spatium` is the distance between two staff lines; `Millimetre` is an
//! absolute page distance. Both are thin wrappers so the property system can
//! tell them apart even though they share a floating point representation.

use serde::{Deserialize, Serialize};

/// Staff-space relative distance
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Spatium(pub f64);

impl Spatium {
    pub fn new(val: f64) -> Self {
        Spatium(val)
    }

    pub fn val(self) -> f64 {
        self.0
    }

    /// Absolute distance given the size of one staff space
    pub fn to_millimetre(self, staff_space: Millimetre) -> Millimetre {
        Millimetre(self.0 * staff_space.0)
    }
}

/// Absolute distance on the page
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Millimetre(pub f64);

impl Millimetre {
    pub fn new(val: f64) -> Self {
        Millimetre(val)
    }

    pub fn val(self) -> f64 {
        self.0
    }
}

impl From<Millimetre> for f64 {
    fn from(mm: Millimetre) -> f64 {
        mm.0
    }
}

impl From<Spatium> for f64 {
    fn from(sp: Spatium) -> f64 {
        sp.0
    }
}
