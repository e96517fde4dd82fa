//! Notated durations
//!
//! A `TDuration` is a note value plus augmentation dots, as opposed to a
//! `Fraction`, which is a length of time.

use serde::{Deserialize, Serialize};

use super::fraction::Fraction;
use crate::ordinal_enum;

ordinal_enum! {
    /// Note value
    pub enum DurationType {
        Long = 0 => "long",
        Breve = 1 => "breve",
        Whole = 2 => "whole",
        Half = 3 => "half",
        Quarter = 4 => "quarter",
        Eighth = 5 => "eighth",
        D16th = 6 => "16th",
        D32nd = 7 => "32nd",
        D64th = 8 => "64th",
        D128th = 9 => "128th",
        D256th = 10 => "256th",
        D512th = 11 => "512th",
        D1024th = 12 => "1024th",
        Zero = 13 => "zero",
        Measure = 14 => "measure",
        Invalid = 15 => "",
    }
}

impl DurationType {
    /// Length of the undotted value in whole notes; `None` for measure,
    /// zero and invalid durations, which have no fixed length
    pub fn fraction(self) -> Option<Fraction> {
        let (num, den) = match self {
            DurationType::Long => (4, 1),
            DurationType::Breve => (2, 1),
            DurationType::Whole => (1, 1),
            DurationType::Half => (1, 2),
            DurationType::Quarter => (1, 4),
            DurationType::Eighth => (1, 8),
            DurationType::D16th => (1, 16),
            DurationType::D32nd => (1, 32),
            DurationType::D64th => (1, 64),
            DurationType::D128th => (1, 128),
            DurationType::D256th => (1, 256),
            DurationType::D512th => (1, 512),
            DurationType::D1024th => (1, 1024),
            DurationType::Zero | DurationType::Measure | DurationType::Invalid => return None,
        };
        Some(Fraction::new(num, den))
    }
}

/// Most augmentation dots a duration can carry
pub const MAX_DOTS: u8 = 4;

/// A note value with augmentation dots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TDuration {
    pub duration_type: DurationType,
    pub dots: u8,
}

impl TDuration {
    pub fn new(duration_type: DurationType) -> Self {
        Self { duration_type, dots: 0 }
    }

    pub fn with_dots(duration_type: DurationType, dots: u8) -> Self {
        Self { duration_type, dots }
    }

    pub fn is_valid(&self) -> bool {
        self.duration_type != DurationType::Invalid && self.dots <= MAX_DOTS
    }

    /// Total length including dots; each dot adds half of the previous
    /// addition. Zero for invalid durations and those without a fixed length.
    pub fn fraction(&self) -> Fraction {
        if self.dots > MAX_DOTS {
            return Fraction::zero();
        }
        let Some(base) = self.duration_type.fraction() else {
            return Fraction::zero();
        };

        let half = Fraction::new(1, 2).to_rational();
        let mut total = base.to_rational();
        let mut addition = total;
        for _ in 0..self.dots {
            addition *= half;
            total += addition;
        }
        Fraction::from(total)
    }
}

impl Default for TDuration {
    fn default() -> Self {
        TDuration::new(DurationType::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_fractions() {
        assert_eq!(TDuration::new(DurationType::Quarter).fraction(), Fraction::new(1, 4));
        assert_eq!(
            TDuration::with_dots(DurationType::Quarter, 1).fraction(),
            Fraction::new(3, 8)
        );
        assert_eq!(
            TDuration::with_dots(DurationType::Half, 2).fraction(),
            Fraction::new(7, 8)
        );
    }

    #[test]
    fn test_dot_limit() {
        let shortest = TDuration::with_dots(DurationType::D1024th, MAX_DOTS);
        assert!(shortest.is_valid());
        assert_eq!(shortest.fraction(), Fraction::new(31, 16384));

        let overdotted = TDuration::with_dots(DurationType::Quarter, 40);
        assert!(!overdotted.is_valid());
        assert!(overdotted.fraction().is_zero());
    }

    #[test]
    fn test_measure_has_no_fixed_length() {
        assert!(TDuration::new(DurationType::Measure).fraction().is_zero());
        assert!(!TDuration::default().is_valid());
    }
}
