//! Musical fractions (tick positions, time signatures, durations)
//!
//! A `Fraction` keeps the numerator and denominator it was written with:
//! `2/4` and `1/2` are different fractions (different time signatures) even
//! though they denote the same rational number. Arithmetic goes through
//! `num_rational` and yields reduced results.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Unreduced numerator/denominator pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

/// Serialized form, checked before it becomes a `Fraction`
#[derive(Deserialize)]
struct RawFraction {
    numerator: i32,
    denominator: i32,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = String;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        if raw.denominator == 0 {
            return Err(format!("zero denominator in {}/0", raw.numerator));
        }
        Ok(Fraction::new(raw.numerator, raw.denominator))
    }
}

impl Fraction {
    /// Create a new fraction
    pub fn new(numerator: i32, denominator: i32) -> Self {
        assert!(denominator != 0, "Fraction denominator must be non-zero");
        Fraction { numerator, denominator }
    }

    pub fn zero() -> Self {
        Fraction::new(0, 1)
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Exact component match; `2/4` is not identical to `1/2`
    pub fn identical(&self, other: &Fraction) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Same rational value regardless of how it is written
    pub fn value_eq(&self, other: &Fraction) -> bool {
        self.to_rational() == other.to_rational()
    }

    /// The rational value of this fraction (reduced, positive denominator)
    pub fn to_rational(&self) -> Rational32 {
        Rational32::new(self.numerator, self.denominator)
    }

    /// Reduce by the greatest common divisor
    pub fn reduced(&self) -> Self {
        Fraction::from(self.to_rational())
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Convert to floating point (for debugging/display)
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl From<Rational32> for Fraction {
    fn from(r: Rational32) -> Self {
        Fraction::new(*r.numer(), *r.denom())
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::from(self.to_rational() + rhs.to_rational())
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Accepts `"n/d"` or a bare integer `"n"` (read as `n/1`)
impl FromStr for Fraction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (num.trim(), den.trim()),
            None => (s, "1"),
        };

        let numerator = num
            .parse::<i32>()
            .map_err(|e| format!("invalid numerator in '{}': {}", s, e))?;
        let denominator = den
            .parse::<i32>()
            .map_err(|e| format!("invalid denominator in '{}': {}", s, e))?;

        if denominator == 0 {
            return Err(format!("zero denominator in '{}'", s));
        }

        Ok(Fraction::new(numerator, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_not_value_equality() {
        let half = Fraction::new(1, 2);
        let two_quarters = Fraction::new(2, 4);
        assert!(!half.identical(&two_quarters));
        assert_ne!(half, two_quarters);
        assert!(half.value_eq(&two_quarters));
        assert_eq!(two_quarters.reduced(), half);
    }

    #[test]
    fn test_string_round_trip() {
        let f = Fraction::new(6, 8);
        assert_eq!(f.to_string(), "6/8");
        assert_eq!("6/8".parse::<Fraction>(), Ok(f));
        assert_eq!("3".parse::<Fraction>(), Ok(Fraction::new(3, 1)));
        assert_eq!(" -1 / 4 ".parse::<Fraction>(), Ok(Fraction::new(-1, 4)));
    }

    #[test]
    fn test_parse_errors() {
        assert!("1/0".parse::<Fraction>().is_err());
        assert!("a/4".parse::<Fraction>().is_err());
        assert!("".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_deserialize_checks_denominator() {
        let f: Fraction = serde_json::from_str(r#"{"numerator":3,"denominator":8}"#).unwrap();
        assert_eq!(f, Fraction::new(3, 8));

        let zero = r#"{"numerator":1,"denominator":0}"#;
        let err = serde_json::from_str::<Fraction>(zero).unwrap_err();
        assert!(err.to_string().contains("zero denominator"), "{}", err);
    }

    #[test]
    fn test_add_reduces() {
        assert_eq!(Fraction::new(1, 4) + Fraction::new(1, 4), Fraction::new(1, 2));
    }
}
