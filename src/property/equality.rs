//! Equality policy for property values
//!
//! Two property values are not compared structurally. The same logical
//! property is stored under different tags at different call sites (a flag
//! as `Bool` here and `Int` there, an enum as its `Int` ordinal, a distance
//! as `Spatium` or plain `Real`), so comparison follows an ordered rule
//! table. The first rule whose tag appears on either side decides:
//!
//! | order | tag        | comparison                                   |
//! |-------|------------|----------------------------------------------|
//! | 0     | `Undefined`| equal iff both are undefined                 |
//! | 1     | `Bool`     | truthiness of both sides                     |
//! | 2     | `Int`      | integer view of both sides (enum ordinals)   |
//! | 3     | `Spatium`  | real view of both sides, within epsilon      |
//! | 4     | `Fraction` | same tag required, component identity        |
//! | 5     | `Duration` | same tag required, payload equality          |
//! | 6     | `Groups`   | same tag required, payload equality          |
//! | 7     | `Real`     | same tag required, within epsilon            |
//! | -     | otherwise  | same tag and equal payload                   |
//!
//! Rules 4 to 7 with a mismatched tag are contract violations: they trip a
//! debug assertion and compare unequal in release builds.

use super::types::PropertyType;
use super::value::PropertyValue;
use crate::settings::REAL_EPSILON;

/// How two values are compared once a rule matched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Compare `coerce_bool()` of both sides
    Truthiness,
    /// Compare `coerce_int()` of both sides
    Integer,
    /// Compare `coerce_real()` of both sides within `REAL_EPSILON`
    FuzzyReal,
    /// Both sides must carry the rule's tag; compare payloads
    SameTag,
    /// Both sides must carry the rule's tag; compare reals within `REAL_EPSILON`
    SameTagFuzzy,
}

/// One row of the equality policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EqualityRule {
    pub tag: PropertyType,
    pub comparison: Comparison,
}

/// The ordered policy table; `Undefined` is handled before it
pub const EQUALITY_POLICY: [EqualityRule; 7] = [
    EqualityRule { tag: PropertyType::Bool, comparison: Comparison::Truthiness },
    EqualityRule { tag: PropertyType::Int, comparison: Comparison::Integer },
    EqualityRule { tag: PropertyType::Spatium, comparison: Comparison::FuzzyReal },
    EqualityRule { tag: PropertyType::Fraction, comparison: Comparison::SameTag },
    EqualityRule { tag: PropertyType::Duration, comparison: Comparison::SameTag },
    EqualityRule { tag: PropertyType::Groups, comparison: Comparison::SameTag },
    EqualityRule { tag: PropertyType::Real, comparison: Comparison::SameTagFuzzy },
];

/// Epsilon-tolerant comparison of two reals
pub fn real_is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= REAL_EPSILON
}

/// The rule that decides a comparison between the two tags, `None` for the
/// generic same-tag structural case
pub fn matching_rule(a: PropertyType, b: PropertyType) -> Option<&'static EqualityRule> {
    EQUALITY_POLICY
        .iter()
        .find(|rule| rule.tag == a || rule.tag == b)
}

fn both<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.property_type(), other.property_type());

        if a == PropertyType::Undefined || b == PropertyType::Undefined {
            return a == b;
        }

        let Some(rule) = matching_rule(a, b) else {
            return structural_eq(self, other);
        };

        match rule.comparison {
            Comparison::Truthiness => both(self.coerce_bool(), other.coerce_bool()),
            Comparison::Integer => both(self.coerce_int(), other.coerce_int()),
            Comparison::FuzzyReal => match (self.coerce_real(), other.coerce_real()) {
                (Some(x), Some(y)) => real_is_equal(x, y),
                _ => false,
            },
            Comparison::SameTag => {
                debug_assert_eq!(a, b, "{} compared against {}", a, b);
                structural_eq(self, other)
            }
            Comparison::SameTagFuzzy => {
                debug_assert_eq!(a, b, "{} compared against {}", a, b);
                match (self.as_real(), other.as_real()) {
                    (Some(x), Some(y)) => real_is_equal(*x, *y),
                    _ => false,
                }
            }
        }
    }
}

macro_rules! same_variant_eq {
    ($a:expr, $b:expr; $( $variant:ident ),+ $(,)?) => {
        match ($a, $b) {
            (PropertyValue::Undefined, PropertyValue::Undefined) => true,
            $( (PropertyValue::$variant(x), PropertyValue::$variant(y)) => x == y, )+
            _ => false,
        }
    };
}

/// Same tag and equal payload under the payload's own equality
fn structural_eq(a: &PropertyValue, b: &PropertyValue) -> bool {
    same_variant_eq!(a, b;
        Bool, Int, Real, String,
        Point, Size, Path, Scale, Spatium, Millimetre, PairReal,
        Color, OrnamentStyle, GlissandoStyle,
        Align, PlacementV, PlacementH, DirectionV, DirectionH, BeamMode,
        Fraction, Duration,
        LayoutBreakType, VeloType, BarlineType, NoteheadType,
        SymbolId, HookType, DynamicType, AccidentalRole, Groups,
    )
}
