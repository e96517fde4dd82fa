//! Conversion between property values and interchange values
//!
//! Both directions are total over the tag space: every tag has an explicit
//! arm, and tags without a mapping return `ConversionError::Unsupported`
//! rather than a silent default. Known gaps:
//!
//! - `Path` has no interchange form in either direction.
//! - `Scale` converts from an interchange size but not back.
//! - `Duration` is wrapped as an opaque user value on the way out and cannot
//!   be rebuilt from a generic value; keep the original `PropertyValue`.
//! - `Groups` has no interchange form in either direction.
//!
//! Some conversions are lossy by design. Units are dropped (`Spatium(3.0)`
//! becomes `Double(3.0)`, which reads back as whatever unit the caller asks
//! for), and fractions travel as their `"n/d"` display string.

use std::fmt;

use log::debug;
use thiserror::Error;

use super::value::{InterchangeType, InterchangeValue, OpaqueValue};
use crate::models::{
    AccidentalRole, Align, BarlineType, BeamMode, DirectionH, DirectionV, DynamicType, Fraction,
    GlissandoStyle, HookType, LayoutBreakType, Millimetre, NoteheadType, OrdinalEnum,
    OrnamentStyle, PlacementH, PlacementV, ScaleF, Spatium, SymId, VeloType,
};
use crate::property::{PropertyType, PropertyValue};

/// Which way a conversion was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToInterchange,
    FromInterchange,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToInterchange => f.write_str("to interchange"),
            Direction::FromInterchange => f.write_str("from interchange"),
        }
    }
}

/// Errors at the interchange boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No mapping exists for this tag in this direction
    #[error("conversion of {tag} {direction} is not supported")]
    Unsupported { tag: PropertyType, direction: Direction },

    /// No tag was given and none can be inferred from the discriminator
    #[error("cannot infer a property type from interchange {0:?}")]
    UnsupportedInterchange(InterchangeType),

    /// The requested tag needs an aggregate the value does not hold
    #[error("{tag} cannot be read from interchange {found:?}")]
    TypeMismatch { tag: PropertyType, found: InterchangeType },

    /// Enumeration ordinal outside the type's range
    #[error("ordinal {ordinal} is out of range for {tag}")]
    InvalidOrdinal { tag: PropertyType, ordinal: i32 },

    #[error("invalid fraction: {0}")]
    InvalidFraction(String),
}

fn unsupported(tag: PropertyType, direction: Direction) -> ConversionError {
    debug!("no interchange mapping for {} {}", tag, direction);
    ConversionError::Unsupported { tag, direction }
}

fn ordinal(ordinal: i32) -> InterchangeValue {
    InterchangeValue::Int(ordinal)
}

/// Convert a property value into its interchange form
pub fn to_interchange(value: &PropertyValue) -> Result<InterchangeValue, ConversionError> {
    let no_mapping = |tag| unsupported(tag, Direction::ToInterchange);
    let converted = match value {
        PropertyValue::Undefined => InterchangeValue::Invalid,

        // Base
        PropertyValue::Bool(v) => InterchangeValue::Bool(*v),
        PropertyValue::Int(v) => InterchangeValue::Int(*v),
        PropertyValue::Real(v) => InterchangeValue::Double(*v),
        PropertyValue::String(v) => InterchangeValue::String(v.clone()),

        // Geometry
        PropertyValue::Point(v) => InterchangeValue::PointF(*v),
        PropertyValue::Size(v) => InterchangeValue::SizeF(*v),
        PropertyValue::Path(_) => return Err(no_mapping(PropertyType::Path)),
        PropertyValue::Scale(_) => return Err(no_mapping(PropertyType::Scale)),
        PropertyValue::Spatium(v) => InterchangeValue::Double(v.val()),
        PropertyValue::Millimetre(v) => InterchangeValue::Double(v.val()),
        PropertyValue::PairReal(v) => InterchangeValue::PairReal(*v),

        // Draw
        PropertyValue::Color(v) => InterchangeValue::Color(*v),
        PropertyValue::OrnamentStyle(v) => ordinal(v.ordinal()),
        PropertyValue::GlissandoStyle(v) => ordinal(v.ordinal()),

        // Layout
        PropertyValue::Align(v) => ordinal(v.ordinal()),
        PropertyValue::PlacementV(v) => ordinal(v.ordinal()),
        PropertyValue::PlacementH(v) => ordinal(v.ordinal()),
        PropertyValue::DirectionV(v) => ordinal(v.ordinal()),
        PropertyValue::DirectionH(v) => ordinal(v.ordinal()),
        PropertyValue::BeamMode(v) => ordinal(v.ordinal()),

        // Duration
        PropertyValue::Fraction(v) => InterchangeValue::String(v.to_string()),
        PropertyValue::Duration(v) => InterchangeValue::UserType(OpaqueValue::new(*v)),

        // Types
        PropertyValue::LayoutBreakType(v) => ordinal(v.ordinal()),
        PropertyValue::VeloType(v) => ordinal(v.ordinal()),
        PropertyValue::BarlineType(v) => ordinal(v.ordinal()),
        PropertyValue::NoteheadType(v) => ordinal(v.ordinal()),

        // Other
        PropertyValue::SymbolId(v) => ordinal(v.ordinal()),
        PropertyValue::HookType(v) => ordinal(v.ordinal()),
        PropertyValue::DynamicType(v) => ordinal(v.ordinal()),
        PropertyValue::AccidentalRole(v) => ordinal(v.ordinal()),
        PropertyValue::Groups(_) => return Err(no_mapping(PropertyType::Groups)),
    };
    Ok(converted)
}

fn enumeration<T>(
    tag: PropertyType,
    value: &InterchangeValue,
) -> Result<PropertyValue, ConversionError>
where
    T: OrdinalEnum,
    PropertyValue: From<T>,
{
    let ordinal = value.to_int();
    T::from_ordinal(ordinal)
        .map(PropertyValue::from)
        .ok_or(ConversionError::InvalidOrdinal { tag, ordinal })
}

fn mismatch(tag: PropertyType, value: &InterchangeValue) -> ConversionError {
    ConversionError::TypeMismatch { tag, found: value.value_type() }
}

/// Build a property value of the given tag from an interchange value.
///
/// With `PropertyType::Undefined` the tag is inferred from the interchange
/// discriminator instead, see [`infer_from_interchange`].
pub fn from_interchange(
    value: &InterchangeValue,
    tag: PropertyType,
) -> Result<PropertyValue, ConversionError> {
    let converted = match tag {
        PropertyType::Undefined => return infer_from_interchange(value),

        // Base
        PropertyType::Bool => PropertyValue::Bool(value.to_bool()),
        PropertyType::Int => PropertyValue::Int(value.to_int()),
        PropertyType::Real => PropertyValue::Real(value.to_real()),
        PropertyType::String => PropertyValue::String(value.to_string_value()),

        // Geometry
        PropertyType::Point => {
            PropertyValue::Point(value.to_point_f().ok_or_else(|| mismatch(tag, value))?)
        }
        PropertyType::Size => {
            PropertyValue::Size(value.to_size_f().ok_or_else(|| mismatch(tag, value))?)
        }
        PropertyType::Path => return Err(unsupported(tag, Direction::FromInterchange)),
        PropertyType::Scale => PropertyValue::Scale(ScaleF::from(
            value.to_size_f().ok_or_else(|| mismatch(tag, value))?,
        )),
        PropertyType::Spatium => PropertyValue::Spatium(Spatium(value.to_real())),
        PropertyType::Millimetre => PropertyValue::Millimetre(Millimetre(value.to_real())),
        PropertyType::PairReal => {
            PropertyValue::PairReal(value.to_pair().ok_or_else(|| mismatch(tag, value))?)
        }

        // Draw
        PropertyType::Color => {
            PropertyValue::Color(value.to_color().ok_or_else(|| mismatch(tag, value))?)
        }
        PropertyType::OrnamentStyle => return enumeration::<OrnamentStyle>(tag, value),
        PropertyType::GlissandoStyle => return enumeration::<GlissandoStyle>(tag, value),

        // Layout
        PropertyType::Align => return enumeration::<Align>(tag, value),
        PropertyType::PlacementV => return enumeration::<PlacementV>(tag, value),
        PropertyType::PlacementH => return enumeration::<PlacementH>(tag, value),
        PropertyType::DirectionV => return enumeration::<DirectionV>(tag, value),
        PropertyType::DirectionH => return enumeration::<DirectionH>(tag, value),
        PropertyType::BeamMode => return enumeration::<BeamMode>(tag, value),

        // Duration
        PropertyType::Fraction => PropertyValue::Fraction(
            value
                .to_string_value()
                .parse::<Fraction>()
                .map_err(ConversionError::InvalidFraction)?,
        ),
        PropertyType::Duration => return Err(unsupported(tag, Direction::FromInterchange)),

        // Types
        PropertyType::LayoutBreakType => return enumeration::<LayoutBreakType>(tag, value),
        PropertyType::VeloType => return enumeration::<VeloType>(tag, value),
        PropertyType::BarlineType => return enumeration::<BarlineType>(tag, value),
        PropertyType::NoteheadType => return enumeration::<NoteheadType>(tag, value),

        // Other
        PropertyType::SymbolId => return enumeration::<SymId>(tag, value),
        PropertyType::HookType => return enumeration::<HookType>(tag, value),
        PropertyType::DynamicType => return enumeration::<DynamicType>(tag, value),
        PropertyType::AccidentalRole => return enumeration::<AccidentalRole>(tag, value),
        PropertyType::Groups => return Err(unsupported(tag, Direction::FromInterchange)),
    };
    Ok(converted)
}

/// Pick a tag from the interchange discriminator alone.
///
/// Fixed priority: invalid, bool, integer-like (including unsigned, 64-bit
/// and char, all narrowed to `Int`), double, string, size, point, colour.
/// Pairs and user values have no default tag.
pub fn infer_from_interchange(value: &InterchangeValue) -> Result<PropertyValue, ConversionError> {
    let inferred = match value {
        InterchangeValue::Invalid => PropertyValue::Undefined,
        InterchangeValue::Bool(v) => PropertyValue::Bool(*v),
        InterchangeValue::Int(_)
        | InterchangeValue::UInt(_)
        | InterchangeValue::LongLong(_)
        | InterchangeValue::ULongLong(_)
        | InterchangeValue::Char(_) => PropertyValue::Int(value.to_int()),
        InterchangeValue::Double(v) => PropertyValue::Real(*v),
        InterchangeValue::String(s) => PropertyValue::String(s.clone()),
        InterchangeValue::Size { .. } | InterchangeValue::SizeF(_) => {
            let size = value.to_size_f().ok_or_else(|| mismatch(PropertyType::Size, value))?;
            PropertyValue::Size(size)
        }
        InterchangeValue::Point { .. } | InterchangeValue::PointF(_) => {
            let point = value.to_point_f().ok_or_else(|| mismatch(PropertyType::Point, value))?;
            PropertyValue::Point(point)
        }
        InterchangeValue::Color(c) => PropertyValue::Color(*c),
        InterchangeValue::PairReal(_) | InterchangeValue::UserType(_) => {
            return Err(ConversionError::UnsupportedInterchange(value.value_type()))
        }
    };
    Ok(inferred)
}

impl PropertyValue {
    /// Shorthand for [`to_interchange`]
    pub fn to_interchange(&self) -> Result<InterchangeValue, ConversionError> {
        to_interchange(self)
    }

    /// Shorthand for [`from_interchange`]
    pub fn from_interchange(
        value: &InterchangeValue,
        tag: PropertyType,
    ) -> Result<PropertyValue, ConversionError> {
        from_interchange(value, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlignH, AlignV, Color, DurationType, PainterPath, PointF, SizeF, TDuration};

    #[test]
    fn test_undefined_maps_to_invalid() {
        assert_eq!(to_interchange(&PropertyValue::Undefined), Ok(InterchangeValue::Invalid));
        assert_eq!(
            from_interchange(&InterchangeValue::Invalid, PropertyType::Undefined),
            Ok(PropertyValue::Undefined)
        );
    }

    #[test]
    fn test_enumerations_travel_as_ordinals() {
        let align = PropertyValue::from(Align::new(AlignH::Right, AlignV::Bottom));
        assert_eq!(to_interchange(&align), Ok(InterchangeValue::Int(5)));
        assert_eq!(
            to_interchange(&PropertyValue::from(DynamicType::Ff)),
            Ok(InterchangeValue::Int(10))
        );
        let back = from_interchange(&InterchangeValue::Int(10), PropertyType::DynamicType).unwrap();
        assert_eq!(back.as_dynamic_type(), Some(&DynamicType::Ff));
    }

    #[test]
    fn test_out_of_range_ordinal_is_rejected() {
        assert_eq!(
            from_interchange(&InterchangeValue::Int(99), PropertyType::PlacementV),
            Err(ConversionError::InvalidOrdinal { tag: PropertyType::PlacementV, ordinal: 99 })
        );
    }

    #[test]
    fn test_fraction_uses_display_string() {
        let half = PropertyValue::from(Fraction::new(2, 4));
        assert_eq!(to_interchange(&half), Ok(InterchangeValue::String("2/4".into())));
        assert_eq!(
            from_interchange(&InterchangeValue::String("2/4".into()), PropertyType::Fraction),
            Ok(half)
        );
        assert!(matches!(
            from_interchange(&InterchangeValue::String("half".into()), PropertyType::Fraction),
            Err(ConversionError::InvalidFraction(_))
        ));
    }

    #[test]
    fn test_duration_is_one_way() {
        let duration = TDuration::with_dots(DurationType::Half, 1);
        let out = to_interchange(&PropertyValue::from(duration)).unwrap();
        assert_eq!(out.user_value::<TDuration>(), Some(&duration));
        assert_eq!(
            from_interchange(&out, PropertyType::Duration),
            Err(ConversionError::Unsupported {
                tag: PropertyType::Duration,
                direction: Direction::FromInterchange,
            })
        );
    }

    #[test]
    fn test_scale_is_one_way() {
        let size = InterchangeValue::SizeF(SizeF::new(2.0, 3.0));
        let scale = from_interchange(&size, PropertyType::Scale).unwrap();
        assert_eq!(scale.as_scale(), Some(&ScaleF::new(2.0, 3.0)));
        assert!(matches!(
            to_interchange(&scale),
            Err(ConversionError::Unsupported { tag: PropertyType::Scale, .. })
        ));
    }

    #[test]
    fn test_path_is_unsupported_both_ways() {
        assert!(matches!(
            to_interchange(&PropertyValue::from(PainterPath::new())),
            Err(ConversionError::Unsupported {
                tag: PropertyType::Path,
                direction: Direction::ToInterchange,
            })
        ));
        assert!(matches!(
            from_interchange(&InterchangeValue::Invalid, PropertyType::Path),
            Err(ConversionError::Unsupported {
                tag: PropertyType::Path,
                direction: Direction::FromInterchange,
            })
        ));
    }

    #[test]
    fn test_aggregate_mismatch() {
        assert_eq!(
            from_interchange(&InterchangeValue::Int(1), PropertyType::Point),
            Err(ConversionError::TypeMismatch {
                tag: PropertyType::Point,
                found: InterchangeType::Int,
            })
        );
        assert!(from_interchange(&InterchangeValue::Double(1.0), PropertyType::Color).is_err());
    }

    #[test]
    fn test_inference_priority() {
        let infer = |v: InterchangeValue| from_interchange(&v, PropertyType::Undefined);
        assert_eq!(
            infer(InterchangeValue::Bool(true)).unwrap().property_type(),
            PropertyType::Bool
        );
        assert_eq!(infer(InterchangeValue::ULongLong(7)), Ok(PropertyValue::Int(7)));
        assert_eq!(infer(InterchangeValue::Char('a')), Ok(PropertyValue::Int(97)));
        assert_eq!(
            infer(InterchangeValue::Double(0.5)).unwrap().property_type(),
            PropertyType::Real
        );
        assert_eq!(
            infer(InterchangeValue::Size { width: 2, height: 1 }).unwrap().as_size(),
            Some(&SizeF::new(2.0, 1.0))
        );
        assert_eq!(
            infer(InterchangeValue::Point { x: 1, y: 2 }).unwrap().as_point(),
            Some(&PointF::new(1.0, 2.0))
        );
        assert_eq!(
            infer(InterchangeValue::Color(Color::WHITE)).unwrap().as_color(),
            Some(&Color::WHITE)
        );
        assert_eq!(
            infer(InterchangeValue::PairReal(Default::default())),
            Err(ConversionError::UnsupportedInterchange(InterchangeType::PairReal))
        );
    }
}
