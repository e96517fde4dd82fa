//! Document form of property values
//!
//! Scalars are stored as element text, aggregates as attributes:
//!
//! | Tag                  | Form                                   |
//! |----------------------|----------------------------------------|
//! | Bool                 | `0` / `1` text                         |
//! | Int, Real, units     | decimal text                           |
//! | String               | text                                   |
//! | Point                | `x=".." y=".."`                        |
//! | Size, Scale          | `w=".." h=".."`                        |
//! | PairReal             | `first=".." second=".."`               |
//! | Color                | `r g b a` attributes, alpha optional   |
//! | Fraction             | `n/d` text                             |
//! | Duration             | type name text, optional `dots`        |
//! | enumerations         | XML name text, or ordinal when allowed |
//!
//! `Path` and `Groups` have no document form here.

use std::str::FromStr;

use super::cursor::ElementCursor;
use super::errors::{ReadError, Result, WriteError};
use crate::models::{
    AccidentalRole, Align, BarlineType, BeamMode, Color, DirectionH, DirectionV, DurationType,
    DynamicType, Fraction, GlissandoStyle, HookType, LayoutBreakType, Millimetre, NoteheadType,
    OrdinalEnum, OrnamentStyle, PairF, PlacementH, PlacementV, PointF, ScaleF, SizeF, Spatium,
    SymId, TDuration, VeloType, MAX_DOTS,
};
use crate::property::{PropertyType, PropertyValue};
use crate::settings::ReadSettings;

fn invalid(cursor: &dyn ElementCursor, value: &str, reason: impl Into<String>) -> ReadError {
    ReadError::InvalidValue {
        element: cursor.name().to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_text<T: FromStr>(cursor: &dyn ElementCursor, text: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| invalid(cursor, text, e.to_string()))
}

fn parse_bool(cursor: &dyn ElementCursor, text: &str) -> Result<bool> {
    match text.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(invalid(cursor, text, "expected 0 or 1")),
    }
}

fn required_attribute<T: FromStr>(cursor: &dyn ElementCursor, name: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = cursor
        .attribute(name)
        .ok_or_else(|| invalid(cursor, "", format!("missing attribute '{}'", name)))?;
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid(cursor, raw, format!("attribute '{}': {}", name, e)))
}

fn optional_attribute<T: FromStr>(cursor: &dyn ElementCursor, name: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match cursor.attribute(name) {
        Some(_) => required_attribute(cursor, name),
        None => Ok(default),
    }
}

fn parse_enum<T: OrdinalEnum>(
    cursor: &dyn ElementCursor,
    text: &str,
    settings: &ReadSettings,
) -> Result<T> {
    let trimmed = text.trim();
    if let Some(value) = T::from_xml(trimmed) {
        return Ok(value);
    }
    if settings.accept_numeric_enums {
        if let Ok(ordinal) = trimmed.parse::<i32>() {
            return T::from_ordinal(ordinal).ok_or_else(|| {
                invalid(cursor, text, format!("ordinal out of range for {}", T::TYPE_NAME))
            });
        }
    }
    Err(invalid(cursor, text, format!("not a {} name", T::TYPE_NAME)))
}

fn read_enum<T>(cursor: &mut dyn ElementCursor, settings: &ReadSettings) -> Result<PropertyValue>
where
    T: OrdinalEnum,
    PropertyValue: From<T>,
{
    let text = cursor.read_text()?;
    parse_enum::<T>(cursor, &text, settings).map(PropertyValue::from)
}

/// Read the element under the cursor as a value of `tag`, consuming it
pub fn read_value(
    tag: PropertyType,
    cursor: &mut dyn ElementCursor,
    settings: &ReadSettings,
) -> Result<PropertyValue> {
    let value = match tag {
        PropertyType::Undefined | PropertyType::Path | PropertyType::Groups => {
            cursor.skip_current()?;
            return Err(ReadError::UnsupportedType(tag));
        }

        PropertyType::Bool => {
            let text = cursor.read_text()?;
            PropertyValue::Bool(parse_bool(cursor, &text)?)
        }
        PropertyType::Int => {
            let text = cursor.read_text()?;
            PropertyValue::Int(parse_text(cursor, &text)?)
        }
        PropertyType::Real => {
            let text = cursor.read_text()?;
            PropertyValue::Real(parse_text(cursor, &text)?)
        }
        PropertyType::String => PropertyValue::String(cursor.read_text()?),
        PropertyType::Spatium => {
            let text = cursor.read_text()?;
            PropertyValue::Spatium(Spatium(parse_text(cursor, &text)?))
        }
        PropertyType::Millimetre => {
            let text = cursor.read_text()?;
            PropertyValue::Millimetre(Millimetre(parse_text(cursor, &text)?))
        }
        PropertyType::Fraction => {
            let text = cursor.read_text()?;
            PropertyValue::Fraction(
                text.parse::<Fraction>()
                    .map_err(|reason| invalid(cursor, &text, reason))?,
            )
        }

        // Aggregates: attributes are read before the element is consumed
        PropertyType::Point => {
            let point = PointF::new(
                required_attribute(cursor, "x")?,
                required_attribute(cursor, "y")?,
            );
            cursor.skip_current()?;
            PropertyValue::Point(point)
        }
        PropertyType::Size => {
            let size = SizeF::new(
                required_attribute(cursor, "w")?,
                required_attribute(cursor, "h")?,
            );
            cursor.skip_current()?;
            PropertyValue::Size(size)
        }
        PropertyType::Scale => {
            let scale = ScaleF::new(
                required_attribute(cursor, "w")?,
                required_attribute(cursor, "h")?,
            );
            cursor.skip_current()?;
            PropertyValue::Scale(scale)
        }
        PropertyType::PairReal => {
            let pair = PairF::new(
                required_attribute(cursor, "first")?,
                required_attribute(cursor, "second")?,
            );
            cursor.skip_current()?;
            PropertyValue::PairReal(pair)
        }
        PropertyType::Color => {
            let color = Color::new(
                required_attribute(cursor, "r")?,
                required_attribute(cursor, "g")?,
                required_attribute(cursor, "b")?,
                optional_attribute(cursor, "a", 255u8)?,
            );
            cursor.skip_current()?;
            PropertyValue::Color(color)
        }
        PropertyType::Duration => {
            let dots: u8 = optional_attribute(cursor, "dots", 0)?;
            if dots > MAX_DOTS {
                let err = invalid(cursor, &dots.to_string(), format!("at most {} dots", MAX_DOTS));
                cursor.skip_current()?;
                return Err(err);
            }
            let text = cursor.read_text()?;
            let duration_type = parse_enum::<DurationType>(cursor, &text, settings)?;
            PropertyValue::Duration(TDuration::with_dots(duration_type, dots))
        }

        PropertyType::OrnamentStyle => read_enum::<OrnamentStyle>(cursor, settings)?,
        PropertyType::GlissandoStyle => read_enum::<GlissandoStyle>(cursor, settings)?,
        PropertyType::Align => read_enum::<Align>(cursor, settings)?,
        PropertyType::PlacementV => read_enum::<PlacementV>(cursor, settings)?,
        PropertyType::PlacementH => read_enum::<PlacementH>(cursor, settings)?,
        PropertyType::DirectionV => read_enum::<DirectionV>(cursor, settings)?,
        PropertyType::DirectionH => read_enum::<DirectionH>(cursor, settings)?,
        PropertyType::BeamMode => read_enum::<BeamMode>(cursor, settings)?,
        PropertyType::LayoutBreakType => read_enum::<LayoutBreakType>(cursor, settings)?,
        PropertyType::VeloType => read_enum::<VeloType>(cursor, settings)?,
        PropertyType::BarlineType => read_enum::<BarlineType>(cursor, settings)?,
        PropertyType::NoteheadType => read_enum::<NoteheadType>(cursor, settings)?,
        PropertyType::SymbolId => read_enum::<SymId>(cursor, settings)?,
        PropertyType::HookType => read_enum::<HookType>(cursor, settings)?,
        PropertyType::DynamicType => read_enum::<DynamicType>(cursor, settings)?,
        PropertyType::AccidentalRole => read_enum::<AccidentalRole>(cursor, settings)?,
    };
    Ok(value)
}

/// A value ready to be written as one element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncodedValue {
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
}

impl EncodedValue {
    fn text(text: impl Into<String>) -> Self {
        Self {
            attributes: Vec::new(),
            text: Some(text.into()),
        }
    }

    fn attributes(attributes: Vec<(&'static str, String)>) -> Self {
        Self {
            attributes,
            text: None,
        }
    }
}

/// Inverse of [`read_value`]
pub fn encode_value(value: &PropertyValue) -> std::result::Result<EncodedValue, WriteError> {
    let encoded = match value {
        PropertyValue::Undefined | PropertyValue::Path(_) | PropertyValue::Groups(_) => {
            return Err(WriteError::UnsupportedType(value.property_type()))
        }

        PropertyValue::Bool(v) => EncodedValue::text(if *v { "1" } else { "0" }),
        PropertyValue::Int(v) => EncodedValue::text(v.to_string()),
        PropertyValue::Real(v) => EncodedValue::text(v.to_string()),
        PropertyValue::String(v) => EncodedValue::text(v.as_str()),
        PropertyValue::Spatium(v) => EncodedValue::text(v.val().to_string()),
        PropertyValue::Millimetre(v) => EncodedValue::text(v.val().to_string()),
        PropertyValue::Fraction(v) => EncodedValue::text(v.to_string()),

        PropertyValue::Point(p) => {
            EncodedValue::attributes(vec![("x", p.x.to_string()), ("y", p.y.to_string())])
        }
        PropertyValue::Size(s) => EncodedValue::attributes(vec![
            ("w", s.width.to_string()),
            ("h", s.height.to_string()),
        ]),
        PropertyValue::Scale(s) => EncodedValue::attributes(vec![
            ("w", s.width.to_string()),
            ("h", s.height.to_string()),
        ]),
        PropertyValue::PairReal(p) => EncodedValue::attributes(vec![
            ("first", p.first.to_string()),
            ("second", p.second.to_string()),
        ]),
        PropertyValue::Color(c) => {
            let mut attributes = vec![
                ("r", c.r.to_string()),
                ("g", c.g.to_string()),
                ("b", c.b.to_string()),
            ];
            if !c.is_opaque() {
                attributes.push(("a", c.a.to_string()));
            }
            EncodedValue::attributes(attributes)
        }
        PropertyValue::Duration(d) => {
            let mut encoded = EncodedValue::text(d.duration_type.xml_name());
            if d.dots > 0 {
                encoded.attributes.push(("dots", d.dots.to_string()));
            }
            encoded
        }

        PropertyValue::OrnamentStyle(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::GlissandoStyle(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::Align(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::PlacementV(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::PlacementH(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::DirectionV(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::DirectionH(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::BeamMode(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::LayoutBreakType(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::VeloType(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::BarlineType(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::NoteheadType(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::SymbolId(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::HookType(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::DynamicType(v) => EncodedValue::text(v.to_xml()),
        PropertyValue::AccidentalRole(v) => EncodedValue::text(v.to_xml()),
    };
    Ok(encoded)
}
