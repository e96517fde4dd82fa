//! Property type tags

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Identifies which payload a `PropertyValue` holds.
///
/// Every tag except `Undefined` corresponds to exactly one payload type.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr,
)]
pub enum PropertyType {
    Undefined = 0,

    // Base
    Bool = 1,
    Int = 2,
    Real = 3,
    String = 4,

    // Geometry
    Point = 5,
    Size = 6,
    Path = 7,
    Scale = 8,
    Spatium = 9,
    Millimetre = 10,
    PairReal = 11,

    // Draw
    Color = 12,
    OrnamentStyle = 13,
    GlissandoStyle = 14,

    // Layout
    Align = 15,
    PlacementV = 16,
    PlacementH = 17,
    DirectionV = 18,
    DirectionH = 19,
    BeamMode = 20,

    // Duration
    Fraction = 21,
    Duration = 22,

    // Types
    LayoutBreakType = 23,
    VeloType = 24,
    BarlineType = 25,
    NoteheadType = 26,

    // Other
    SymbolId = 27,
    HookType = 28,
    DynamicType = 29,
    AccidentalRole = 30,
    Groups = 31,
}

impl PropertyType {
    /// Every tag, in ordinal order
    pub const ALL: [PropertyType; 32] = [
        PropertyType::Undefined,
        PropertyType::Bool,
        PropertyType::Int,
        PropertyType::Real,
        PropertyType::String,
        PropertyType::Point,
        PropertyType::Size,
        PropertyType::Path,
        PropertyType::Scale,
        PropertyType::Spatium,
        PropertyType::Millimetre,
        PropertyType::PairReal,
        PropertyType::Color,
        PropertyType::OrnamentStyle,
        PropertyType::GlissandoStyle,
        PropertyType::Align,
        PropertyType::PlacementV,
        PropertyType::PlacementH,
        PropertyType::DirectionV,
        PropertyType::DirectionH,
        PropertyType::BeamMode,
        PropertyType::Fraction,
        PropertyType::Duration,
        PropertyType::LayoutBreakType,
        PropertyType::VeloType,
        PropertyType::BarlineType,
        PropertyType::NoteheadType,
        PropertyType::SymbolId,
        PropertyType::HookType,
        PropertyType::DynamicType,
        PropertyType::AccidentalRole,
        PropertyType::Groups,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyType::Undefined => "Undefined",
            PropertyType::Bool => "Bool",
            PropertyType::Int => "Int",
            PropertyType::Real => "Real",
            PropertyType::String => "String",
            PropertyType::Point => "Point",
            PropertyType::Size => "Size",
            PropertyType::Path => "Path",
            PropertyType::Scale => "Scale",
            PropertyType::Spatium => "Spatium",
            PropertyType::Millimetre => "Millimetre",
            PropertyType::PairReal => "PairReal",
            PropertyType::Color => "Color",
            PropertyType::OrnamentStyle => "OrnamentStyle",
            PropertyType::GlissandoStyle => "GlissandoStyle",
            PropertyType::Align => "Align",
            PropertyType::PlacementV => "PlacementV",
            PropertyType::PlacementH => "PlacementH",
            PropertyType::DirectionV => "DirectionV",
            PropertyType::DirectionH => "DirectionH",
            PropertyType::BeamMode => "BeamMode",
            PropertyType::Fraction => "Fraction",
            PropertyType::Duration => "Duration",
            PropertyType::LayoutBreakType => "LayoutBreakType",
            PropertyType::VeloType => "VeloType",
            PropertyType::BarlineType => "BarlineType",
            PropertyType::NoteheadType => "NoteheadType",
            PropertyType::SymbolId => "SymbolId",
            PropertyType::HookType => "HookType",
            PropertyType::DynamicType => "DynamicType",
            PropertyType::AccidentalRole => "AccidentalRole",
            PropertyType::Groups => "Groups",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (index, tag) in PropertyType::ALL.iter().enumerate() {
            assert_eq!(*tag as usize, index);
        }
    }

    #[test]
    fn test_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&PropertyType::Spatium).unwrap(), "9");
        let tag: PropertyType = serde_json::from_str("21").unwrap();
        assert_eq!(tag, PropertyType::Fraction);
    }
}
