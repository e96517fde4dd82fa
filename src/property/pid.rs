//! Property identifiers
//!
//! Each `Pid` names one property an element can carry, declares the tag its
//! values are stored under and its default.

use serde::{Deserialize, Serialize};

use super::types::PropertyType;
use super::value::PropertyValue;
use crate::models::{
    Align, AlignH, AlignV, BarlineType, Color, DynamicType, PlacementV, PointF, Spatium,
    VeloType,
};

/// Which element family declares a property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PidGroup {
    /// Every engraving item
    Item,
    /// Text-like items
    Text,
    Dynamic,
    BarLine,
}

/// Property identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pid {
    // Engraving item
    Color,
    Visible,
    Offset,
    Placement,
    Autoplace,
    MinDistance,

    // Text
    Text,
    FontFace,
    FontSize,
    FontBold,
    Align,

    // Dynamic
    DynamicType,
    Velocity,
    VeloChangeType,

    // Barline
    BarlineType,
    BarlineSpan,
    BarlineSpanFrom,
    BarlineSpanTo,
}

impl Pid {
    pub const ALL: [Pid; 18] = [
        Pid::Color,
        Pid::Visible,
        Pid::Offset,
        Pid::Placement,
        Pid::Autoplace,
        Pid::MinDistance,
        Pid::Text,
        Pid::FontFace,
        Pid::FontSize,
        Pid::FontBold,
        Pid::Align,
        Pid::DynamicType,
        Pid::Velocity,
        Pid::VeloChangeType,
        Pid::BarlineType,
        Pid::BarlineSpan,
        Pid::BarlineSpanFrom,
        Pid::BarlineSpanTo,
    ];

    /// Element name used in documents. Not unique across element families:
    /// dynamics and barlines both store their kind as `subtype`.
    pub fn xml_name(self) -> &'static str {
        match self {
            Pid::Color => "color",
            Pid::Visible => "visible",
            Pid::Offset => "offset",
            Pid::Placement => "placement",
            Pid::Autoplace => "autoplace",
            Pid::MinDistance => "minDistance",
            Pid::Text => "text",
            Pid::FontFace => "family",
            Pid::FontSize => "size",
            Pid::FontBold => "bold",
            Pid::Align => "align",
            Pid::DynamicType => "subtype",
            Pid::Velocity => "velocity",
            Pid::VeloChangeType => "veloType",
            Pid::BarlineType => "subtype",
            Pid::BarlineSpan => "span",
            Pid::BarlineSpanFrom => "spanFromOffset",
            Pid::BarlineSpanTo => "spanToOffset",
        }
    }

    /// The tag values of this property are stored under
    pub fn value_type(self) -> PropertyType {
        match self {
            Pid::Color => PropertyType::Color,
            Pid::Visible | Pid::Autoplace | Pid::FontBold | Pid::BarlineSpan => PropertyType::Bool,
            Pid::Offset => PropertyType::Point,
            Pid::Placement => PropertyType::PlacementV,
            Pid::MinDistance => PropertyType::Spatium,
            Pid::Text | Pid::FontFace => PropertyType::String,
            Pid::FontSize => PropertyType::Real,
            Pid::Align => PropertyType::Align,
            Pid::DynamicType => PropertyType::DynamicType,
            Pid::Velocity | Pid::BarlineSpanFrom | Pid::BarlineSpanTo => PropertyType::Int,
            Pid::VeloChangeType => PropertyType::VeloType,
            Pid::BarlineType => PropertyType::BarlineType,
        }
    }

    pub fn default_value(self) -> PropertyValue {
        match self {
            Pid::Color => Color::BLACK.into(),
            Pid::Visible | Pid::Autoplace => true.into(),
            Pid::Offset => PointF::default().into(),
            Pid::Placement => PlacementV::Above.into(),
            Pid::MinDistance => Spatium(0.5).into(),
            Pid::Text => "".into(),
            Pid::FontFace => "Edwin".into(),
            Pid::FontSize => 10.0_f64.into(),
            Pid::FontBold | Pid::BarlineSpan => false.into(),
            Pid::Align => Align::new(AlignH::Left, AlignV::Baseline).into(),
            Pid::DynamicType => DynamicType::Other.into(),
            Pid::Velocity => (-1_i32).into(),
            Pid::VeloChangeType => VeloType::OffsetVal.into(),
            Pid::BarlineType => BarlineType::Normal.into(),
            Pid::BarlineSpanFrom | Pid::BarlineSpanTo => 0_i32.into(),
        }
    }

    pub fn group(self) -> PidGroup {
        match self {
            Pid::Color
            | Pid::Visible
            | Pid::Offset
            | Pid::Placement
            | Pid::Autoplace
            | Pid::MinDistance => PidGroup::Item,
            Pid::Text | Pid::FontFace | Pid::FontSize | Pid::FontBold | Pid::Align => {
                PidGroup::Text
            }
            Pid::DynamicType | Pid::Velocity | Pid::VeloChangeType => PidGroup::Dynamic,
            Pid::BarlineType | Pid::BarlineSpan | Pid::BarlineSpanFrom | Pid::BarlineSpanTo => {
                PidGroup::BarLine
            }
        }
    }
}
