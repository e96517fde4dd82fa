//! Layout related enumerations
//!
//! Placement, direction, alignment and break types. These are stored as
//! enumerations in property values and exchanged as integer ordinals.

use serde::{Deserialize, Serialize};

use super::ordinal::OrdinalEnum;
use crate::ordinal_enum;

ordinal_enum! {
    /// Placement above or below the staff
    pub enum PlacementV {
        Above = 0 => "above",
        Below = 1 => "below",
    }
}

ordinal_enum! {
    /// Horizontal placement relative to the anchor
    pub enum PlacementH {
        Left = 0 => "left",
        Right = 1 => "right",
        Center = 2 => "center",
    }
}

ordinal_enum! {
    /// Stem, slur and tie direction
    pub enum DirectionV {
        Auto = 0 => "auto",
        Up = 1 => "up",
        Down = 2 => "down",
    }
}

ordinal_enum! {
    /// Horizontal direction (note heads, arpeggios)
    pub enum DirectionH {
        Auto = 0 => "auto",
        Left = 1 => "left",
        Right = 2 => "right",
    }
}

ordinal_enum! {
    /// Beaming mode of a chord or rest
    pub enum BeamMode {
        Invalid = -1 => "invalid",
        Auto = 0 => "auto",
        Begin = 1 => "begin",
        Mid = 2 => "mid",
        End = 3 => "end",
        None = 4 => "no",
        Begin32 = 5 => "begin32",
        Begin64 = 6 => "begin64",
    }
}

ordinal_enum! {
    /// Layout break kinds
    pub enum LayoutBreakType {
        Page = 0 => "page",
        Line = 1 => "line",
        Section = 2 => "section",
        NoBreak = 3 => "noBreak",
    }
}

ordinal_enum! {
    /// Horizontal component of an alignment; occupies the low two bits
    pub enum AlignH {
        Left = 0 => "left",
        Right = 1 => "right",
        HCenter = 2 => "center",
    }
}

ordinal_enum! {
    /// Vertical component of an alignment; occupies bits 2..=4
    pub enum AlignV {
        Top = 0 => "top",
        Bottom = 4 => "bottom",
        VCenter = 8 => "center",
        Baseline = 16 => "baseline",
    }
}

const ALIGN_H_MASK: i32 = 0b11;

/// Text alignment, a horizontal and a vertical component packed into one ordinal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Align {
    pub horizontal: AlignH,
    pub vertical: AlignV,
}

impl Align {
    pub fn new(horizontal: AlignH, vertical: AlignV) -> Self {
        Self { horizontal, vertical }
    }
}

impl Default for Align {
    fn default() -> Self {
        Align::new(AlignH::Left, AlignV::Top)
    }
}

impl OrdinalEnum for Align {
    const TYPE_NAME: &'static str = "Align";

    fn ordinal(self) -> i32 {
        self.horizontal.ordinal() | self.vertical.ordinal()
    }

    fn from_ordinal(ordinal: i32) -> Option<Self> {
        let horizontal = AlignH::from_ordinal(ordinal & ALIGN_H_MASK)?;
        let vertical = AlignV::from_ordinal(ordinal & !ALIGN_H_MASK)?;
        Some(Align::new(horizontal, vertical))
    }

    /// Written as `"<horizontal>,<vertical>"`, e.g. `"center,baseline"`
    fn to_xml(self) -> String {
        format!("{},{}", self.horizontal.xml_name(), self.vertical.xml_name())
    }

    fn from_xml(text: &str) -> Option<Self> {
        let (h, v) = text.split_once(',')?;
        Some(Align::new(
            AlignH::from_xml(h.trim())?,
            AlignV::from_xml(v.trim())?,
        ))
    }
}
