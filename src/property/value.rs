//! The typed property value
//!
//! `PropertyValue` is a closed sum type over every payload the property
//! system knows about. The tag is the variant, so a value can never hold a
//! payload that disagrees with its `property_type()`.
//!
//! Accessors come in two flavours:
//!
//! - `as_x()` is checked and returns `None` on a tag mismatch.
//! - `to_x()` is the unchecked form. Calling it on the wrong tag is a caller
//!   bug; it panics with a contract message instead of returning garbage.
//!
//! `value::<T>()` performs the same numeric coercions the equality policy
//! uses (bool/int/enum/real bridging), see [`super::equality`].

use serde::{Deserialize, Serialize};

use super::types::PropertyType;
use crate::models::{
    AccidentalRole, Align, BarlineType, BeamMode, Color, DirectionH, DirectionV, DynamicType,
    Fraction, GlissandoStyle, Groups, HookType, LayoutBreakType, Millimetre, NoteheadType,
    OrdinalEnum, OrnamentStyle, PainterPath, PairF, PlacementH, PlacementV, PointF, ScaleF,
    SizeF, Spatium, SymId, TDuration, VeloType,
};

/// A dynamically typed property value holding one of the domain payloads
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum PropertyValue {
    #[default]
    Undefined,

    // Base
    Bool(bool),
    Int(i32),
    Real(f64),
    String(String),

    // Geometry
    Point(PointF),
    Size(SizeF),
    Path(PainterPath),
    Scale(ScaleF),
    Spatium(Spatium),
    Millimetre(Millimetre),
    PairReal(PairF),

    // Draw
    Color(Color),
    OrnamentStyle(OrnamentStyle),
    GlissandoStyle(GlissandoStyle),

    // Layout
    Align(Align),
    PlacementV(PlacementV),
    PlacementH(PlacementH),
    DirectionV(DirectionV),
    DirectionH(DirectionH),
    BeamMode(BeamMode),

    // Duration
    Fraction(Fraction),
    Duration(TDuration),

    // Types
    LayoutBreakType(LayoutBreakType),
    VeloType(VeloType),
    BarlineType(BarlineType),
    NoteheadType(NoteheadType),

    // Other
    SymbolId(SymId),
    HookType(HookType),
    DynamicType(DynamicType),
    AccidentalRole(AccidentalRole),
    Groups(Groups),
}

#[cold]
#[track_caller]
fn contract_violation(expected: PropertyType, found: PropertyType) -> ! {
    panic!(
        "PropertyValue contract violation: accessed as {} but holds {}",
        expected, found
    )
}

macro_rules! payload_accessors {
    ($( $variant:ident($ty:ty) => $as_fn:ident, $to_fn:ident; )+) => {
        impl PropertyValue {
            $(
                #[doc = concat!(
                    "The `", stringify!($variant), "` payload, or `None` for any other tag"
                )]
                pub fn $as_fn(&self) -> Option<&$ty> {
                    match self {
                        PropertyValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                #[doc = concat!(
                    "The `", stringify!($variant), "` payload; panics on any other tag"
                )]
                #[track_caller]
                pub fn $to_fn(&self) -> $ty {
                    match self {
                        PropertyValue::$variant(v) => v.clone(),
                        other => contract_violation(PropertyType::$variant, other.property_type()),
                    }
                }
            )+

            /// The tag of the payload currently held
            pub fn property_type(&self) -> PropertyType {
                match self {
                    PropertyValue::Undefined => PropertyType::Undefined,
                    $( PropertyValue::$variant(_) => PropertyType::$variant, )+
                }
            }
        }

        $(
            impl From<$ty> for PropertyValue {
                fn from(v: $ty) -> Self {
                    PropertyValue::$variant(v)
                }
            }
        )+
    };
}

payload_accessors! {
    Bool(bool) => as_bool, to_bool;
    Int(i32) => as_int, to_int;
    Real(f64) => as_real, to_real;
    String(String) => as_string, to_string_value;
    Point(PointF) => as_point, to_point;
    Size(SizeF) => as_size, to_size;
    Path(PainterPath) => as_path, to_path;
    Scale(ScaleF) => as_scale, to_scale;
    Spatium(Spatium) => as_spatium, to_spatium;
    Millimetre(Millimetre) => as_millimetre, to_millimetre;
    PairReal(PairF) => as_pair_real, to_pair_real;
    Color(Color) => as_color, to_color;
    OrnamentStyle(OrnamentStyle) => as_ornament_style, to_ornament_style;
    GlissandoStyle(GlissandoStyle) => as_glissando_style, to_glissando_style;
    Align(Align) => as_align, to_align;
    PlacementV(PlacementV) => as_placement_v, to_placement_v;
    PlacementH(PlacementH) => as_placement_h, to_placement_h;
    DirectionV(DirectionV) => as_direction_v, to_direction_v;
    DirectionH(DirectionH) => as_direction_h, to_direction_h;
    BeamMode(BeamMode) => as_beam_mode, to_beam_mode;
    Fraction(Fraction) => as_fraction, to_fraction;
    Duration(TDuration) => as_duration, to_duration;
    LayoutBreakType(LayoutBreakType) => as_layout_break_type, to_layout_break_type;
    VeloType(VeloType) => as_velo_type, to_velo_type;
    BarlineType(BarlineType) => as_barline_type, to_barline_type;
    NoteheadType(NoteheadType) => as_notehead_type, to_notehead_type;
    SymbolId(SymId) => as_symbol_id, to_symbol_id;
    HookType(HookType) => as_hook_type, to_hook_type;
    DynamicType(DynamicType) => as_dynamic_type, to_dynamic_type;
    AccidentalRole(AccidentalRole) => as_accidental_role, to_accidental_role;
    Groups(Groups) => as_groups, to_groups;
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl PropertyValue {
    /// `false` only for the `Undefined` value
    pub fn is_valid(&self) -> bool {
        !matches!(self, PropertyValue::Undefined)
    }

    /// Integer ordinal of an enumeration payload
    pub fn enum_ordinal(&self) -> Option<i32> {
        let ordinal = match self {
            PropertyValue::OrnamentStyle(v) => v.ordinal(),
            PropertyValue::GlissandoStyle(v) => v.ordinal(),
            PropertyValue::Align(v) => v.ordinal(),
            PropertyValue::PlacementV(v) => v.ordinal(),
            PropertyValue::PlacementH(v) => v.ordinal(),
            PropertyValue::DirectionV(v) => v.ordinal(),
            PropertyValue::DirectionH(v) => v.ordinal(),
            PropertyValue::BeamMode(v) => v.ordinal(),
            PropertyValue::LayoutBreakType(v) => v.ordinal(),
            PropertyValue::VeloType(v) => v.ordinal(),
            PropertyValue::BarlineType(v) => v.ordinal(),
            PropertyValue::NoteheadType(v) => v.ordinal(),
            PropertyValue::SymbolId(v) => v.ordinal(),
            PropertyValue::HookType(v) => v.ordinal(),
            PropertyValue::DynamicType(v) => v.ordinal(),
            PropertyValue::AccidentalRole(v) => v.ordinal(),
            _ => return None,
        };
        Some(ordinal)
    }

    /// Truthiness of any numeric or enumeration payload
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            PropertyValue::Int(v) => Some(*v != 0),
            PropertyValue::Real(v) => Some(*v != 0.0),
            PropertyValue::Spatium(v) => Some(v.val() != 0.0),
            PropertyValue::Millimetre(v) => Some(v.val() != 0.0),
            other => other.enum_ordinal().map(|o| o != 0),
        }
    }

    /// Integer view of bool, int and enumeration payloads
    pub fn coerce_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Bool(v) => Some(i32::from(*v)),
            PropertyValue::Int(v) => Some(*v),
            other => other.enum_ordinal(),
        }
    }

    /// Floating point view of real, unit and integer payloads
    pub fn coerce_real(&self) -> Option<f64> {
        match self {
            PropertyValue::Real(v) => Some(*v),
            PropertyValue::Spatium(v) => Some(v.val()),
            PropertyValue::Millimetre(v) => Some(v.val()),
            PropertyValue::Int(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    /// Read the payload as `T`, applying the numeric coercions of the
    /// equality policy for `bool`, `i32` and `f64`
    pub fn value<T: PropertyPayload>(&self) -> Option<T> {
        T::from_property(self)
    }
}

/// A Rust type that can be read out of a `PropertyValue`
pub trait PropertyPayload: Sized {
    /// The tag a value of this type is stored under
    const TYPE: PropertyType;

    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl PropertyPayload for bool {
    const TYPE: PropertyType = PropertyType::Bool;

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.coerce_bool()
    }
}

impl PropertyPayload for i32 {
    const TYPE: PropertyType = PropertyType::Int;

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.coerce_int()
    }
}

impl PropertyPayload for f64 {
    const TYPE: PropertyType = PropertyType::Real;

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.coerce_real()
    }
}

macro_rules! strict_payload {
    ($( $variant:ident($ty:ty) => $as_fn:ident; )+) => {
        $(
            impl PropertyPayload for $ty {
                const TYPE: PropertyType = PropertyType::$variant;

                fn from_property(value: &PropertyValue) -> Option<Self> {
                    value.$as_fn().cloned()
                }
            }
        )+
    };
}

strict_payload! {
    String(String) => as_string;
    Point(PointF) => as_point;
    Size(SizeF) => as_size;
    Path(PainterPath) => as_path;
    Scale(ScaleF) => as_scale;
    Spatium(Spatium) => as_spatium;
    Millimetre(Millimetre) => as_millimetre;
    PairReal(PairF) => as_pair_real;
    Color(Color) => as_color;
    OrnamentStyle(OrnamentStyle) => as_ornament_style;
    GlissandoStyle(GlissandoStyle) => as_glissando_style;
    Align(Align) => as_align;
    PlacementV(PlacementV) => as_placement_v;
    PlacementH(PlacementH) => as_placement_h;
    DirectionV(DirectionV) => as_direction_v;
    DirectionH(DirectionH) => as_direction_h;
    BeamMode(BeamMode) => as_beam_mode;
    Fraction(Fraction) => as_fraction;
    Duration(TDuration) => as_duration;
    LayoutBreakType(LayoutBreakType) => as_layout_break_type;
    VeloType(VeloType) => as_velo_type;
    BarlineType(BarlineType) => as_barline_type;
    NoteheadType(NoteheadType) => as_notehead_type;
    SymbolId(SymId) => as_symbol_id;
    HookType(HookType) => as_hook_type;
    DynamicType(DynamicType) => as_dynamic_type;
    AccidentalRole(AccidentalRole) => as_accidental_role;
    Groups(Groups) => as_groups;
}
