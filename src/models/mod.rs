//! Domain payload types
//!
//! Every value a `PropertyValue` can hold lives here: geometry, units,
//! colours, durations and the ordinal-backed enumerations, plus the element
//! model the document reader populates.

pub mod ordinal;

pub mod barlines;
pub mod color;
pub mod duration;
pub mod elements;
pub mod fraction;
pub mod geometry;
pub mod groups;
pub mod layout;
pub mod style;
pub mod symbols;
pub mod units;

// Re-export commonly used types
pub use barlines::BarlineType;
pub use color::Color;
pub use duration::{DurationType, TDuration, MAX_DOTS};
pub use elements::{ElementType, Item};
pub use fraction::Fraction;
pub use geometry::{PainterPath, PairF, PathElement, PathElementKind, PointF, ScaleF, SizeF};
pub use groups::{GroupNode, Groups};
pub use layout::{
    Align, AlignH, AlignV, BeamMode, DirectionH, DirectionV, LayoutBreakType, PlacementH,
    PlacementV,
};
pub use ordinal::OrdinalEnum;
pub use style::{
    AccidentalRole, DynamicType, GlissandoStyle, HookType, NoteheadType, OrnamentStyle, VeloType,
};
pub use symbols::SymId;
pub use units::{Millimetre, Spatium};
