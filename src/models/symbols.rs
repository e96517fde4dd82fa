//! SMuFL symbol identifiers
//!
//! Only the glyphs referenced by the element types in this crate are listed.
//! XML names follow the SMuFL glyph names.

use crate::ordinal_enum;

ordinal_enum! {
    /// Symbol identifier
    pub enum SymId {
        NoSym = 0 => "noSym",

        BarlineSingle = 1 => "barlineSingle",
        BarlineDouble = 2 => "barlineDouble",
        BarlineFinal = 3 => "barlineFinal",
        BarlineReverseFinal = 4 => "barlineReverseFinal",
        BarlineHeavy = 5 => "barlineHeavy",
        BarlineHeavyHeavy = 6 => "barlineHeavyHeavy",
        BarlineDashed = 7 => "barlineDashed",
        BarlineDotted = 8 => "barlineDotted",
        RepeatLeft = 9 => "repeatLeft",
        RepeatRight = 10 => "repeatRight",
        RepeatRightLeft = 11 => "repeatRightLeft",

        Fingering0 = 12 => "fingering0",
        Fingering1 = 13 => "fingering1",
        Fingering2 = 14 => "fingering2",
        Fingering3 = 15 => "fingering3",
        Fingering4 = 16 => "fingering4",
        Fingering5 = 17 => "fingering5",

        DynamicPiano = 18 => "dynamicPiano",
        DynamicMezzo = 19 => "dynamicMezzo",
        DynamicForte = 20 => "dynamicForte",
        DynamicRinforzando = 21 => "dynamicRinforzando",
        DynamicSforzando = 22 => "dynamicSforzando",
        DynamicZ = 23 => "dynamicZ",
        DynamicNiente = 24 => "dynamicNiente",

        NoteheadDoubleWhole = 25 => "noteheadDoubleWhole",
        NoteheadWhole = 26 => "noteheadWhole",
        NoteheadHalf = 27 => "noteheadHalf",
        NoteheadBlack = 28 => "noteheadBlack",

        OrnamentTrill = 29 => "ornamentTrill",
        OrnamentTurn = 30 => "ornamentTurn",
        OrnamentMordent = 31 => "ornamentMordent",
    }
}
