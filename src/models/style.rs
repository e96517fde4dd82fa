//! Engraving style enumerations
//!
//! Ornament, glissando, note head, hook, dynamic and accidental kinds.

use crate::ordinal_enum;

ordinal_enum! {
    /// How ornaments are interpreted on playback
    pub enum OrnamentStyle {
        Default = 0 => "default",
        Baroque = 1 => "baroque",
    }
}

ordinal_enum! {
    /// Glissando playback style
    pub enum GlissandoStyle {
        Chromatic = 0 => "Chromatic",
        WhiteKeys = 1 => "WhiteKeys",
        BlackKeys = 2 => "BlackKeys",
        Diatonic = 3 => "Diatonic",
        Portamento = 4 => "Portamento",
    }
}

ordinal_enum! {
    /// Whether a velocity is an offset or an absolute user value
    pub enum VeloType {
        OffsetVal = 0 => "offset",
        UserVal = 1 => "user",
    }
}

ordinal_enum! {
    /// Note head shape override
    pub enum NoteheadType {
        Auto = -1 => "auto",
        Whole = 0 => "whole",
        Half = 1 => "half",
        Quarter = 2 => "quarter",
        Breve = 3 => "breve",
    }
}

ordinal_enum! {
    /// End hook of a line
    pub enum HookType {
        None = 0 => "none",
        Hook90 = 1 => "hook90",
        Hook45 = 2 => "hook45",
        Hook90T = 3 => "hook90T",
    }
}

ordinal_enum! {
    /// Dynamic marking subtype
    pub enum DynamicType {
        Other = 0 => "other",
        Pppppp = 1 => "pppppp",
        Ppppp = 2 => "ppppp",
        Pppp = 3 => "pppp",
        Ppp = 4 => "ppp",
        Pp = 5 => "pp",
        P = 6 => "p",
        Mp = 7 => "mp",
        Mf = 8 => "mf",
        F = 9 => "f",
        Ff = 10 => "ff",
        Fff = 11 => "fff",
        Ffff = 12 => "ffff",
        Fffff = 13 => "fffff",
        Ffffff = 14 => "ffffff",
        Fp = 15 => "fp",
        Pf = 16 => "pf",
        Sf = 17 => "sf",
        Sfz = 18 => "sfz",
        Sff = 19 => "sff",
        Sffz = 20 => "sffz",
        Sfp = 21 => "sfp",
        Sfpp = 22 => "sfpp",
        Rfz = 23 => "rfz",
        Rf = 24 => "rf",
        Fz = 25 => "fz",
        M = 26 => "m",
        R = 27 => "r",
        S = 28 => "s",
        Z = 29 => "z",
        N = 30 => "n",
    }
}

impl DynamicType {
    /// Default MIDI velocity for the marking, `None` for markings that only
    /// modify the current level (accents, letters)
    pub fn velocity(self) -> Option<i32> {
        let velocity = match self {
            DynamicType::Pppppp => 1,
            DynamicType::Ppppp => 5,
            DynamicType::Pppp => 10,
            DynamicType::Ppp => 16,
            DynamicType::Pp => 33,
            DynamicType::P => 49,
            DynamicType::Mp => 64,
            DynamicType::Mf => 80,
            DynamicType::F => 96,
            DynamicType::Ff => 112,
            DynamicType::Fff => 126,
            DynamicType::Ffff | DynamicType::Fffff | DynamicType::Ffffff => 127,
            DynamicType::Fp | DynamicType::Sf | DynamicType::Sfz => 96,
            DynamicType::Pf => 49,
            DynamicType::Sff | DynamicType::Sffz => 112,
            DynamicType::Sfp | DynamicType::Sfpp => 112,
            DynamicType::Rfz | DynamicType::Rf | DynamicType::Fz => 112,
            DynamicType::Other
            | DynamicType::M
            | DynamicType::R
            | DynamicType::S
            | DynamicType::Z
            | DynamicType::N => return None,
        };
        Some(velocity)
    }
}

ordinal_enum! {
    /// Whether an accidental was placed automatically or by the user
    pub enum AccidentalRole {
        Auto = 0 => "0",
        User = 1 => "1",
    }
}
