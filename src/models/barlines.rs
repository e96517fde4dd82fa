//! Barline types
//!
//! Barline subtypes are bit flags in the file format, so the ordinals are
//! powers of two rather than a dense range.

use super::symbols::SymId;
use crate::ordinal_enum;

ordinal_enum! {
    /// Barline subtype
    pub enum BarlineType {
        Normal = 1 => "normal",            // |
        Double = 2 => "double",            // ||
        StartRepeat = 4 => "start-repeat", // |:
        EndRepeat = 8 => "end-repeat",     // :|
        Broken = 16 => "dashed",
        End = 32 => "end",                 // |||
        EndStartRepeat = 64 => "end-start-repeat",
        Dotted = 128 => "dotted",
        ReverseEnd = 256 => "reverse-end",
        Heavy = 512 => "heavy",
        DoubleHeavy = 1024 => "double-heavy",
    }
}

impl BarlineType {
    /// Parse barline from its ASCII shorthand
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "|" => Some(BarlineType::Normal),
            "||" => Some(BarlineType::Double),
            "|:" => Some(BarlineType::StartRepeat),
            ":|" => Some(BarlineType::EndRepeat),
            "|||" => Some(BarlineType::End),
            ":|:" => Some(BarlineType::EndStartRepeat),
            _ => None,
        }
    }

    /// SMuFL glyph drawn for this barline
    pub fn symbol(&self) -> SymId {
        match self {
            BarlineType::Normal => SymId::BarlineSingle,
            BarlineType::Double => SymId::BarlineDouble,
            BarlineType::StartRepeat => SymId::RepeatLeft,
            BarlineType::EndRepeat => SymId::RepeatRight,
            BarlineType::Broken => SymId::BarlineDashed,
            BarlineType::End => SymId::BarlineFinal,
            BarlineType::EndStartRepeat => SymId::RepeatRightLeft,
            BarlineType::Dotted => SymId::BarlineDotted,
            BarlineType::ReverseEnd => SymId::BarlineReverseFinal,
            BarlineType::Heavy => SymId::BarlineHeavy,
            BarlineType::DoubleHeavy => SymId::BarlineHeavyHeavy,
        }
    }

    /// Repeat barlines carry dots and affect playback
    pub fn is_repeat(&self) -> bool {
        matches!(
            self,
            BarlineType::StartRepeat | BarlineType::EndRepeat | BarlineType::EndStartRepeat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ordinal::OrdinalEnum;

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(BarlineType::parse("|:"), Some(BarlineType::StartRepeat));
        assert_eq!(BarlineType::parse("|||"), Some(BarlineType::End));
        assert_eq!(BarlineType::parse("|x"), None);
    }

    #[test]
    fn test_flag_ordinals() {
        assert_eq!(BarlineType::End.ordinal(), 0x20);
        assert_eq!(BarlineType::from_ordinal(3), None);
        assert_eq!(BarlineType::from_ordinal(0x400), Some(BarlineType::DoubleHeavy));
    }

    #[test]
    fn test_symbol() {
        assert_eq!(BarlineType::EndRepeat.symbol(), SymId::RepeatRight);
        assert!(BarlineType::EndStartRepeat.is_repeat());
        assert!(!BarlineType::Double.is_repeat());
    }
}
