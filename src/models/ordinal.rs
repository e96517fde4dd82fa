//! Ordinal-backed enumerations
//!
//! Enumeration-like property payloads travel through the interchange layer
//! as plain integers and through documents as XML names. This module holds the
//! shared trait and the macro that generates both mappings.

/// An enumeration with a stable integer ordinal and an XML spelling.
pub trait OrdinalEnum: Copy + Sized {
    /// Human readable type name, used in error messages
    const TYPE_NAME: &'static str;

    /// The integer ordinal of this value
    fn ordinal(self) -> i32;

    /// Look up a value by ordinal, `None` when out of range
    fn from_ordinal(ordinal: i32) -> Option<Self>;

    /// XML spelling of this value
    fn to_xml(self) -> String;

    /// Parse the XML spelling back
    fn from_xml(text: &str) -> Option<Self>;
}

/// Declare an enumeration together with its ordinals and XML names.
///
/// ```ignore
/// ordinal_enum! {
///     /// Vertical placement
///     pub enum PlacementV {
///         Above = 0 => "above",
///         Below = 1 => "below",
///     }
/// }
/// ```
#[macro_export]
macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $ord:literal => $xml:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash,
            serde_repr::Serialize_repr, serde_repr::Deserialize_repr,
        )]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $ord, )+
        }

        impl $name {
            /// All values in declaration order
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// XML spelling without allocating
            pub fn xml_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $xml, )+
                }
            }
        }

        impl $crate::models::ordinal::OrdinalEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn ordinal(self) -> i32 {
                self as i32
            }

            fn from_ordinal(ordinal: i32) -> Option<Self> {
                match ordinal {
                    $( $ord => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn to_xml(self) -> String {
                self.xml_name().to_string()
            }

            fn from_xml(text: &str) -> Option<Self> {
                match text {
                    $( $xml => Some($name::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::OrdinalEnum;

    crate::ordinal_enum! {
        /// Test enumeration with a negative ordinal
        pub enum Sample {
            Invalid = -1 => "invalid",
            First = 0 => "first",
            Second = 1 => "second",
        }
    }

    #[test]
    fn test_ordinal_lookup() {
        assert_eq!(Sample::from_ordinal(-1), Some(Sample::Invalid));
        assert_eq!(Sample::from_ordinal(1), Some(Sample::Second));
        assert_eq!(Sample::from_ordinal(2), None);
        assert_eq!(Sample::Second.ordinal(), 1);
    }

    #[test]
    fn test_xml_names() {
        assert_eq!(Sample::First.to_xml(), "first");
        assert_eq!(Sample::from_xml("second"), Some(Sample::Second));
        assert_eq!(Sample::from_xml("Second"), None);
        assert_eq!(Sample::ALL.len(), 3);
    }
}
