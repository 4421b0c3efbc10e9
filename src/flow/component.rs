use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Master macro defining the built-in component kinds and their type-tag mapping.
///
/// Every kind listed here is one the platform rejects an `id` on. Anything else
/// lands in `ComponentKind::Other` and is forwarded untouched.
macro_rules! define_component_kinds {
    ( $( ($variant:ident, $type_tag:literal) ),* $(,)? ) => {
        /// The `type` tag of a layout component.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum ComponentKind {
            $( $variant, )*
            /// Any type tag not known to this crate, kept verbatim.
            Other(String),
        }

        impl ComponentKind {
            /// All built-in kinds, in declaration order.
            pub const BUILT_IN: &'static [ComponentKind] = &[ $( ComponentKind::$variant, )* ];

            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $( $type_tag => ComponentKind::$variant, )*
                    other => ComponentKind::Other(other.to_string()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( ComponentKind::$variant => $type_tag, )*
                    ComponentKind::Other(tag) => tag.as_str(),
                }
            }

            /// Whether the platform schema forbids an `id` attribute on this kind.
            pub fn suppresses_id(&self) -> bool {
                !matches!(self, ComponentKind::Other(_))
            }
        }
    };
}

define_component_kinds! {
    (TextHeading, "TextHeading"),
    (TextSubheading, "TextSubheading"),
    (TextBody, "TextBody"),
    (TextCaption, "TextCaption"),
    (TextInput, "TextInput"),
    (TextArea, "TextArea"),
    (Dropdown, "Dropdown"),
    (RadioButtonsGroup, "RadioButtonsGroup"),
    (CheckboxGroup, "CheckboxGroup"),
    (DatePicker, "DatePicker"),
    (Image, "Image"),
    (Footer, "Footer"),
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ComponentKind::from_tag(&tag))
    }
}
