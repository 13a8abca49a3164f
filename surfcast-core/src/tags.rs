//! Stable string tags shared by the categorical enums.
//!
//! Every categorical value crosses the process boundary as a lowercase,
//! kebab-case tag. The presentation layer uses these tags as localisation
//! keys, so they must never change once published.

use thiserror::Error;

/// Error returned when parsing a tag that no variant recognises.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use surfcast_core::ConditionTag;
///
/// let err = ConditionTag::from_str("glassy").unwrap_err();
/// assert_eq!(err.kind, "ConditionTag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownTag {
    /// Name of the enum that rejected the value.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Declare a fieldless enum whose variants map one-to-one onto stable tags.
///
/// Generates `as_str`, `Display`, `FromStr` (case-insensitive, trimmed) and,
/// behind the `serde` feature, serialisation as the tag string.
macro_rules! tag_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$inner:meta])*
                $variant:ident => $tag:literal,
            )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$inner])*
                #[cfg_attr(feature = "serde", serde(rename = $tag))]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the stable tag for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::tags::UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($tag => Ok(Self::$variant),)+
                    _ => Err($crate::tags::UnknownTag {
                        kind: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use tag_enum;
