//! Design tokens: the single source of truth for every visual value.
//!
//! Tokens are grouped by category (colors, spacing, typography, radii,
//! interaction, shadows). Every category is keyed by a closed enum, so a
//! resolver can only ask for keys that exist. Dynamic callers (string keys,
//! dotted paths) go through [`FromStr`](std::str::FromStr) or [`lookup`] and
//! get a [`TokenError`] for anything outside the declared enumeration.

use std::fmt;

/// Declare a closed token enumeration with its string keys.
///
/// Generates the enum, `ALL`, `key()`, `Display` and a `FromStr` impl that
/// rejects unknown keys with [`TokenError::UnknownKey`].
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $category:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string key of this member.
            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::tokens::TokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err($crate::tokens::TokenError::UnknownKey {
                        category: $category,
                        key: other.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use token_enum;

pub mod colors;
pub mod interaction;
pub mod path;
pub mod radii;
pub mod shadows;
pub mod spacing;
pub mod typography;

pub use colors::{Hue, Scale};
pub use interaction::{Animation, Duration, Easing, Interaction, Transition};
pub use path::lookup;
pub use radii::{Radius, Shape};
pub use shadows::Shadow;
pub use spacing::Spacing;
pub use typography::{FontFamily, FontSize, FontWeight, LetterSpacing, LineHeight, TypographyPreset};

// ---------------------------------------------------------------------------
// TokenError
// ---------------------------------------------------------------------------

/// Errors from dynamic token access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("unknown {category} key: `{key}`")]
    UnknownKey { category: &'static str, key: String },
    #[error("unknown token category: `{0}`")]
    UnknownCategory(String),
    #[error("incomplete token path `{path}`: expected {expected}")]
    Incomplete { path: String, expected: &'static str },
    #[error("invalid token path `{path}`: {message}")]
    InvalidPath { path: String, message: String },
}

// ---------------------------------------------------------------------------
// TokenValue
// ---------------------------------------------------------------------------

/// A literal token value: a string (colors, lengths, durations), a font
/// weight, or a unitless ratio (line heights).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    Text(&'static str),
    Weight(u16),
    Ratio(f32),
}

impl TokenValue {
    /// The string value, if this is a text token.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Weight(w) => write!(f, "{w}"),
            TokenValue::Ratio(r) => write!(f, "{r}"),
        }
    }
}
