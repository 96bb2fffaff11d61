//! Style resolution: component props in, token-sourced declarations out.
//!
//! Each component axis (variant, size, shape, interaction) is a closed enum
//! projected onto a [`StyleBundle`]; the per-component `resolve` merges those
//! bundles in a fixed order. Resolution is pure: the same props always give
//! byte-identical output.

pub mod bundle;
pub mod button;
pub mod declaration;
pub mod input;
pub mod text;

pub use bundle::{FocusScope, InteractionState, StyleBundle};
pub use button::{ButtonProps, ButtonVariant};
pub use declaration::{Declarations, Property};
pub use input::{InputProps, InputStyles};
pub use text::{TextProps, TextTag};

use crate::tokens::token_enum;

token_enum! {
    /// Control size shared by buttons and inputs.
    #[derive(Default)]
    pub enum ControlSize in "size" {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

impl ControlSize {
    /// Minimum control height in CSS pixels.
    pub const fn height_px(self) -> u16 {
        match self {
            ControlSize::Sm => 32,
            ControlSize::Md => 40,
            ControlSize::Lg => 48,
        }
    }

    /// `min-height` / `height` value, e.g. `40px`.
    pub fn height(self) -> String {
        format!("{}px", self.height_px())
    }
}

/// Props that resolve to a style.
pub trait Resolve {
    /// The resolved style type.
    type Output;

    fn resolve(&self) -> Self::Output;
}
