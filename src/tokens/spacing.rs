//! Spacing tokens on an 8px-based scale, plus per-component padding presets.

token_enum! {
    /// A step on the spacing scale.
    pub enum Spacing in "spacing" {
        None => "none",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        X2l => "2xl",
        X3l => "3xl",
        X4l => "4xl",
        X5l => "5xl",
    }
}

impl Spacing {
    /// The rem length for this step.
    pub const fn value(self) -> &'static str {
        match self {
            Spacing::None => "0",
            Spacing::Xs => "0.25rem",
            Spacing::Sm => "0.5rem",
            Spacing::Md => "1rem",
            Spacing::Lg => "1.5rem",
            Spacing::Xl => "2rem",
            Spacing::X2l => "3rem",
            Spacing::X3l => "4rem",
            Spacing::X4l => "6rem",
            Spacing::X5l => "8rem",
        }
    }
}

/// A `vertical horizontal` padding pair built from two spacing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub vertical: Spacing,
    pub horizontal: Spacing,
}

impl Padding {
    pub const fn new(vertical: Spacing, horizontal: Spacing) -> Self {
        Self { vertical, horizontal }
    }

    /// CSS shorthand, e.g. `0.5rem 1rem`.
    pub fn css(self) -> String {
        format!("{} {}", self.vertical.value(), self.horizontal.value())
    }
}

/// Control padding shared by buttons and inputs, indexed by control size.
pub mod control {
    use super::{Padding, Spacing};

    pub const SM: Padding = Padding::new(Spacing::Xs, Spacing::Sm);
    pub const MD: Padding = Padding::new(Spacing::Sm, Spacing::Md);
    pub const LG: Padding = Padding::new(Spacing::Md, Spacing::Lg);
}

/// Card layout spacing.
pub mod card {
    use super::Spacing;

    pub const PADDING: Spacing = Spacing::Lg;
    pub const GAP: Spacing = Spacing::Md;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_values() {
        assert_eq!(Spacing::None.value(), "0");
        assert_eq!(Spacing::Md.value(), "1rem");
        assert_eq!(Spacing::X2l.value(), "3rem");
    }

    #[test]
    fn two_xl_key_parses() {
        assert_eq!("2xl".parse::<Spacing>(), Ok(Spacing::X2l));
        assert_eq!(Spacing::X5l.key(), "5xl");
    }

    #[test]
    fn control_padding_shorthand() {
        assert_eq!(control::SM.css(), "0.25rem 0.5rem");
        assert_eq!(control::MD.css(), "0.5rem 1rem");
        assert_eq!(control::LG.css(), "1rem 1.5rem");
    }
}
