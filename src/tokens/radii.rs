//! Border radius tokens and component shape presets.

token_enum! {
    pub enum Radius in "radius" {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        X2l => "2xl",
        Full => "full",
    }
}

token_enum! {
    /// Corner style preset for components.
    #[derive(Default)]
    pub enum Shape in "shape" {
        Sharp => "sharp",
        #[default]
        Round => "round",
        Pill => "pill",
    }
}

impl Radius {
    pub const fn value(self) -> &'static str {
        match self {
            Radius::None => "0",
            Radius::Sm => "0.25rem",
            Radius::Md => "0.375rem",
            Radius::Lg => "0.5rem",
            Radius::Xl => "0.75rem",
            Radius::X2l => "1rem",
            Radius::Full => "9999px",
        }
    }
}

impl Shape {
    /// The radius step this shape maps to.
    pub const fn radius(self) -> Radius {
        match self {
            Shape::Sharp => Radius::None,
            Shape::Round => Radius::Md,
            Shape::Pill => Radius::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_presets() {
        assert_eq!(Shape::Sharp.radius().value(), "0");
        assert_eq!(Shape::Round.radius().value(), "0.375rem");
        assert_eq!(Shape::Pill.radius().value(), "9999px");
    }

    #[test]
    fn default_shape_is_round() {
        assert_eq!(Shape::default(), Shape::Round);
    }
}
