//! Flat style declarations: one value per property.
//!
//! [`Declarations`] is the resolver's output unit. Properties are a closed
//! enum, so a declaration can never hold two values for the same property,
//! and iteration order is the enum's declaration order (stable output).

use std::collections::BTreeMap;
use std::fmt;

/// Every CSS property the resolver emits, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    // Box & layout
    Display,
    FlexDirection,
    AlignItems,
    JustifyContent,
    Flex,
    FlexShrink,
    Gap,
    Width,
    Height,
    MinHeight,
    Padding,
    Margin,

    // Typography
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    WhiteSpace,

    // Paint
    Background,
    Color,
    Border,
    BorderColor,
    BorderRadius,
    Outline,
    BoxShadow,
    Opacity,
    Cursor,

    // Motion
    Transition,
    Transform,
    Animation,
}

impl Property {
    /// The CSS property name.
    pub const fn css_name(self) -> &'static str {
        match self {
            Property::Display => "display",
            Property::FlexDirection => "flex-direction",
            Property::AlignItems => "align-items",
            Property::JustifyContent => "justify-content",
            Property::Flex => "flex",
            Property::FlexShrink => "flex-shrink",
            Property::Gap => "gap",
            Property::Width => "width",
            Property::Height => "height",
            Property::MinHeight => "min-height",
            Property::Padding => "padding",
            Property::Margin => "margin",
            Property::FontFamily => "font-family",
            Property::FontSize => "font-size",
            Property::FontWeight => "font-weight",
            Property::LineHeight => "line-height",
            Property::LetterSpacing => "letter-spacing",
            Property::WhiteSpace => "white-space",
            Property::Background => "background",
            Property::Color => "color",
            Property::Border => "border",
            Property::BorderColor => "border-color",
            Property::BorderRadius => "border-radius",
            Property::Outline => "outline",
            Property::BoxShadow => "box-shadow",
            Property::Opacity => "opacity",
            Property::Cursor => "cursor",
            Property::Transition => "transition",
            Property::Transform => "transform",
            Property::Animation => "animation",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A flat property → value map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    values: BTreeMap<Property, String>,
}

impl Declarations {
    /// Create an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder). Replaces any previous value.
    pub fn with(mut self, property: Property, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, property: Property, value: impl Into<String>) {
        self.values.insert(property, value.into());
    }

    /// The value of a property, if declared.
    pub fn get(&self, property: Property) -> Option<&str> {
        self.values.get(&property).map(String::as_str)
    }

    /// Whether a property is declared.
    pub fn contains(&self, property: Property) -> bool {
        self.values.contains_key(&property)
    }

    /// Merge `other` on top of `self`: every property `other` declares wins,
    /// everything else is kept. Nothing is ever removed.
    pub fn merge(&self, other: &Declarations) -> Declarations {
        let mut values = self.values.clone();
        for (&property, value) in &other.values {
            values.insert(property, value.clone());
        }
        Declarations { values }
    }

    /// Iterate `(property, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &str)> {
        self.values.iter().map(|(&p, v)| (p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inline style form: `background: #3B82F6; color: #FFFFFF`.
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        assert!(Declarations::new().is_empty());
        assert_eq!(Declarations::new().len(), 0);
    }

    #[test]
    fn set_replaces_value() {
        let mut d = Declarations::new();
        d.set(Property::Cursor, "pointer");
        d.set(Property::Cursor, "wait");
        assert_eq!(d.get(Property::Cursor), Some("wait"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn merge_other_overrides_base() {
        let base = Declarations::new()
            .with(Property::Color, "red")
            .with(Property::Background, "white");
        let other = Declarations::new().with(Property::Color, "blue");

        let merged = base.merge(&other);
        assert_eq!(merged.get(Property::Color), Some("blue"));
        assert_eq!(merged.get(Property::Background), Some("white"));
    }

    #[test]
    fn merge_keeps_base_when_other_empty() {
        let base = Declarations::new().with(Property::Opacity, "0.5");
        assert_eq!(base.merge(&Declarations::new()), base);
    }

    #[test]
    fn merge_is_not_commutative() {
        let a = Declarations::new().with(Property::Color, "red");
        let b = Declarations::new().with(Property::Color, "blue");
        assert_eq!(a.merge(&b).get(Property::Color), Some("blue"));
        assert_eq!(b.merge(&a).get(Property::Color), Some("red"));
    }

    #[test]
    fn iteration_follows_property_order() {
        let d = Declarations::new()
            .with(Property::Cursor, "pointer")
            .with(Property::Display, "flex")
            .with(Property::Background, "#000000");
        let order: Vec<Property> = d.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Property::Display, Property::Background, Property::Cursor]);
    }

    #[test]
    fn inline_form() {
        let d = Declarations::new()
            .with(Property::Color, "#FFFFFF")
            .with(Property::Background, "#3B82F6");
        assert_eq!(d.to_inline(), "background: #3B82F6; color: #FFFFFF");
    }
}
