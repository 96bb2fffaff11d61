//! Text style resolution.
//!
//! A typography preset, when present, fixes family, size, weight and line
//! height as a unit and the individual props are ignored. Color is resolved
//! separately and always applies.

use crate::tokens::colors::semantic;
use crate::tokens::token_enum;
use crate::tokens::typography::{
    FontFamily, FontSize, FontWeight, LineHeight, PresetBundle, TypographyPreset,
};

use super::bundle::StyleBundle;
use super::declaration::{Declarations, Property};
use super::Resolve;

token_enum! {
    /// The element a text block renders as.
    #[derive(Default)]
    pub enum TextTag in "text element" {
        #[default]
        P => "p",
        Span => "span",
        Div => "div",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
    }
}

// ---------------------------------------------------------------------------
// TextProps
// ---------------------------------------------------------------------------

/// The style-relevant props of a text block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProps {
    pub tag: TextTag,
    pub font_family: FontFamily,
    pub size: FontSize,
    pub weight: FontWeight,
    pub line_height: LineHeight,
    pub preset: Option<TypographyPreset>,
    pub color: Option<String>,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered element (builder).
    pub fn tag(mut self, tag: TextTag) -> Self {
        self.tag = tag;
        self
    }

    /// Set the font family (builder).
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Set the font size (builder).
    pub fn size(mut self, size: FontSize) -> Self {
        self.size = size;
        self
    }

    /// Set the font weight (builder).
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the line height (builder).
    pub fn line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = line_height;
        self
    }

    /// Apply a typography preset (builder). Wins over the individual props.
    pub fn preset(mut self, preset: TypographyPreset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Override the text color (builder).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The typography values in effect after preset precedence.
    pub fn typography(&self) -> PresetBundle {
        match self.preset {
            Some(preset) => preset.bundle(),
            None => PresetBundle {
                family: self.font_family,
                size: self.size,
                weight: self.weight,
                line_height: self.line_height,
                letter_spacing: None,
            },
        }
    }

    /// Resolve the flat text declarations.
    pub fn resolve(&self) -> Declarations {
        let color = self.color.as_deref().unwrap_or(semantic::text::PRIMARY);
        let declarations = typography(&self.typography())
            .with(Property::Color, color)
            .with(Property::Margin, "0");
        tracing::trace!(tag = %self.tag, preset = ?self.preset, "resolved text style");
        declarations
    }
}

impl Resolve for TextProps {
    type Output = StyleBundle;

    fn resolve(&self) -> StyleBundle {
        StyleBundle::base(TextProps::resolve(self))
    }
}

/// Font declarations for a typography bundle.
pub fn typography(bundle: &PresetBundle) -> Declarations {
    let mut d = Declarations::new()
        .with(Property::FontFamily, bundle.family.value())
        .with(Property::FontSize, bundle.size.value())
        .with(Property::FontWeight, bundle.weight.value().to_string())
        .with(Property::LineHeight, bundle.line_height.value().to_string());
    if let Some(spacing) = bundle.letter_spacing {
        d.set(Property::LetterSpacing, spacing.value());
    }
    d
}

/// Font declarations for a named preset.
pub fn preset(preset: TypographyPreset) -> Declarations {
    typography(&preset.bundle())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let d = TextProps::new().resolve();
        assert_eq!(d.get(Property::FontSize), Some("1rem"));
        assert_eq!(d.get(Property::FontWeight), Some("400"));
        assert_eq!(d.get(Property::LineHeight), Some("1.5"));
        assert_eq!(d.get(Property::Color), Some("#111827"));
        assert_eq!(d.get(Property::Margin), Some("0"));
        assert_eq!(d.get(Property::LetterSpacing), None);
    }

    #[test]
    fn individual_props_resolve_independently() {
        let d = TextProps::new()
            .font_family(FontFamily::Mono)
            .size(FontSize::Xl)
            .weight(FontWeight::Bold)
            .line_height(LineHeight::Loose)
            .resolve();
        assert_eq!(d.get(Property::FontFamily), Some(FontFamily::Mono.value()));
        assert_eq!(d.get(Property::FontSize), Some("1.25rem"));
        assert_eq!(d.get(Property::FontWeight), Some("700"));
        assert_eq!(d.get(Property::LineHeight), Some("2"));
    }

    #[test]
    fn preset_beats_individual_props() {
        let d = TextProps::new()
            .size(FontSize::Xs)
            .weight(FontWeight::Light)
            .preset(TypographyPreset::H1)
            .resolve();
        assert_eq!(d, preset(TypographyPreset::H1).merge(&d));
        assert_eq!(d.get(Property::FontSize), Some("2.25rem"));
        assert_eq!(d.get(Property::FontWeight), Some("700"));
        assert_eq!(d.get(Property::LetterSpacing), Some("-0.025em"));
    }

    #[test]
    fn color_overrides_preset() {
        let d = TextProps::new()
            .preset(TypographyPreset::Caption)
            .color("#EF4444")
            .resolve();
        assert_eq!(d.get(Property::Color), Some("#EF4444"));
    }

    #[test]
    fn tag_does_not_change_style() {
        assert_eq!(
            TextProps::new().tag(TextTag::H2).resolve(),
            TextProps::new().resolve()
        );
    }
}
