//! Typography surface: family, size, weight and line-height radios over a
//! Text preview, plus a preset radio that overrides all four.

use std::fmt;

use crate::components::{Component, Text};
use crate::dom::{Dom, Element, NodeId};
use crate::style::TextProps;
use crate::tokens::{FontFamily, FontSize, FontWeight, LineHeight, TypographyPreset};

use super::code::PropList;
use super::options::{pick, OptionGroup};
use super::{unknown_group, Playground, PlaygroundError, Surface};

const GROUPS: usize = 5;

/// Sizes offered by the surface; the display sizes above `2xl` are for
/// presets only.
const SIZES: &[FontSize] = &[
    FontSize::Xs,
    FontSize::Sm,
    FontSize::Md,
    FontSize::Lg,
    FontSize::Xl,
    FontSize::X2l,
];

pub const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. 0123456789";

/// A preset radio entry; `none` leaves the individual props in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PresetChoice(Option<TypographyPreset>);

impl fmt::Display for PresetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(preset) => fmt::Display::fmt(&preset, f),
            None => f.write_str("none"),
        }
    }
}

const PRESETS: &[PresetChoice] = &[
    PresetChoice(None),
    PresetChoice(Some(TypographyPreset::H1)),
    PresetChoice(Some(TypographyPreset::H2)),
    PresetChoice(Some(TypographyPreset::H3)),
    PresetChoice(Some(TypographyPreset::H4)),
    PresetChoice(Some(TypographyPreset::BodyLarge)),
    PresetChoice(Some(TypographyPreset::Body)),
    PresetChoice(Some(TypographyPreset::BodySmall)),
    PresetChoice(Some(TypographyPreset::Korean)),
    PresetChoice(Some(TypographyPreset::Caption)),
    PresetChoice(Some(TypographyPreset::Code)),
    PresetChoice(Some(TypographyPreset::Article)),
];

/// Controller state for the typography surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypographyPlayground {
    pub font_family: FontFamily,
    pub size: FontSize,
    pub weight: FontWeight,
    pub line_height: LineHeight,
    /// When set, fixes family, size, weight and line height together.
    pub preset: Option<TypographyPreset>,
}

impl TypographyPlayground {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text props for the current state.
    pub fn props(&self) -> TextProps {
        let props = TextProps::new()
            .font_family(self.font_family)
            .size(self.size)
            .weight(self.weight)
            .line_height(self.line_height);
        match self.preset {
            Some(preset) => props.preset(preset),
            None => props,
        }
    }

    pub fn text(&self) -> Text {
        Text::from_props(self.props(), SAMPLE)
    }
}

fn family_label(f: FontFamily) -> String {
    match f {
        FontFamily::Sans => "Sans (system)".into(),
        FontFamily::Korean => "Korean".into(),
        FontFamily::Display => "Display (headings)".into(),
        FontFamily::Mono => "Mono (code)".into(),
        FontFamily::Serif => "Serif (long form)".into(),
    }
}

fn size_label(s: FontSize) -> String {
    format!("{} ({}px)", s.key(), s.px())
}

fn weight_label(w: FontWeight) -> String {
    format!("{} ({})", w.key(), w.value())
}

fn line_height_label(l: LineHeight) -> String {
    format!("{} ({})", l.key(), l.value())
}

fn preset_label(p: PresetChoice) -> String {
    match p.0 {
        Some(preset) => {
            let bundle = preset.bundle();
            format!("{preset} ({}, {})", bundle.size.value(), bundle.weight.value())
        }
        None => "None (use props)".into(),
    }
}

impl Playground for TypographyPlayground {
    fn surface(&self) -> Surface {
        Surface::Typography
    }

    fn groups(&self) -> Vec<OptionGroup> {
        vec![
            OptionGroup::radio("Font Family", FontFamily::ALL, self.font_family, family_label),
            OptionGroup::radio("Size", SIZES, self.size, size_label),
            OptionGroup::radio("Weight", FontWeight::ALL, self.weight, weight_label),
            OptionGroup::radio("Line Height", LineHeight::ALL, self.line_height, line_height_label),
            OptionGroup::radio("Preset", PRESETS, PresetChoice(self.preset), preset_label),
        ]
    }

    fn select(&mut self, group: usize, option: usize) -> Result<(), PlaygroundError> {
        match group {
            0 => self.font_family = pick(FontFamily::ALL, group, option)?,
            1 => self.size = pick(SIZES, group, option)?,
            2 => self.weight = pick(FontWeight::ALL, group, option)?,
            3 => self.line_height = pick(LineHeight::ALL, group, option)?,
            4 => self.preset = pick(PRESETS, group, option)?.0,
            _ => return Err(unknown_group(group, GROUPS)),
        }
        tracing::debug!(group, option, state = ?self, "typography playground updated");
        Ok(())
    }

    /// A preset replaces the individual props, so only it is listed.
    fn code(&self) -> String {
        if let Some(preset) = self.preset {
            return PropList::new("Text").string("preset", preset).finish();
        }
        PropList::new("Text")
            .changed("fontFamily", self.font_family, FontFamily::default())
            .changed("size", self.size, FontSize::default())
            .changed("weight", self.weight, FontWeight::default())
            .changed("lineHeight", self.line_height, LineHeight::default())
            .finish()
    }

    fn render_preview(&self, dom: &mut Dom) -> NodeId {
        let root = dom.insert(Element::new("div").with_class("tk-preview"));
        self.text().render(dom, Some(root));
        root
    }

    /// The typography in effect, after preset precedence.
    fn info(&self) -> Vec<(String, String)> {
        let t = self.props().typography();
        vec![
            ("Font size".into(), t.size.value().into()),
            ("Weight".into(), t.weight.value().to_string()),
            ("Line height".into(), t.line_height.value().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Property;

    #[test]
    fn defaults_give_bare_text() {
        assert_eq!(TypographyPlayground::new().code(), "<Text />");
    }

    #[test]
    fn changed_props_in_order() {
        let mut pg = TypographyPlayground::new();
        pg.select(3, 4).unwrap();
        pg.select(0, 3).unwrap();
        assert_eq!(pg.code(), r#"<Text fontFamily="mono" lineHeight="loose" />"#);
    }

    #[test]
    fn preview_uses_selected_tokens() {
        let mut pg = TypographyPlayground::new();
        pg.select(1, 5).unwrap();
        pg.select(2, 4).unwrap();
        let style = pg.text().style();
        assert_eq!(style.base.get(Property::FontSize), Some("1.5rem"));
        assert_eq!(style.base.get(Property::FontWeight), Some("700"));
    }

    #[test]
    fn preset_beats_size_radio() {
        let mut pg = TypographyPlayground::new();
        pg.select(1, 0).unwrap();
        pg.select(4, 1).unwrap();
        assert_eq!(pg.preset, Some(TypographyPreset::H1));
        let style = pg.text().style();
        assert_eq!(style.base.get(Property::FontSize), Some("2.25rem"));
        assert_eq!(pg.info()[0].1, "2.25rem");

        pg.select(1, 5).unwrap();
        assert_eq!(pg.text().style().base.get(Property::FontSize), Some("2.25rem"));
    }

    #[test]
    fn preset_code_drops_individual_props() {
        let mut pg = TypographyPlayground::new();
        pg.select(0, 3).unwrap();
        pg.select(4, 9).unwrap();
        assert_eq!(pg.code(), r#"<Text preset="caption" />"#);

        pg.select(4, 0).unwrap();
        assert_eq!(pg.code(), r#"<Text fontFamily="mono" />"#);
    }

    #[test]
    fn preset_radio_lists_none_first() {
        let groups = TypographyPlayground::new().groups();
        let presets = &groups[4];
        assert_eq!(presets.label, "Preset");
        assert_eq!(presets.len(), TypographyPreset::ALL.len() + 1);
        assert_eq!(presets.selected(), 0);
    }

    #[test]
    fn size_out_of_range() {
        let mut pg = TypographyPlayground::new();
        assert!(pg.select(1, SIZES.len()).is_err());
        assert_eq!(pg.size, FontSize::Md);
    }
}
