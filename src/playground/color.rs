//! Color surface: pick a semantic hue and scale step, plus a gray step, and
//! see swatches and the token usage string.

use crate::dom::{Dom, Element, NodeId};
use crate::style::{Declarations, Property};
use crate::tokens::colors::{self, Hue, Scale};

use super::options::{pick, OptionGroup};
use super::{unknown_group, Playground, PlaygroundError, Surface};

const GROUPS: usize = 3;

/// Controller state for the color surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPlayground {
    pub hue: Hue,
    pub scale: Scale,
    pub gray: Scale,
}

impl ColorPlayground {
    pub fn new() -> Self {
        Self {
            hue: Hue::Primary,
            scale: Scale::S500,
            gray: Scale::S500,
        }
    }

    /// Hex value of the selected hue and step.
    pub fn selected(&self) -> &'static str {
        colors::color(self.hue, self.scale)
    }

    /// Hex value of the selected gray step.
    pub fn selected_gray(&self) -> &'static str {
        colors::color(Hue::Gray, self.gray)
    }

    /// How to reference the selection in code.
    pub fn usage(&self) -> String {
        format!("colors.{}[{}]", self.hue, self.scale)
    }
}

impl Default for ColorPlayground {
    fn default() -> Self {
        Self::new()
    }
}

fn swatch(background: &str, light: bool, text: &str) -> Element {
    let foreground = if light { colors::semantic::text::PRIMARY } else { colors::WHITE };
    Element::new("div")
        .with_class("tk-swatch")
        .with_text(text)
        .with_declarations(
            Declarations::new()
                .with(Property::Background, background)
                .with(Property::Color, foreground),
        )
}

impl Playground for ColorPlayground {
    fn surface(&self) -> Surface {
        Surface::Color
    }

    fn groups(&self) -> Vec<OptionGroup> {
        let hue = self.hue;
        vec![
            OptionGroup::radio("Semantic Color", Hue::SEMANTIC, self.hue, |h| {
                format!("{h} {}", colors::color(h, Scale::S500))
            }),
            OptionGroup::radio("Scale", Scale::ALL, self.scale, move |s| {
                format!("{s} {}", colors::color(hue, s))
            }),
            OptionGroup::radio("Gray Scale", Scale::ALL, self.gray, |s| {
                format!("{s} {}", colors::color(Hue::Gray, s))
            }),
        ]
    }

    fn select(&mut self, group: usize, option: usize) -> Result<(), PlaygroundError> {
        match group {
            0 => self.hue = pick(Hue::SEMANTIC, group, option)?,
            1 => self.scale = pick(Scale::ALL, group, option)?,
            2 => self.gray = pick(Scale::ALL, group, option)?,
            _ => return Err(unknown_group(group, GROUPS)),
        }
        tracing::debug!(group, option, usage = %self.usage(), "color playground updated");
        Ok(())
    }

    fn code(&self) -> String {
        self.usage()
    }

    fn render_preview(&self, dom: &mut Dom) -> NodeId {
        let root = dom.insert(Element::new("div").with_class("tk-preview"));
        dom.insert_child(
            root,
            swatch(self.selected(), self.scale.is_light(), &format!("{}-{}", self.hue, self.scale)),
        );
        dom.insert_child(
            root,
            Element::new("div")
                .with_class("tk-outlined")
                .with_text("Outlined")
                .with_declarations(
                    Declarations::new()
                        .with(Property::Background, colors::TRANSPARENT)
                        .with(Property::Color, self.selected())
                        .with(Property::Border, format!("1px solid {}", self.selected())),
                ),
        );
        dom.insert_child(
            root,
            swatch(self.selected_gray(), self.gray.is_light(), &format!("gray-{}", self.gray)),
        );
        root
    }

    fn info(&self) -> Vec<(String, String)> {
        vec![
            ("Selected".into(), format!("{}-{}", self.hue, self.scale)),
            ("Hex".into(), self.selected().into()),
            ("Usage".into(), self.usage()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_primary_500() {
        let pg = ColorPlayground::new();
        assert_eq!(pg.selected(), "#3B82F6");
        assert_eq!(pg.code(), "colors.primary[500]");
    }

    #[test]
    fn info_rows() {
        let mut pg = ColorPlayground::new();
        pg.select(0, 2).unwrap();
        pg.select(1, 7).unwrap();
        assert_eq!(
            pg.info(),
            vec![
                ("Selected".to_string(), "danger-700".to_string()),
                ("Hex".to_string(), "#B91C1C".to_string()),
                ("Usage".to_string(), "colors.danger[700]".to_string()),
            ]
        );
    }

    #[test]
    fn gray_is_not_a_semantic_choice() {
        let mut pg = ColorPlayground::new();
        assert!(pg.select(0, Hue::SEMANTIC.len()).is_err());
    }

    #[test]
    fn light_swatch_uses_dark_text() {
        let mut pg = ColorPlayground::new();
        pg.select(1, 0).unwrap();
        let mut dom = Dom::new();
        pg.render_preview(&mut dom);
        let first = dom.get(dom.query_by_class("tk-swatch")[0]).unwrap();
        assert_eq!(first.style.base.get(Property::Color), Some("#111827"));
        assert_eq!(first.style.base.get(Property::Background), Some("#EFF6FF"));
    }
}
