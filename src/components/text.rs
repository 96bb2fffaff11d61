//! Text: a typography-token styled text block.

use std::any::Any;

use crate::dom::{Dom, Element, NodeId};
use crate::style::{StyleBundle, TextProps, TextTag};
use crate::tokens::{FontFamily, FontSize, FontWeight, LineHeight, TypographyPreset};

use super::traits::Component;

/// A block of text rendered as `p`, `span`, `h1`, ...
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    props: TextProps,
    children: String,
}

impl Text {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            props: TextProps::default(),
            children: children.into(),
        }
    }

    /// Build from an existing prop snapshot.
    pub fn from_props(props: TextProps, children: impl Into<String>) -> Self {
        Self {
            props,
            children: children.into(),
        }
    }

    /// The element to render as (`as` prop).
    pub fn tag(mut self, tag: TextTag) -> Self {
        self.props.tag = tag;
        self
    }

    /// Set the font family (builder pattern).
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.props.font_family = family;
        self
    }

    /// Set the font size (builder pattern). Ignored under a preset.
    pub fn size(mut self, size: FontSize) -> Self {
        self.props.size = size;
        self
    }

    /// Set the font weight (builder pattern). Ignored under a preset.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.props.weight = weight;
        self
    }

    /// Set the line height (builder pattern). Ignored under a preset.
    pub fn line_height(mut self, line_height: LineHeight) -> Self {
        self.props.line_height = line_height;
        self
    }

    /// Apply a typography preset (builder pattern).
    pub fn preset(mut self, preset: TypographyPreset) -> Self {
        self.props.preset = Some(preset);
        self
    }

    /// Override the text color (builder pattern).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.props.color = Some(color.into());
        self
    }

    pub fn props(&self) -> &TextProps {
        &self.props
    }

    pub fn children(&self) -> &str {
        &self.children
    }
}

impl Component for Text {
    fn component_name(&self) -> &str {
        "Text"
    }

    fn style(&self) -> StyleBundle {
        StyleBundle::base(self.props.resolve())
    }

    fn render(&self, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        dom.insert_under(
            parent,
            Element::new(self.props.tag.key())
                .with_class("tk-text")
                .with_text(self.children.as_str())
                .with_style(self.style()),
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::traits::render_standalone;
    use crate::style::Property;

    #[test]
    fn renders_as_requested_tag() {
        let (dom, root) = render_standalone(&Text::new("Title").tag(TextTag::H2));
        assert_eq!(dom.to_markup(root), r#"<h2 class="tk-text">Title</h2>"#);
    }

    #[test]
    fn default_tag_is_paragraph() {
        let (dom, root) = render_standalone(&Text::new("body"));
        assert_eq!(dom.get(root).unwrap().tag, "p");
    }

    #[test]
    fn preset_beats_size() {
        let text = Text::new("x").size(FontSize::Xs).preset(TypographyPreset::H3);
        assert_eq!(text.style().base.get(Property::FontSize), Some("1.5rem"));
    }

    #[test]
    fn not_focusable() {
        assert!(!Text::new("x").can_focus());
    }
}
