//! Button surface: variant, size, shape and interaction radios plus
//! disabled/loading/full-width toggles, with a clickable preview.

use std::cell::Cell;
use std::rc::Rc;

use crate::components::{Button, Component};
use crate::dom::{Dom, Element, NodeId};
use crate::style::{ButtonProps, ButtonVariant, ControlSize};
use crate::tokens::{Interaction, Shape};

use super::code::PropList;
use super::options::{pick, pick_bool, OptionGroup};
use super::{unknown_group, Playground, PlaygroundError, Surface};

const GROUPS: usize = 7;

/// Controller state for the button surface.
#[derive(Debug, Default)]
pub struct ButtonPlayground {
    props: ButtonProps,
    clicks: Rc<Cell<u32>>,
}

impl ButtonPlayground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Times the preview's click handler has run.
    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }

    /// The preview button, wired to the click counter.
    pub fn button(&self) -> Button {
        let clicks = Rc::clone(&self.clicks);
        Button::from_props(self.props, "Click Me").on_click(move || clicks.set(clicks.get() + 1))
    }
}

fn variant_label(v: ButtonVariant) -> String {
    match v {
        ButtonVariant::Primary => "Primary".into(),
        ButtonVariant::Secondary => "Secondary".into(),
        ButtonVariant::Danger => "Danger".into(),
    }
}

pub(crate) fn size_label(s: ControlSize) -> String {
    let name = match s {
        ControlSize::Sm => "Small",
        ControlSize::Md => "Medium",
        ControlSize::Lg => "Large",
    };
    format!("{name} ({})", s.height())
}

fn shape_label(s: Shape) -> String {
    match s {
        Shape::Sharp => "Sharp".into(),
        Shape::Round => "Round".into(),
        Shape::Pill => "Pill".into(),
    }
}

fn interaction_label(i: Interaction) -> String {
    match i {
        Interaction::None => "None".into(),
        Interaction::HoverScale => "Hover Scale".into(),
        Interaction::HoverGlow => "Hover Glow".into(),
        Interaction::HoverLift => "Hover Lift".into(),
        Interaction::ActivePress => "Active Press".into(),
    }
}

impl Playground for ButtonPlayground {
    fn surface(&self) -> Surface {
        Surface::Button
    }

    fn groups(&self) -> Vec<OptionGroup> {
        let p = &self.props;
        vec![
            OptionGroup::radio("Variant", ButtonVariant::ALL, p.variant, variant_label),
            OptionGroup::radio("Size", ControlSize::ALL, p.size, size_label),
            OptionGroup::radio("Shape", Shape::ALL, p.shape, shape_label),
            OptionGroup::radio("Interaction", Interaction::ALL, p.interaction, interaction_label),
            OptionGroup::toggle("Disabled", p.disabled),
            OptionGroup::toggle("Loading", p.loading),
            OptionGroup::toggle("Full Width", p.full_width),
        ]
    }

    fn select(&mut self, group: usize, option: usize) -> Result<(), PlaygroundError> {
        let p = &mut self.props;
        match group {
            0 => p.variant = pick(ButtonVariant::ALL, group, option)?,
            1 => p.size = pick(ControlSize::ALL, group, option)?,
            2 => p.shape = pick(Shape::ALL, group, option)?,
            3 => p.interaction = pick(Interaction::ALL, group, option)?,
            4 => p.disabled = pick_bool(group, option)?,
            5 => p.loading = pick_bool(group, option)?,
            6 => p.full_width = pick_bool(group, option)?,
            _ => return Err(unknown_group(group, GROUPS)),
        }
        tracing::debug!(group, option, props = ?self.props, "button playground updated");
        Ok(())
    }

    fn code(&self) -> String {
        let p = &self.props;
        let defaults = ButtonProps::default();
        PropList::new("Button")
            .changed("variant", p.variant, defaults.variant)
            .changed("size", p.size, defaults.size)
            .changed("shape", p.shape, defaults.shape)
            .changed("interaction", p.interaction, defaults.interaction)
            .flag("disabled", p.disabled)
            .flag("loading", p.loading)
            .flag("fullWidth", p.full_width)
            .finish()
    }

    fn render_preview(&self, dom: &mut Dom) -> NodeId {
        let root = dom.insert(Element::new("div").with_class("tk-preview"));
        self.button().render(dom, Some(root));
        root
    }

    fn info(&self) -> Vec<(String, String)> {
        vec![("Clicks".into(), self.clicks().to_string())]
    }

    fn activate(&mut self) -> bool {
        self.button().click()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code() {
        assert_eq!(ButtonPlayground::new().code(), "<Button />");
    }

    #[test]
    fn only_size_changed() {
        let mut pg = ButtonPlayground::new();
        pg.select(1, 2).unwrap();
        assert_eq!(pg.code(), r#"<Button size="lg" />"#);
    }

    #[test]
    fn code_follows_declaration_order() {
        let mut pg = ButtonPlayground::new();
        pg.select(6, 1).unwrap();
        pg.select(3, 3).unwrap();
        pg.select(0, 2).unwrap();
        pg.toggle(4).unwrap();
        assert_eq!(
            pg.code(),
            r#"<Button variant="danger" interaction="hover-lift" disabled fullWidth />"#
        );
    }

    #[test]
    fn activate_counts_clicks_unless_inert() {
        let mut pg = ButtonPlayground::new();
        assert!(pg.activate());
        assert!(pg.activate());
        assert_eq!(pg.clicks(), 2);

        pg.toggle(5).unwrap();
        assert!(!pg.activate());
        assert_eq!(pg.clicks(), 2);
        assert_eq!(pg.info(), vec![("Clicks".to_string(), "2".to_string())]);
    }

    #[test]
    fn preview_contains_button() {
        let mut pg = ButtonPlayground::new();
        pg.select(5, 1).unwrap();
        let mut dom = Dom::new();
        let root = pg.render_preview(&mut dom);
        assert_eq!(dom.query_by_tag("button").len(), 1);
        assert_eq!(dom.query_by_class("tk-spinner").len(), 1);
        assert_eq!(dom.text_content(root), "Click Me");
    }

    #[test]
    fn toggle_on_radio_is_noop() {
        let mut pg = ButtonPlayground::new();
        pg.toggle(0).unwrap();
        assert_eq!(pg.props().variant, ButtonVariant::Primary);
    }
}
