//! Input surface: size radio plus state and layout toggles. Activating the
//! preview focuses its field so keys type into it.

use crate::components::{Component, Input};
use crate::dom::{Dom, Element, NodeId};
use crate::event::input::KeyEvent;
use crate::style::{ControlSize, InputProps};

use super::button::size_label;
use super::code::PropList;
use super::options::{pick, pick_bool, OptionGroup};
use super::{unknown_group, Playground, PlaygroundError, Surface};

const GROUPS: usize = 9;

pub const LABEL: &str = "Email";
pub const PLACEHOLDER: &str = "example@email.com";
pub const ERROR_MESSAGE: &str = "Please enter a valid email address";
pub const HELPER_TEXT: &str = "We'll never share your email";
pub const PREFIX: &str = "@";
pub const SUFFIX: &str = "\u{2713}";

/// Controller state for the input surface.
#[derive(Debug, Clone)]
pub struct InputPlayground {
    props: InputProps,
    with_label: bool,
    with_helper: bool,
    with_prefix: bool,
    with_suffix: bool,
    /// Typed value, cursor and focus of the preview field.
    field: Input,
}

impl InputPlayground {
    pub fn new() -> Self {
        Self {
            props: InputProps::default(),
            with_label: true,
            with_helper: true,
            with_prefix: false,
            with_suffix: false,
            field: Input::new(),
        }
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    /// What has been typed into the preview.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// The preview input for the current state.
    pub fn input(&self) -> Input {
        let mut input = self.field.clone().with_props(self.props).placeholder(PLACEHOLDER);
        if self.props.error {
            input = input.error_message(ERROR_MESSAGE);
        }
        if self.with_label {
            input = input.label(LABEL);
        }
        if self.with_helper {
            input = input.helper_text(HELPER_TEXT);
        }
        if self.with_prefix {
            input = input.prefix(PREFIX);
        }
        if self.with_suffix {
            input = input.suffix(SUFFIX);
        }
        input
    }
}

impl Default for InputPlayground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground for InputPlayground {
    fn surface(&self) -> Surface {
        Surface::Input
    }

    fn groups(&self) -> Vec<OptionGroup> {
        let p = &self.props;
        vec![
            OptionGroup::radio("Size", ControlSize::ALL, p.size, size_label),
            OptionGroup::toggle("Error", p.error),
            OptionGroup::toggle("Disabled", p.disabled),
            OptionGroup::toggle("Read Only", p.read_only),
            OptionGroup::toggle("Label", self.with_label),
            OptionGroup::toggle("Helper Text", self.with_helper),
            OptionGroup::toggle("Prefix", self.with_prefix),
            OptionGroup::toggle("Suffix", self.with_suffix),
            OptionGroup::toggle("Full Width", p.full_width),
        ]
    }

    fn select(&mut self, group: usize, option: usize) -> Result<(), PlaygroundError> {
        if group == 0 {
            self.props.size = pick(ControlSize::ALL, group, option)?;
        } else {
            let slot = match group {
                1 => &mut self.props.error,
                2 => &mut self.props.disabled,
                3 => &mut self.props.read_only,
                4 => &mut self.with_label,
                5 => &mut self.with_helper,
                6 => &mut self.with_prefix,
                7 => &mut self.with_suffix,
                8 => &mut self.props.full_width,
                _ => return Err(unknown_group(group, GROUPS)),
            };
            *slot = pick_bool(group, option)?;
        }
        self.field = std::mem::take(&mut self.field).with_props(self.props);
        tracing::debug!(group, option, "input playground updated");
        Ok(())
    }

    fn code(&self) -> String {
        let p = &self.props;
        PropList::new("Input")
            .changed("size", p.size, ControlSize::default())
            .flag("error", p.error)
            .optional("errorMessage", p.error.then_some(ERROR_MESSAGE))
            .flag("disabled", p.disabled)
            .flag("readOnly", p.read_only)
            .optional("label", self.with_label.then_some(LABEL))
            .optional("helperText", self.with_helper.then_some(HELPER_TEXT))
            .optional("prefix", self.with_prefix.then_some(PREFIX))
            .optional("suffix", self.with_suffix.then_some(SUFFIX))
            .string("placeholder", PLACEHOLDER)
            .flag("fullWidth", p.full_width)
            .finish()
    }

    fn render_preview(&self, dom: &mut Dom) -> NodeId {
        let root = dom.insert(Element::new("div").with_class("tk-preview"));
        self.input().render(dom, Some(root));
        root
    }

    fn info(&self) -> Vec<(String, String)> {
        let value = if self.field.value().is_empty() {
            "(empty)".to_owned()
        } else {
            self.field.value().to_owned()
        };
        let status = if self.field.is_focused() {
            "typing (Esc to finish)"
        } else if self.props.disabled {
            "disabled"
        } else {
            "press x to type"
        };
        vec![
            ("Value".to_owned(), value),
            ("Focus".to_owned(), status.to_owned()),
        ]
    }

    /// Focus the preview field. Disabled fields refuse focus.
    fn activate(&mut self) -> bool {
        let focused = self.field.focus();
        tracing::debug!(focused, "input preview focus");
        focused
    }

    fn is_editing(&self) -> bool {
        self.field.is_focused()
    }

    fn edit(&mut self, key: &KeyEvent) -> bool {
        self.field.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code_lists_content_props() {
        assert_eq!(
            InputPlayground::new().code(),
            r#"<Input label="Email" helperText="We'll never share your email" placeholder="example@email.com" />"#
        );
    }

    #[test]
    fn error_shows_message_and_hides_helper() {
        let mut pg = InputPlayground::new();
        pg.toggle(1).unwrap();
        let mut dom = Dom::new();
        pg.render_preview(&mut dom);
        assert_eq!(dom.query_by_class("tk-input-error").len(), 1);
        assert!(dom.query_by_class("tk-input-helper").is_empty());
        assert!(pg.code().contains(r#"error errorMessage="Please enter a valid email address""#));
    }

    #[test]
    fn affix_toggles() {
        let mut pg = InputPlayground::new();
        pg.select(6, 1).unwrap();
        pg.select(7, 1).unwrap();
        let mut dom = Dom::new();
        pg.render_preview(&mut dom);
        assert_eq!(dom.query_by_class("tk-input-affix").len(), 2);
    }

    #[test]
    fn activate_focuses_and_keys_type() {
        use crate::event::input::Key;

        let mut pg = InputPlayground::new();
        assert!(!pg.is_editing());
        assert!(!pg.edit(&KeyEvent::plain(Key::Char('a'))));
        assert!(pg.activate());
        assert!(pg.is_editing());
        for ch in "hi".chars() {
            assert!(pg.edit(&KeyEvent::plain(Key::Char(ch))));
        }
        assert_eq!(pg.value(), "hi");
        assert_eq!(pg.info()[0], ("Value".to_owned(), "hi".to_owned()));

        let mut dom = Dom::new();
        pg.render_preview(&mut dom);
        let field = dom.get(dom.query_by_tag("input")[0]).unwrap();
        assert_eq!(field.attr("value"), Some("hi"));
        assert_eq!(dom.query_by_class("is-focused").len(), 1);
        // Typed text is preview state only.
        assert!(!pg.code().contains("hi"));
    }

    #[test]
    fn disabling_drops_focus_and_refuses_it() {
        let mut pg = InputPlayground::new();
        pg.activate();
        pg.toggle(2).unwrap();
        assert!(!pg.is_editing());
        assert!(!pg.activate());
        assert_eq!(pg.info()[1].1, "disabled");
    }

    #[test]
    fn label_toggle_off() {
        let mut pg = InputPlayground::new();
        pg.select(4, 0).unwrap();
        let mut dom = Dom::new();
        pg.render_preview(&mut dom);
        assert!(dom.query_by_tag("label").is_empty());
        assert!(!pg.code().contains("label="));
    }
}
