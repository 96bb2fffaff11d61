//! Button: variant/size/shape/interaction styled, clickable unless disabled
//! or loading.

use std::any::Any;
use std::fmt;

use crate::dom::{Dom, Element, NodeId};
use crate::style::button::spinner;
use crate::style::{ButtonProps, ButtonVariant, ControlSize, StyleBundle};
use crate::tokens::{Interaction, Shape};

use super::traits::Component;

/// Click callback.
pub type ClickHandler = Box<dyn FnMut()>;

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A token-styled button.
///
/// ```
/// use tokenkit::components::Button;
/// use tokenkit::style::ButtonVariant;
///
/// let mut button = Button::new("Delete").variant(ButtonVariant::Danger);
/// assert!(button.click());
///
/// let mut busy = Button::new("Saving").loading(true);
/// assert!(!busy.click());
/// ```
pub struct Button {
    props: ButtonProps,
    children: String,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            props: ButtonProps::default(),
            children: children.into(),
            on_click: None,
        }
    }

    /// Build from an existing prop snapshot.
    pub fn from_props(props: ButtonProps, children: impl Into<String>) -> Self {
        Self {
            props,
            children: children.into(),
            on_click: None,
        }
    }

    /// Set the color variant (builder pattern).
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.props.variant = variant;
        self
    }

    /// Set the control size (builder pattern).
    pub fn size(mut self, size: ControlSize) -> Self {
        self.props.size = size;
        self
    }

    /// Set the corner shape (builder pattern).
    pub fn shape(mut self, shape: Shape) -> Self {
        self.props.shape = shape;
        self
    }

    /// Set the hover/press overlay (builder pattern).
    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.props.interaction = interaction;
        self
    }

    /// Set the disabled state (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Show the spinner and suppress clicks (builder pattern).
    pub fn loading(mut self, loading: bool) -> Self {
        self.props.loading = loading;
        self
    }

    /// Stretch to the container width (builder pattern).
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = full_width;
        self
    }

    /// Set the click handler (builder).
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn children(&self) -> &str {
        &self.children
    }

    /// Activate the button.
    ///
    /// Does nothing and returns `false` while disabled or loading. Otherwise
    /// invokes the handler (if any) exactly once and returns `true`.
    pub fn click(&mut self) -> bool {
        if !self.props.is_interactive() {
            tracing::trace!(
                disabled = self.props.disabled,
                loading = self.props.loading,
                "button click suppressed"
            );
            return false;
        }
        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
        true
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("props", &self.props)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Component for Button {
    fn component_name(&self) -> &str {
        "Button"
    }

    fn style(&self) -> StyleBundle {
        self.props.resolve()
    }

    fn render(&self, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let element = Element::new("button")
            .with_class("tk-button")
            .with_class(format!("tk-button--{}", self.props.variant))
            .with_attr("type", "button")
            .with_flag("disabled", !self.props.is_interactive())
            .with_flag("aria-busy", self.props.loading)
            .with_style(self.style());
        let button = dom.insert_under(parent, element);

        if self.props.loading {
            dom.insert_child(
                button,
                Element::new("span")
                    .with_class("tk-spinner")
                    .with_declarations(spinner()),
            );
        }
        dom.insert_child(
            button,
            Element::new("span")
                .with_class("tk-button-label")
                .with_text(self.children.as_str()),
        );
        button
    }

    fn can_focus(&self) -> bool {
        self.props.is_interactive()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
