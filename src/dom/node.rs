//! Node types: NodeId, Element.

use slotmap::new_key_type;

use crate::style::{Declarations, StyleBundle};

new_key_type! {
    /// Unique identifier for an element node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// One rendered element: tag, attributes, optional text and resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element tag (e.g. "button", "input", "span").
    pub tag: String,
    /// Class names, in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Attributes in insertion order. Boolean attributes have an empty value.
    pub attributes: Vec<(String, String)>,
    /// Text content rendered before any children.
    pub text: Option<String>,
    /// The resolved style attached to this element.
    pub style: StyleBundle,
}

impl Element {
    /// Create an element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            style: StyleBundle::default(),
        }
    }

    /// Add a class (builder). Duplicates are ignored.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute (builder), replacing any previous value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a boolean attribute such as `disabled` when `on` is true (builder).
    pub fn with_flag(self, name: &str, on: bool) -> Self {
        if on {
            self.with_attr(name, "")
        } else {
            self
        }
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a layered style (builder).
    pub fn with_style(mut self, style: StyleBundle) -> Self {
        self.style = style;
        self
    }

    /// Attach a flat style with no interaction layers (builder).
    pub fn with_declarations(self, declarations: Declarations) -> Self {
        self.with_style(StyleBundle::base(declarations))
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// The value of an attribute, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute is set (boolean attributes included).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Whether this element has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
