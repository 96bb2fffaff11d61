//! Component trait: name, resolved style, render into a [`Dom`].
//!
//! Every presentational component accepts a constrained prop set, hands it
//! to the style resolver, and renders one interactive element (plus
//! decorations) into an element tree.

use std::any::Any;

use crate::dom::{Dom, NodeId};
use crate::style::StyleBundle;

/// Core trait implemented by Button, Input and Text.
///
/// Object-safe, so a preview can hold any component as `Box<dyn Component>`.
pub trait Component {
    /// The component's display name, as it appears in generated code.
    fn component_name(&self) -> &str;

    /// The resolved style of the component's primary element.
    fn style(&self) -> StyleBundle;

    /// Render into `dom`, under `parent` or as a new root. Returns the id
    /// of the outermost element.
    fn render(&self, dom: &mut Dom, parent: Option<NodeId>) -> NodeId;

    /// Whether the component can take keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Render a component into a fresh tree and return it with the root id.
pub fn render_standalone(component: &dyn Component) -> (Dom, NodeId) {
    let mut dom = Dom::new();
    let root = component.render(&mut dom, None);
    (dom, root)
}
