//! Queries over a rendered tree: by class, tag or predicate.
//!
//! Queries walk the tree from the root in document order, so results are
//! stable across renders.

use super::node::{Element, NodeId};
use super::tree::Dom;

impl Dom {
    /// All elements with the given class, in document order.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|el| el.has_class(class))
    }

    /// All elements with the given tag, in document order.
    pub fn query_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.query_all(|el| el.tag == tag)
    }

    /// The first element matching `predicate`, in document order.
    pub fn query_first(&self, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// All elements matching `predicate`, in document order.
    pub fn query_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }

    /// Concatenated text of an element and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|node| self.get(node).and_then(|el| el.text.as_deref()))
            .collect()
    }

    fn document_order(&self) -> Vec<NodeId> {
        self.root()
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::Element;
    use crate::dom::tree::Dom;

    fn build() -> Dom {
        let mut dom = Dom::new();
        let root = dom.insert(Element::new("div").with_class("tk-input"));
        dom.insert_child(root, Element::new("label").with_text("Email"));
        let wrapper = dom.insert_child(root, Element::new("div").with_class("tk-input-wrapper"));
        dom.insert_child(wrapper, Element::new("span").with_class("tk-affix").with_text("@"));
        dom.insert_child(wrapper, Element::new("input").with_attr("name", "email"));
        dom.insert_child(wrapper, Element::new("span").with_class("tk-affix").with_text(".com"));
        dom
    }

    #[test]
    fn by_class_in_document_order() {
        let dom = build();
        let affixes = dom.query_by_class("tk-affix");
        assert_eq!(affixes.len(), 2);
        assert_eq!(dom.get(affixes[0]).unwrap().text.as_deref(), Some("@"));
        assert_eq!(dom.get(affixes[1]).unwrap().text.as_deref(), Some(".com"));
    }

    #[test]
    fn by_tag_and_attribute_predicate() {
        let dom = build();
        assert_eq!(dom.query_by_tag("input").len(), 1);
        assert!(dom.query_first(|el| el.attr("name") == Some("email")).is_some());
        assert!(dom.query_all(|el| el.tag == "button").is_empty());
    }

    #[test]
    fn text_content() {
        let dom = build();
        let root = dom.root().unwrap();
        assert_eq!(dom.text_content(root), "Email@.com");
    }

    #[test]
    fn empty_dom_queries() {
        let dom = Dom::new();
        assert!(dom.query_by_class("x").is_empty());
        assert!(dom.query_first(|_| true).is_none());
    }
}
