//! Tree operations: insert, walk.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{Element, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// A rendered element tree, backed by a slotmap arena.
///
/// Components render into a `Dom`; the preview panel and tests read it back.
/// Parent/child links live in secondary maps keyed by node.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, Element>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless element. The first one inserted becomes the root.
    pub fn insert(&mut self, element: Element) -> NodeId {
        let id = self.nodes.insert(element);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert an element as the last child of `parent`.
    ///
    /// A stale `parent` leaves the element detached (debug builds assert).
    pub fn insert_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        debug_assert!(self.nodes.contains_key(parent), "parent node does not exist");
        let id = self.nodes.insert(element);
        self.children.insert(id, Vec::new());
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
            self.parent.insert(id, parent);
        }
        id
    }

    /// Insert `element` under `under`, or as a root when `None`.
    pub fn insert_under(&mut self, under: Option<NodeId>, element: Element) -> NodeId {
        match under {
            Some(parent) => self.insert_child(parent, element),
            None => self.insert(element),
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of a node, in insertion order. Empty for leaves and stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///        div
    ///      /     \
    ///   label    div.wrapper
    ///            /       \
    ///         span      input
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(Element::new("div"));
        let label = dom.insert_child(root, Element::new("label").with_text("Email"));
        let wrapper = dom.insert_child(root, Element::new("div").with_class("wrapper"));
        let prefix = dom.insert_child(wrapper, Element::new("span").with_text("@"));
        let input = dom.insert_child(wrapper, Element::new("input"));
        (dom, root, label, wrapper, prefix, input)
    }

    #[test]
    fn first_insert_is_root() {
        let mut dom = Dom::new();
        let first = dom.insert(Element::new("div"));
        let _second = dom.insert(Element::new("div"));
        assert_eq!(dom.root(), Some(first));
    }

    #[test]
    fn parent_and_children() {
        let (dom, root, label, wrapper, prefix, input) = build_tree();
        assert_eq!(dom.children(root), &[label, wrapper]);
        assert_eq!(dom.children(wrapper), &[prefix, input]);
        assert_eq!(dom.parent(input), Some(wrapper));
        assert_eq!(dom.parent(root), None);
        assert!(dom.children(input).is_empty());
    }

    #[test]
    fn insert_under() {
        let mut dom = Dom::new();
        let root = dom.insert_under(None, Element::new("button"));
        let child = dom.insert_under(Some(root), Element::new("span"));
        assert_eq!(dom.root(), Some(root));
        assert_eq!(dom.parent(child), Some(root));
    }

    #[test]
    fn walk_depth_first() {
        let (dom, root, label, wrapper, prefix, input) = build_tree();
        assert_eq!(dom.walk_depth_first(root), vec![root, label, wrapper, prefix, input]);
        assert_eq!(dom.walk_depth_first(wrapper), vec![wrapper, prefix, input]);
    }
}
