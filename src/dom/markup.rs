//! Markup serialization of a rendered tree.
//!
//! Produces compact HTML-like text: `<button class="tk-button" disabled>Save</button>`.
//! Styles are not serialized; read them from the element's `style`.

use std::fmt::Write as _;

use super::node::NodeId;
use super::tree::Dom;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

impl Dom {
    /// Serialize the subtree rooted at `id`.
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(id, &mut out);
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        let Some(el) = self.get(id) else {
            return;
        };

        out.push('<');
        out.push_str(&el.tag);
        if !el.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&el.classes.join(" ")));
        }
        for (name, value) in &el.attributes {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape(value));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&el.tag.as_str()) {
            return;
        }
        if let Some(text) = &el.text {
            out.push_str(&escape(text));
        }
        for &child in self.children(id) {
            self.write_markup(child, out);
        }
        let _ = write!(out, "</{}>", el.tag);
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::dom::node::Element;
    use crate::dom::tree::Dom;

    #[test]
    fn nested_markup() {
        let mut dom = Dom::new();
        let button = dom.insert(
            Element::new("button")
                .with_class("tk-button")
                .with_flag("disabled", true)
                .with_text("Save"),
        );
        dom.insert_child(button, Element::new("span").with_class("tk-spinner"));
        assert_eq!(
            dom.to_markup(button),
            r#"<button class="tk-button" disabled>Save<span class="tk-spinner"></span></button>"#
        );
    }

    #[test]
    fn void_element_and_escaping() {
        let mut dom = Dom::new();
        let input = dom.insert(
            Element::new("input")
                .with_attr("placeholder", "a \"quoted\" <value>")
                .with_flag("readonly", true),
        );
        assert_eq!(
            dom.to_markup(input),
            r#"<input placeholder="a &quot;quoted&quot; &lt;value&gt;" readonly>"#
        );
    }
}
