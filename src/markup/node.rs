use quick_xml::escape::escape;

use crate::foundation::error::{StoryError, StoryResult};

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A node of the output markup tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Tag with attributes and children.
    Element(ElementNode),
    /// Text, escaped on output.
    Text(String),
    /// Pre-serialized markup or raw-text content (scripts, styles, sanitized rich text).
    Raw(String),
}

/// Tag node. Attributes keep insertion order; a `None` value is a boolean attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    /// Tag name.
    pub tag: String,
    /// Attributes in output order.
    pub attrs: Vec<(String, Option<String>)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// Start a new element.
pub fn el(tag: impl Into<String>) -> ElementNode {
    ElementNode {
        tag: tag.into(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl ElementNode {
    /// Set `name="value"`, replacing an earlier value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), Some(value.into()));
        self
    }

    /// Set `name="value"` when `value` is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Set a boolean attribute.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set(name.into(), None);
        self
    }

    /// Set a boolean attribute when `on`.
    pub fn flag_if(self, name: impl Into<String>, on: bool) -> Self {
        if on { self.flag(name) } else { self }
    }

    fn set(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Append a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child when present.
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(n) => self.child(n),
            None => self,
        }
    }

    /// Append several children.
    pub fn children<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append an escaped text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append a raw child.
    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    /// Append the raw-text body of a `style` or `script` element.
    ///
    /// Fails when the body contains this element's closing tag.
    pub fn raw_text(self, body: impl Into<String>) -> StoryResult<Self> {
        let body = body.into();
        let closer = format!("</{}", self.tag.to_ascii_lowercase());
        if body.to_ascii_lowercase().contains(&closer) {
            return Err(StoryError::invariant(format!(
                "<{}> body contains '{closer}'",
                self.tag
            )));
        }
        Ok(self.raw(body))
    }

    /// Attribute value; `Some("")` for boolean attributes.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Child elements, skipping text and raw nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Every descendant element (pre-order) with tag `tag`, including `self`.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a ElementNode> {
        let mut out = Vec::new();
        collect(self, tag, &mut out);
        out
    }

    /// Serialize this element and its subtree.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn collect<'a>(node: &'a ElementNode, tag: &str, out: &mut Vec<&'a ElementNode>) {
    if node.tag == tag {
        out.push(node);
    }
    for c in node.element_children() {
        collect(c, tag, out);
    }
}

impl From<ElementNode> for Node {
    fn from(e: ElementNode) -> Self {
        Self::Element(e)
    }
}

impl Node {
    /// Serialize this node.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(e) => write_element(e, out),
        Node::Text(t) => out.push_str(&escape(t.as_str())),
        Node::Raw(r) => out.push_str(r),
    }
}

fn write_element(e: &ElementNode, out: &mut String) {
    out.push('<');
    out.push_str(&e.tag);
    for (name, value) in &e.attrs {
        out.push(' ');
        out.push_str(name);
        if let Some(v) = value {
            out.push_str("=\"");
            out.push_str(&escape(v.as_str()));
            out.push('"');
        }
    }
    out.push('>');
    if VOID_TAGS.contains(&e.tag.as_str()) {
        return;
    }
    for child in &e.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&e.tag);
    out.push('>');
}

#[cfg(test)]
#[path = "../../tests/unit/markup/node.rs"]
mod tests;
