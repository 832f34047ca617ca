//! Structured XML tree and its writer.
//!
//! Documents are assembled as [`XmlNode`] trees and serialised by
//! [`write_document`], the only place that emits markup. Text content is
//! escaped for `&`, `<` and `>`; attribute values are fully escaped.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// An element with attributes, optional text, and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// An element holding only text.
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

/// Write `root` as a complete document with an XML declaration.
pub fn write_document<W: Write>(root: &XmlNode, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("write xml declaration")?;
    write_node(&mut writer, root)
}

/// Serialise `root` into a byte buffer.
pub fn to_bytes(root: &XmlNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_document(root, &mut out)?;
    Ok(out)
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &XmlNode) -> Result<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.text.is_none() && node.children.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .with_context(|| format!("write <{}/>", node.name))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .with_context(|| format!("write <{}>", node.name))?;
    if let Some(text) = &node.text {
        let escaped = partial_escape(text.as_str());
        writer
            .write_event(Event::Text(BytesText::from_escaped(escaped)))
            .with_context(|| format!("write text of <{}>", node.name))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .with_context(|| format!("write </{}>", node.name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &XmlNode) -> String {
        String::from_utf8(to_bytes(node).unwrap()).unwrap()
    }

    #[test]
    fn escapes_markup_characters_in_text() {
        let node = XmlNode::text_element("label", "Poids <brut> & \"net\"");
        let xml = render(&node);
        assert!(xml.contains("<label>Poids &lt;brut&gt; &amp; \"net\"</label>"));
    }

    #[test]
    fn childless_node_is_self_closing() {
        let node = XmlNode::new("fields");
        assert!(render(&node).ends_with("<fields/>"));
    }

    #[test]
    fn nested_document_layout() {
        let node = XmlNode::new("schema")
            .with_attribute("table", "ca_objects")
            .with_child(XmlNode::text_element("code", "idno"));
        let xml = render(&node);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<schema table=\"ca_objects\">\n  <code>idno</code>\n</schema>"));
    }

    #[test]
    fn accessors() {
        let node = XmlNode::new("field")
            .with_attribute("k", "v")
            .with_child(XmlNode::text_element("code", "x"));
        assert_eq!(node.name(), "field");
        assert_eq!(node.attribute("k"), Some("v"));
        assert_eq!(node.child("code").and_then(XmlNode::text), Some("x"));
        assert!(node.child("label").is_none());
    }
}
