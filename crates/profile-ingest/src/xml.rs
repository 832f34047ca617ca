//! Small DOM helpers over `roxmltree` nodes.

use roxmltree::{Document, Node, ParsingOptions};

use profile_model::{ProfileError, Result};

/// Parse the profile text into a read-only DOM.
///
/// Profiles exported by Providence may carry a DOCTYPE, so DTDs are allowed.
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options).map_err(|err| ProfileError::MalformedSource {
        message: err.to_string(),
    })
}

/// All elements with the given local name, in document order.
pub fn elements_named<'a, 'input>(
    doc: &'a Document<'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    doc.descendants()
        .filter(move |node| node.is_element() && node.tag_name().name() == name)
}

/// Descendant elements (the node itself excluded) with the given local name.
pub fn descendants_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// Direct child elements with the given local name.
pub fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// First descendant element with the given local name.
pub fn first_descendant<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> Option<Node<'a, 'input>> {
    descendants_named(node, name).next()
}

/// Descendants named `name` that belong to `owner` rather than to a nested
/// element of the same kind as `owner`.
pub fn owned_descendants<'a, 'input: 'a>(
    owner: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    let owner_tag = owner.tag_name().name();
    descendants_named(owner, name).filter(move |node| {
        node.ancestors()
            .skip(1)
            .find(|ancestor| ancestor.is_element() && ancestor.tag_name().name() == owner_tag)
            == Some(owner)
    })
}

/// Concatenated text of the node and all of its descendants.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}

/// Attribute value, or an empty string when absent.
pub fn attr_or_empty(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"<root>
        <element code="outer">
            <label locale="fr_FR">Extérieur</label>
            <element code="inner">
                <label locale="fr_FR">Intérieur</label>
            </element>
        </element>
    </root>"#;

    #[test]
    fn malformed_document_is_rejected() {
        let err = parse_document("<root><open></root>").unwrap_err();
        assert!(matches!(err, ProfileError::MalformedSource { .. }));
    }

    #[test]
    fn doctype_is_accepted() {
        let doc = parse_document("<!DOCTYPE profile><profile/>").unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "profile");
    }

    #[test]
    fn owned_descendants_skip_nested_owners() {
        let doc = parse_document(NESTED).unwrap();
        let outer = elements_named(&doc, "element").next().unwrap();
        let labels: Vec<String> = owned_descendants(outer, "label").map(text_content).collect();
        assert_eq!(labels, vec!["Extérieur".to_string()]);
        assert_eq!(descendants_named(outer, "label").count(), 2);
    }

    #[test]
    fn text_content_joins_nested_text() {
        let doc = parse_document("<label>Nom <b>préféré</b></label>").unwrap();
        assert_eq!(text_content(doc.root_element()), "Nom préféré");
    }

    #[test]
    fn missing_attribute_is_empty() {
        let doc = parse_document(r#"<element code="title"/>"#).unwrap();
        let node = doc.root_element();
        assert_eq!(attr_or_empty(node, "code"), "title");
        assert_eq!(attr_or_empty(node, "datatype"), "");
    }
}
