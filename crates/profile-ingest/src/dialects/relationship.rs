//! Relationship types from `<relationshipTable name="objects_x_entities">`.

use profile_model::{RelationshipType, TABLE_PREFIX};
use roxmltree::{Document, Node};
use tracing::debug;

use crate::locale::first_known_text;
use crate::xml::{descendants_named, elements_named, first_descendant, owned_descendants, text_content};

/// Separator between the two entity names of a relationship table.
pub const RELATION_SEPARATOR: &str = "_x_";

pub fn extract(doc: &Document<'_>) -> Vec<RelationshipType> {
    let mut relationship_types = Vec::new();
    for container in elements_named(doc, "relationshipTable") {
        let name = container.attribute("name").unwrap_or_default();
        let Some((left, right)) = split_relation_name(name) else {
            debug!(name, "skipping relationshipTable with malformed name");
            continue;
        };
        let left_table = format!("{TABLE_PREFIX}{left}");
        let right_table = format!("{TABLE_PREFIX}{right}");
        for node in descendants_named(container, "type") {
            relationship_types.push(relationship_type(node, &left_table, &right_table));
        }
    }
    debug!(count = relationship_types.len(), "extracted relationship types");
    relationship_types
}

/// Split `left_x_right` into exactly two parts.
pub fn split_relation_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split(RELATION_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Some((left, right)),
        _ => None,
    }
}

fn relationship_type(node: Node<'_, '_>, left_table: &str, right_table: &str) -> RelationshipType {
    let code = node.attribute("code").unwrap_or_default().to_string();
    let labels: Vec<Node<'_, '_>> = owned_descendants(node, "label").collect();
    let side = |element: &str| {
        first_known_text(labels.iter().map(|label| {
            let text = first_descendant(*label, element)
                .map(text_content)
                .unwrap_or_default();
            (label.attribute("locale"), text)
        }))
    };
    let label_left = side("typename").unwrap_or_else(|| code.clone());
    let label_right = side("typename_reverse").unwrap_or_else(|| code.clone());
    RelationshipType {
        code,
        left_table: left_table.to_string(),
        right_table: right_table.to_string(),
        label_left,
        label_right,
    }
}
