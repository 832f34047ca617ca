//! Fields derived from standalone `<typeRestriction type="ca_...">` markers.
//!
//! The marker names the target table; the field itself is described by the
//! marker's parent element.

use profile_model::Field;
use roxmltree::{Document, Node};
use tracing::debug;

use super::{RestrictionResult, TableContribution};
use crate::locale::{LocaleFallback, resolve_text};
use crate::xml::{attr_or_empty, elements_named, owned_descendants, text_content};

pub fn extract(doc: &Document<'_>) -> RestrictionResult {
    let mut result = RestrictionResult::default();
    for marker in elements_named(doc, "typeRestriction") {
        let Some(table) = marker.attribute("type").filter(|t| !t.is_empty()) else {
            continue;
        };
        let mut contribution = TableContribution::new(table);
        if let Some(field) = marker.parent_element().and_then(parent_field) {
            debug!(table, code = %field.code, "field derived from typeRestriction");
            contribution.fields.push(field);
        }
        result.contributions.push(contribution);
    }
    result
}

fn parent_field(parent: Node<'_, '_>) -> Option<Field> {
    let code = parent.attribute("code").filter(|code| !code.is_empty())?;
    let candidates = owned_descendants(parent, "label")
        .map(|label| (label.attribute("locale"), text_content(label)))
        .collect::<Vec<_>>();
    let label = resolve_text(candidates, LocaleFallback::FirstSeen);
    Some(Field::new(code, attr_or_empty(parent, "datatype"), label, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn derives_field_from_parent() {
        let doc = parse_document(
            r#"<profile>
                <element code="material" datatype="List">
                    <label locale="en_US">Material</label>
                    <label locale="fr_FR">Matériau</label>
                    <typeRestriction type="ca_objects"/>
                    <typeRestriction type="ca_occurrences"/>
                </element>
            </profile>"#,
        )
        .unwrap();
        let result = extract(&doc);
        assert_eq!(result.contributions.len(), 2);
        assert_eq!(result.contributions[1].table, "ca_occurrences");
        assert_eq!(
            result.contributions[0].fields,
            vec![Field::new("material", "List", "Matériau", "")]
        );
    }

    #[test]
    fn parent_without_code_only_creates_table() {
        let doc = parse_document(
            r#"<profile><restrictions><typeRestriction type="ca_movements"/></restrictions></profile>"#,
        )
        .unwrap();
        let result = extract(&doc);
        assert_eq!(result.contributions, vec![TableContribution::new("ca_movements")]);
    }

    #[test]
    fn marker_without_type_is_ignored() {
        let doc = parse_document(
            r#"<profile><element code="x"><typeRestriction/></element></profile>"#,
        )
        .unwrap();
        assert!(extract(&doc).contributions.is_empty());
    }
}
