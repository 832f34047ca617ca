//! Legacy dialect: `<elementSet code="ca_objects">` wrapping `<element>`s
//! with flat, locale-tagged `<label>` and `<description>` children.

use profile_model::Field;
use roxmltree::{Document, Node};
use tracing::debug;

use super::{ElementSetResult, TableContribution};
use crate::locale::{LocaleFallback, resolve_text};
use crate::xml::{attr_or_empty, descendants_named, elements_named, owned_descendants, text_content};

pub fn extract(doc: &Document<'_>) -> ElementSetResult {
    let mut result = ElementSetResult::default();
    for set in elements_named(doc, "elementSet") {
        let Some(table) = set.attribute("code").filter(|code| !code.is_empty()) else {
            debug!("skipping elementSet without table code");
            continue;
        };
        let mut contribution = TableContribution::new(table);
        for element in descendants_named(set, "element") {
            if let Some(field) = element_field(element) {
                contribution.fields.push(field);
            }
        }
        debug!(
            table,
            field_count = contribution.fields.len(),
            "extracted elementSet"
        );
        result.contributions.push(contribution);
    }
    result
}

fn element_field(element: Node<'_, '_>) -> Option<Field> {
    let code = attr_or_empty(element, "code");
    if code.is_empty() {
        debug!("skipping element without code");
        return None;
    }
    let label = localized(element, "label");
    let description = localized(element, "description");
    Some(Field::new(
        code,
        attr_or_empty(element, "datatype"),
        label,
        description,
    ))
}

fn localized(element: Node<'_, '_>, name: &str) -> String {
    let candidates = owned_descendants(element, name)
        .map(|node| (node.attribute("locale"), text_content(node)))
        .collect::<Vec<_>>();
    resolve_text(candidates, LocaleFallback::FirstSeen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn reads_fields_with_locale_preference() {
        let doc = parse_document(
            r#"<profile><elementSets>
                <elementSet code="ca_objects">
                    <element code="title" datatype="Text">
                        <label locale="en_US">Title</label>
                        <label locale="fr_FR">Titre</label>
                        <description locale="de_DE">Titel</description>
                    </element>
                    <element code="dimensions" datatype="Container"/>
                </elementSet>
            </elementSets></profile>"#,
        )
        .unwrap();
        let result = extract(&doc);
        assert_eq!(result.contributions.len(), 1);
        let objects = &result.contributions[0];
        assert_eq!(objects.table, "ca_objects");
        assert_eq!(objects.fields[0], Field::new("title", "Text", "Titre", "Titel"));
        assert_eq!(objects.fields[1].label, "dimensions");
        assert_eq!(objects.fields[1].description, "");
    }

    #[test]
    fn empty_set_still_contributes_table() {
        let doc = parse_document(r#"<profile><elementSet code="ca_loans"/></profile>"#).unwrap();
        let result = extract(&doc);
        assert_eq!(result.contributions, vec![TableContribution::new("ca_loans")]);
    }

    #[test]
    fn set_without_code_is_skipped() {
        let doc = parse_document(
            r#"<profile><elementSet><element code="x" datatype="Text"/></elementSet></profile>"#,
        )
        .unwrap();
        assert!(extract(&doc).contributions.is_empty());
    }
}
