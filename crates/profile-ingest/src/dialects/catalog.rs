//! Record types and vocabulary lists declared by the profile.

use profile_model::{ListItem, TypeEntry};
use roxmltree::Document;

use crate::xml::{attr_or_empty, descendants_named, elements_named, first_descendant, text_content};

/// Types and list items found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub types: Vec<TypeEntry>,
    pub list_items: Vec<ListItem>,
    /// Number of `<list>` elements, including lists without items.
    pub list_count: usize,
}

pub fn extract(doc: &Document<'_>) -> Catalog {
    let types = elements_named(doc, "type")
        .map(|node| TypeEntry {
            table: node
                .parent_element()
                .map(|parent| parent.tag_name().name().to_string())
                .unwrap_or_default(),
            code: attr_or_empty(node, "code"),
            name: first_descendant(node, "label")
                .map(text_content)
                .unwrap_or_default(),
            parent: attr_or_empty(node, "parent"),
        })
        .collect();

    let mut list_items = Vec::new();
    let mut list_count = 0;
    for list in elements_named(doc, "list") {
        list_count += 1;
        let list_code = attr_or_empty(list, "code");
        for item in descendants_named(list, "item") {
            let code = item
                .attribute("idno")
                .filter(|idno| !idno.is_empty())
                .or_else(|| item.attribute("code"))
                .unwrap_or_default()
                .to_string();
            list_items.push(ListItem {
                list: list_code.clone(),
                code,
                label: first_descendant(item, "label")
                    .map(text_content)
                    .unwrap_or_default(),
            });
        }
    }

    Catalog {
        types,
        list_items,
        list_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn collects_types_and_list_items() {
        let doc = parse_document(
            r#"<profile>
                <lists>
                    <list code="object_types">
                        <items>
                            <item idno="artwork"><labels><label locale="fr_FR"><name_singular>Oeuvre</name_singular></label></labels></item>
                            <item code="document"/>
                        </items>
                    </list>
                    <list code="empty"/>
                </lists>
                <restrictions><types parent="ca_objects"><type code="image" parent="root"><label>Image</label></type></types></restrictions>
            </profile>"#,
        )
        .unwrap();
        let catalog = extract(&doc);
        assert_eq!(catalog.list_count, 2);
        assert_eq!(catalog.list_items.len(), 2);
        assert_eq!(catalog.list_items[0].code, "artwork");
        assert_eq!(catalog.list_items[0].label, "Oeuvre");
        assert_eq!(catalog.list_items[1].code, "document");
        assert_eq!(
            catalog.types,
            vec![TypeEntry {
                table: "types".to_string(),
                code: "image".to_string(),
                name: "Image".to_string(),
                parent: "root".to_string(),
            }]
        );
    }
}
