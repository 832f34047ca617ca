//! Current dialect: `<metadataElement code datatype>` with nested
//! `<labels><label locale><name/><description/></label></labels>` and the
//! tables it applies to under `<typeRestrictions><restriction><table>`.

use profile_model::Field;
use roxmltree::{Document, Node};
use tracing::debug;

use super::{MetadataElementResult, TableContribution};
use crate::locale::LocaleRank;
use crate::xml::{attr_or_empty, elements_named, first_descendant, owned_descendants, text_content};

/// Name/description pair carried by one `<label>` of a metadata element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LabelBlock {
    name: Option<String>,
    description: Option<String>,
}

impl LabelBlock {
    fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// French overwrites each slot it carries. English fills both slots only
    /// while no name is set and it carries a name itself. Other locales are
    /// ignored.
    fn merge(&mut self, rank: LocaleRank, block: LabelBlock) {
        match rank {
            LocaleRank::French => {
                if block.name.is_some() {
                    self.name = block.name;
                }
                if block.description.is_some() {
                    self.description = block.description;
                }
            }
            LocaleRank::English if !self.has_name() && block.name.is_some() => {
                self.name = block.name;
                if block.description.is_some() {
                    self.description = block.description;
                }
            }
            LocaleRank::English | LocaleRank::Other => {}
        }
    }
}

pub fn extract(doc: &Document<'_>) -> MetadataElementResult {
    let mut result = MetadataElementResult::default();
    for element in elements_named(doc, "metadataElement") {
        let code = attr_or_empty(element, "code");
        let tables = restricted_tables(element);
        let field = if code.is_empty() {
            debug!("metadataElement without code; only its tables are registered");
            None
        } else {
            let block = resolve_label(element);
            Some(Field::new(
                code.as_str(),
                attr_or_empty(element, "datatype"),
                block.name.unwrap_or_default(),
                block.description.unwrap_or_default(),
            ))
        };
        debug!(
            code = %code,
            table_count = tables.len(),
            "extracted metadataElement"
        );
        for table in tables {
            let mut contribution = TableContribution::new(table);
            if let Some(field) = &field {
                contribution.fields.push(field.clone());
            }
            result.contributions.push(contribution);
        }
    }
    result
}

/// Name and description resolved slot by slot over the element's labels.
fn resolve_label(element: Node<'_, '_>) -> LabelBlock {
    owned_descendants(element, "label")
        .filter(|label| {
            label
                .parent_element()
                .is_some_and(|parent| parent.tag_name().name() == "labels")
        })
        .fold(LabelBlock::default(), |mut resolved, label| {
            let block = LabelBlock {
                name: first_descendant(label, "name").map(text_content),
                description: first_descendant(label, "description").map(text_content),
            };
            resolved.merge(LocaleRank::of(label.attribute("locale")), block);
            resolved
        })
}

fn restricted_tables(element: Node<'_, '_>) -> Vec<String> {
    owned_descendants(element, "restriction")
        .filter(|restriction| {
            restriction
                .parent_element()
                .is_some_and(|parent| parent.tag_name().name() == "typeRestrictions")
        })
        .filter_map(|restriction| first_descendant(restriction, "table"))
        .map(|table| text_content(table).trim().to_string())
        .filter(|table| !table.is_empty())
        .collect()
}
