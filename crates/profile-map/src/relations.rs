//! Relationship mapping compilation.
//!
//! For a base table, every relationship type touching it is grouped by the
//! table on the other side. Each group becomes a small subtree under the
//! root:
//!
//! ```text
//! related_<entity>        parent = root
//!   <entity>              parent = container, returnAsArray=true
//!     idno / name / relationship_type [/ entity_type]
//! ```

use indexmap::IndexMap;
use profile_model::{ENTITIES_TABLE, MappingRow, ROOT_ID, RelationshipType, entity_name};
use tracing::debug;

use crate::ids::IdAllocator;

/// Options cell of the repeatable relation item row.
pub const ARRAY_OPTION: &str = "returnAsArray=true";

const ITEM_NOTES: &str = "Élément répétable pour chaque relation";

/// A fixed field emitted under every relation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationField {
    pub code: &'static str,
    /// Appended to `<base>.<other>.` to form the source path.
    pub path: &'static str,
    pub label: &'static str,
}

/// Fields every relation item carries.
pub const RELATION_FIELDS: [RelationField; 3] = [
    RelationField {
        code: "idno",
        path: "idno",
        label: "Identifiant",
    },
    RelationField {
        code: "name",
        path: "preferred_labels.name",
        label: "Nom",
    },
    RelationField {
        code: "relationship_type",
        path: "relationship_typename",
        label: "Type de relation",
    },
];

/// Extra field for relations pointing at the entities table.
pub const ENTITY_TYPE_FIELD: RelationField = RelationField {
    code: "entity_type",
    path: "type_id",
    label: "Type d'entité",
};

/// Rows produced for one base table, plus the ID to continue from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationRows {
    pub rows: Vec<MappingRow>,
    pub next_id: u32,
}

/// Other tables related to `base_table`, in first-discovery order.
pub fn related_tables<'a>(
    relationship_types: &'a [RelationshipType],
    base_table: &str,
) -> IndexMap<&'a str, usize> {
    let mut groups: IndexMap<&str, usize> = IndexMap::new();
    for relation in relationship_types
        .iter()
        .filter(|relation| relation.touches(base_table))
    {
        *groups.entry(relation.other_table(base_table)).or_default() += 1;
    }
    groups
}

/// Compile the relation subtrees of `base_table`, numbering from `start_id`.
///
/// `start_id` must lie past the root; lower values are raised to the first
/// ID after it.
pub fn compile_relationships(
    relationship_types: &[RelationshipType],
    base_table: &str,
    start_id: u32,
) -> RelationRows {
    let mut ids = IdAllocator::starting_at(start_id);
    let rows = emit_relationships(relationship_types, base_table, &mut ids);
    RelationRows {
        rows,
        next_id: ids.peek(),
    }
}

/// Same as [`compile_relationships`], drawing IDs from a shared allocator.
pub fn emit_relationships(
    relationship_types: &[RelationshipType],
    base_table: &str,
    ids: &mut IdAllocator,
) -> Vec<MappingRow> {
    let groups = related_tables(relationship_types, base_table);
    let mut rows = Vec::new();

    for (other, relation_count) in &groups {
        let other = *other;
        let entity = entity_name(other);

        let container_id = ids.allocate();
        rows.push(MappingRow::mapping(
            container_id,
            Some(ROOT_ID),
            format!("related_{entity}"),
            "",
            "",
            format!("Relations avec {other}"),
        ));

        let item_id = ids.allocate();
        rows.push(MappingRow::mapping(
            item_id,
            Some(container_id),
            entity,
            format!("{base_table}.{other}"),
            ARRAY_OPTION,
            ITEM_NOTES,
        ));

        let extra = (other == ENTITIES_TABLE).then_some(ENTITY_TYPE_FIELD);
        for field in RELATION_FIELDS.iter().chain(extra.iter()) {
            rows.push(MappingRow::mapping(
                ids.allocate(),
                Some(item_id),
                field.code,
                format!("{base_table}.{other}.{}", field.path),
                "",
                field.label,
            ));
        }
        debug!(base_table, other, relation_count, "compiled relation group");
    }

    rows
}
