//! Canonical schema builder.
//!
//! Reduces the tagged dialect extractions into one schema. Extractions are
//! merged in precedence order (elementSet, metadataElement, typeRestriction)
//! and a field is only added to a table when no field with the same code is
//! already there, so the first writer wins.

use std::collections::BTreeMap;

use profile_model::{CanonicalSchema, Field, RelationshipType, Table};
use tracing::debug;

use crate::dialects::Extraction;
use crate::dialects::catalog::Catalog;

/// Tables that always exist and always carry the intrinsic fields.
pub const BASE_TABLES: [&str; 9] = [
    "ca_objects",
    "ca_entities",
    "ca_collections",
    "ca_occurrences",
    "ca_places",
    "ca_storage_locations",
    "ca_loans",
    "ca_movements",
    "ca_list_items",
];

/// Fields every base table has natively, in output order.
pub fn intrinsic_fields() -> Vec<Field> {
    vec![
        Field::new("idno", "Text", "Identifiant", "Identifiant unique"),
        Field::new("preferred_labels", "Text", "Nom préféré", "Label principal"),
        Field::new("type_id", "List", "Type", "Type d'enregistrement"),
        Field::new("access", "Integer", "Accès", "Niveau d'accès"),
        Field::new("status", "Integer", "Statut", "Statut"),
    ]
}

/// Incremental reducer over dialect extractions.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    tables: BTreeMap<String, Table>,
    relationship_types: Vec<RelationshipType>,
    catalog: Catalog,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one extraction; returns how many fields were accepted.
    ///
    /// Callers merging several extractions should use [`build_schema`],
    /// which applies them in precedence order.
    pub fn merge(&mut self, extraction: Extraction) -> usize {
        let dialect = extraction.dialect();
        let offered = extraction.field_count();
        let mut accepted = 0;
        for contribution in extraction.into_contributions() {
            let table = self
                .tables
                .entry(contribution.table.clone())
                .or_insert_with(|| Table::new(contribution.table));
            for field in contribution.fields {
                if table.push_unique(field) {
                    accepted += 1;
                }
            }
        }
        debug!(dialect, offered, accepted, "merged extraction");
        accepted
    }

    #[must_use]
    pub fn with_relationships(mut self, relationship_types: Vec<RelationshipType>) -> Self {
        self.relationship_types = relationship_types;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Add the base tables and their intrinsic fields, then freeze.
    pub fn build(mut self) -> CanonicalSchema {
        let intrinsics = intrinsic_fields();
        for name in BASE_TABLES {
            let table = self
                .tables
                .entry(name.to_string())
                .or_insert_with(|| Table::new(name));
            let inserted = table.prepend_unique(&intrinsics);
            debug!(table = name, inserted, "added intrinsic fields");
        }
        CanonicalSchema::new(
            self.tables,
            self.relationship_types,
            self.catalog.types,
            self.catalog.list_items,
            self.catalog.list_count,
        )
    }
}

/// Reduce all extractions of one document into a canonical schema.
pub fn build_schema(
    mut extractions: Vec<Extraction>,
    relationship_types: Vec<RelationshipType>,
    catalog: Catalog,
) -> CanonicalSchema {
    extractions.sort_by_key(Extraction::precedence);
    let mut builder = SchemaBuilder::new();
    for extraction in extractions {
        builder.merge(extraction);
    }
    builder
        .with_relationships(relationship_types)
        .with_catalog(catalog)
        .build()
}
