pub mod error;
pub mod mapping;
pub mod schema;

pub use error::{ProfileError, Result};
pub use mapping::{
    MAPPING_HEADER, MappingOptions, MappingRow, MappingSheet, OutputConvention, ROOT_ELEMENT,
    ROOT_ID, RuleType,
};
pub use schema::{
    CanonicalSchema, ENTITIES_TABLE, Field, ListItem, RelationshipType, SchemaSummary,
    TABLE_PREFIX, Table, TypeEntry, entity_name,
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn summary_counts() {
        let mut objects = Table::new("ca_objects");
        objects.push_unique(Field::new("idno", "Text", "Identifiant", ""));
        objects.push_unique(Field::new("title", "Text", "Titre", ""));
        let places = Table::new("ca_places");
        let mut tables = BTreeMap::new();
        tables.insert(objects.name.clone(), objects);
        tables.insert(places.name.clone(), places);
        let schema = CanonicalSchema::new(tables, vec![], vec![], vec![], 3);

        let summary = schema.summary();
        assert_eq!(summary.total_tables, 2);
        assert_eq!(summary.total_fields, 2);
        assert_eq!(summary.total_relationships, 0);
        assert_eq!(summary.total_lists, 3);
    }

    #[test]
    fn error_categories() {
        assert!(ProfileError::NoSchemaLoaded.is_missing_selection());
        assert!(
            ProfileError::UnknownTable {
                table: "ca_x".to_string()
            }
            .is_missing_selection()
        );
        let malformed = ProfileError::MalformedSource {
            message: "unexpected end of stream".to_string(),
        };
        assert!(!malformed.is_missing_selection());
        assert_eq!(
            malformed.to_string(),
            "malformed profile document: unexpected end of stream"
        );
    }
}
