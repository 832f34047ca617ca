//! Tests for profile-model types.

use std::collections::BTreeMap;

use profile_model::{
    CanonicalSchema, Field, MappingRow, MappingSheet, RelationshipType, Table, entity_name,
};

fn sample_schema() -> CanonicalSchema {
    let mut objects = Table::new("ca_objects");
    objects.push_unique(Field::new("idno", "Text", "Identifiant", "Identifiant unique"));
    objects.push_unique(Field::new("title", "Text", "Titre", ""));
    let mut tables = BTreeMap::new();
    tables.insert("ca_objects".to_string(), objects);
    tables.insert("ca_entities".to_string(), Table::new("ca_entities"));
    let relations = vec![RelationshipType {
        code: "creator".to_string(),
        left_table: "ca_objects".to_string(),
        right_table: "ca_entities".to_string(),
        label_left: "créateur".to_string(),
        label_right: "créateur de".to_string(),
    }];
    CanonicalSchema::new(tables, relations, vec![], vec![], 0)
}

#[test]
fn table_names_are_sorted() {
    let schema = sample_schema();
    let names: Vec<&str> = schema.table_names().collect();
    assert_eq!(names, vec!["ca_entities", "ca_objects"]);
}

#[test]
fn fields_of_preserves_insertion_order() {
    let schema = sample_schema();
    let codes: Vec<&str> = schema
        .fields_of("ca_objects")
        .unwrap()
        .iter()
        .map(|f| f.code.as_str())
        .collect();
    assert_eq!(codes, vec!["idno", "title"]);
    assert!(schema.fields_of("ca_missing").is_none());
}

#[test]
fn schema_serializes() {
    let schema = sample_schema();
    let json = serde_json::to_string(&schema).expect("serialize schema");
    let round: CanonicalSchema = serde_json::from_str(&json).expect("deserialize schema");
    assert_eq!(round, schema);
    assert_eq!(round.summary().total_relationships, 1);
}

#[test]
fn sheet_setting_lookup() {
    let sheet = MappingSheet {
        rows: vec![
            MappingRow::mapping(1, None, "record", "", "", "Root element for export"),
            MappingRow::blank(),
            MappingRow::settings_header(),
            MappingRow::setting("table", "ca_objects", "Sets the table", ""),
        ],
        field_rows: 0,
        relation_rows: 0,
    };
    assert_eq!(sheet.mapping_rows().count(), 1);
    assert_eq!(sheet.setting("table"), Some("ca_objects"));
    assert_eq!(sheet.setting("code"), None);
}

#[test]
fn entity_name_of_storage_locations() {
    assert_eq!(entity_name("ca_storage_locations"), "storage_locations");
}
