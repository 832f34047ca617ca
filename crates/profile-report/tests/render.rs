//! Rendering tests over a profile ingested end to end.

use profile_ingest::parse_profile;
use profile_model::{CanonicalSchema, MappingOptions, OutputConvention};
use profile_report::{
    COMBINED_MAPPING_FILE, COMBINED_SCHEMA_FILE, UTF8_BOM, combined_mapping_artifact,
    combined_schema_artifact, mapping_artifact, mapping_artifacts, schema_artifact,
    schema_artifacts,
};

const MIXED_PROFILE: &str = include_str!("../../profile-ingest/tests/fixtures/mixed_profile.xml");

fn schema() -> CanonicalSchema {
    parse_profile(MIXED_PROFILE).unwrap()
}

#[test]
fn small_table_mapping_csv() {
    let artifact = mapping_artifact(&schema(), "ca_tour_stops", MappingOptions::default()).unwrap();
    assert_eq!(
        artifact.file_name,
        "Data_Export_Mapping_ca_tour_stops_with_relations.csv"
    );
    assert!(artifact.bytes.starts_with(UTF8_BOM));
    assert_eq!(artifact.element_count, 1);
    insta::assert_snapshot!(artifact.text(), @r#"
    "Rule type","ID","Parent ID","Element","Source","Options","Notes","Original values","Replacement values"
    "Mapping","1","","record","","","Root element for export","",""
    "Mapping","2","1","material","ca_tour_stops.material","","Matériau (nouveau)","",""
    "","","","","","","","",""
    "","","","","","","","",""
    "","","","","","","","",""
    "","Setting","Setting Value","Description","Notes","","","",""
    "Setting","code","export_tour_stops_xml","Alphanumeric code of the mapping","Arbitrary, no special characters or spaces","","","",""
    "Setting","name","Export ca_tour_stops (XML) avec relations","Human readable name of the mapping","Arbitrary text","","","",""
    "Setting","table","ca_tour_stops","Sets the table for the exported data","Corresponds to CollectiveAccess Basic Tables","","","",""
    "Setting","exporter_format","XML","Set exporter type","XML, CSV or MARC","","","",""
    "#);
}

#[test]
fn objects_mapping_counts_relation_rows() {
    let schema = schema();
    let with = mapping_artifact(&schema, "ca_objects", MappingOptions::default()).unwrap();
    // 8 fields, entities group (6 rows) and places group (5 rows).
    assert_eq!(with.element_count, 19);
    let text = with.text();
    let entities = text.find("\"related_entities\"").unwrap();
    let places = text.find("\"related_places\"").unwrap();
    assert!(entities < places);
    assert!(text.contains("\"Mapping\",\"10\",\"1\",\"related_entities\""));

    let without = mapping_artifact(
        &schema,
        "ca_objects",
        MappingOptions::default().with_relations(false),
    )
    .unwrap();
    assert_eq!(without.file_name, "Data_Export_Mapping_ca_objects.csv");
    assert_eq!(without.element_count, 8);
    assert!(!without.text().contains("related_"));
}

#[test]
fn readable_mapping_uses_labels() {
    let options = MappingOptions::default()
        .with_convention(OutputConvention::Readable)
        .with_relations(false);
    let artifact = mapping_artifact(&schema(), "ca_objects", options).unwrap();
    let text = artifact.text();
    assert!(text.contains(
        "\"Mapping\",\"7\",\"1\",\"Note de titre\",\"ca_objects.title_note\",\"\",\"Note de titre - Remarques & précisions\""
    ));
    assert!(text.contains("\"exporter_format\",\"CSV\""));
}

#[test]
fn rendering_is_byte_identical() {
    let schema = schema();
    let first = mapping_artifact(&schema, "ca_objects", MappingOptions::default()).unwrap();
    let second = mapping_artifact(&schema, "ca_objects", MappingOptions::default()).unwrap();
    assert_eq!(first.bytes, second.bytes);

    let first = schema_artifact(&schema, "ca_objects").unwrap();
    let second = schema_artifact(&schema, "ca_objects").unwrap();
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn schema_document_round_trips_text() {
    let artifact = schema_artifact(&schema(), "ca_objects").unwrap();
    assert_eq!(artifact.file_name, "schema_ca_objects.xml");
    assert_eq!(artifact.element_count, 8);

    let text = artifact.text();
    assert!(text.contains("<description>Remarques &amp; précisions</description>"));

    let doc = roxmltree::Document::parse(&text).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "schema");
    assert_eq!(root.attribute("table"), Some("ca_objects"));
    let fields: Vec<_> = root
        .descendants()
        .filter(|node| node.has_tag_name("field"))
        .collect();
    assert_eq!(fields.len(), 8);

    let note = fields
        .iter()
        .find(|field| {
            field
                .children()
                .any(|child| child.has_tag_name("code") && child.text() == Some("title_note"))
        })
        .unwrap();
    let description = note
        .children()
        .find(|child| child.has_tag_name("description"))
        .and_then(|child| child.text());
    assert_eq!(description, Some("Remarques & précisions"));

    let material = fields[6];
    assert!(
        !material
            .children()
            .any(|child| child.has_tag_name("description"))
    );
}

#[test]
fn unknown_table_produces_no_artifact() {
    let err = schema_artifact(&schema(), "ca_nowhere").unwrap_err();
    let profile_err = err.downcast_ref::<profile_model::ProfileError>().unwrap();
    assert!(profile_err.is_missing_selection());
    assert!(mapping_artifact(&schema(), "ca_nowhere", MappingOptions::default()).is_err());
}

#[test]
fn per_table_artifacts_in_name_order() {
    let schema = schema();
    let names: Vec<String> = mapping_artifacts(&schema, MappingOptions::default())
        .unwrap()
        .into_iter()
        .map(|artifact| artifact.file_name)
        .collect();
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Data_Export_Mapping_ca_collections_with_relations.csv");

    let schemas = schema_artifacts(&schema).unwrap();
    let names: Vec<&str> = schemas.iter().map(|a| a.file_name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn combined_outputs() {
    let schema = schema();
    let mapping = combined_mapping_artifact(&schema, OutputConvention::Technical).unwrap();
    assert_eq!(mapping.file_name, COMBINED_MAPPING_FILE);
    assert_eq!(mapping.element_count, 51);
    assert_eq!(
        mapping.to_string(),
        "combined mapping: 10 tables, 51 fields"
    );
    assert!(mapping.text().contains("\"Mapping\",\"2\",\"1\",\"ca_collections\""));

    let document = combined_schema_artifact(&schema).unwrap();
    assert_eq!(document.file_name, COMBINED_SCHEMA_FILE);
    let text = document.text();
    let doc = roxmltree::Document::parse(&text).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "schemas");
    let tables: Vec<&str> = root
        .children()
        .filter(|node| node.has_tag_name("schema"))
        .filter_map(|node| node.attribute("table"))
        .collect();
    assert_eq!(tables.len(), 10);
    assert_eq!(tables[0], "ca_collections");
    assert_eq!(tables[9], "ca_tour_stops");
}

#[test]
fn artifacts_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("exports");
    let artifact = combined_schema_artifact(&schema()).unwrap();
    let path = artifact.write_to(&out).unwrap();
    assert_eq!(path, out.join(COMBINED_SCHEMA_FILE));
    assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
}
