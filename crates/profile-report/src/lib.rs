//! Profile output rendering.
//!
//! Two output families, each with per-table and all-tables variants:
//!
//! - **Mapping CSV**: 9-column flat export mappings for the import tool
//! - **Schema XML**: field metadata documents for ontology alignment

pub mod aggregate;
pub mod artifact;
pub mod schema_doc;
pub mod sheet;
pub mod xml;

pub use aggregate::{
    combined_mapping_artifact, combined_schema_artifact, mapping_artifact, mapping_artifacts,
    schema_artifact, schema_artifacts,
};
pub use artifact::{
    Artifact, ArtifactKind, COMBINED_MAPPING_FILE, COMBINED_SCHEMA_FILE, mapping_file_name,
    schema_file_name,
};
pub use schema_doc::{compile_combined_document, compile_schema_document, compile_schema_node};
pub use sheet::{UTF8_BOM, render_mapping_csv};
pub use xml::{XmlNode, to_bytes, write_document};
