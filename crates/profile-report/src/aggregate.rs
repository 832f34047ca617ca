//! Per-table and all-tables artifact production.
//!
//! Per-table variants produce one independent artifact per table in
//! ascending table-name order. Combined variants produce exactly one.

use anyhow::Result;
use profile_map::{compile_combined_mapping, compile_table_mapping};
use profile_model::{CanonicalSchema, MappingOptions, OutputConvention};
use tracing::{debug, info_span};

use crate::artifact::{
    Artifact, ArtifactKind, COMBINED_MAPPING_FILE, COMBINED_SCHEMA_FILE, mapping_file_name,
    schema_file_name,
};
use crate::schema_doc::{compile_combined_document, compile_schema_document};
use crate::sheet::render_mapping_csv;
use crate::xml::to_bytes;

pub fn mapping_artifact(
    schema: &CanonicalSchema,
    table: &str,
    options: MappingOptions,
) -> Result<Artifact> {
    let sheet = compile_table_mapping(schema, table, options)?;
    let bytes = render_mapping_csv(&sheet)?;
    let artifact = Artifact {
        kind: ArtifactKind::Mapping {
            table: table.to_string(),
            include_relations: options.include_relations,
        },
        file_name: mapping_file_name(table, options.include_relations),
        bytes,
        element_count: sheet.element_count(),
    };
    debug!(file = %artifact.file_name, rows = sheet.rows.len(), "rendered mapping");
    Ok(artifact)
}

pub fn mapping_artifacts(
    schema: &CanonicalSchema,
    options: MappingOptions,
) -> Result<Vec<Artifact>> {
    let span = info_span!("mapping_artifacts", convention = %options.convention);
    let _guard = span.enter();
    schema
        .table_names()
        .map(|table| mapping_artifact(schema, table, options))
        .collect()
}

pub fn combined_mapping_artifact(
    schema: &CanonicalSchema,
    convention: OutputConvention,
) -> Result<Artifact> {
    let sheet = compile_combined_mapping(schema, convention);
    let bytes = render_mapping_csv(&sheet)?;
    Ok(Artifact {
        kind: ArtifactKind::CombinedMapping {
            tables: schema.summary().total_tables,
        },
        file_name: COMBINED_MAPPING_FILE.to_string(),
        bytes,
        element_count: sheet.element_count(),
    })
}

pub fn schema_artifact(schema: &CanonicalSchema, table: &str) -> Result<Artifact> {
    let document = compile_schema_document(schema, table)?;
    let fields = schema.fields_of(table).map_or(0, <[_]>::len);
    Ok(Artifact {
        kind: ArtifactKind::Schema {
            table: table.to_string(),
        },
        file_name: schema_file_name(table),
        bytes: to_bytes(&document)?,
        element_count: fields,
    })
}

pub fn schema_artifacts(schema: &CanonicalSchema) -> Result<Vec<Artifact>> {
    let span = info_span!("schema_artifacts");
    let _guard = span.enter();
    schema
        .table_names()
        .map(|table| schema_artifact(schema, table))
        .collect()
}

pub fn combined_schema_artifact(schema: &CanonicalSchema) -> Result<Artifact> {
    let document = compile_combined_document(schema);
    let summary = schema.summary();
    Ok(Artifact {
        kind: ArtifactKind::CombinedSchema {
            tables: summary.total_tables,
        },
        file_name: COMBINED_SCHEMA_FILE.to_string(),
        bytes: to_bytes(&document)?,
        element_count: summary.total_fields,
    })
}
