//! One loaded profile and the artifacts derived from it.

use std::path::Path;

use anyhow::Result;
use profile_ingest::{load_profile, parse_profile};
use profile_model::{CanonicalSchema, MappingOptions, OutputConvention, ProfileError};
use profile_report::{
    Artifact, combined_mapping_artifact, combined_schema_artifact, mapping_artifact,
    mapping_artifacts, schema_artifact, schema_artifacts,
};
use tracing::info;

/// Owns at most one [`CanonicalSchema`].
///
/// A successful load replaces the schema wholesale. A failed load leaves the
/// previous schema in place.
#[derive(Debug, Default)]
pub struct ProfileSession {
    schema: Option<CanonicalSchema>,
}

impl ProfileSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_str(&mut self, text: &str) -> profile_model::Result<&CanonicalSchema> {
        let schema = parse_profile(text)?;
        Ok(self.replace(schema))
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> profile_model::Result<&CanonicalSchema> {
        let schema = load_profile(path)?;
        Ok(self.replace(schema))
    }

    fn replace(&mut self, schema: CanonicalSchema) -> &CanonicalSchema {
        if self.schema.is_some() {
            info!("replacing loaded profile");
        }
        self.schema.insert(schema)
    }

    pub fn is_loaded(&self) -> bool {
        self.schema.is_some()
    }

    pub fn schema(&self) -> profile_model::Result<&CanonicalSchema> {
        self.schema.as_ref().ok_or(ProfileError::NoSchemaLoaded)
    }

    pub fn mapping(&self, table: &str, options: MappingOptions) -> Result<Artifact> {
        mapping_artifact(self.schema()?, table, options)
    }

    pub fn mappings(&self, options: MappingOptions) -> Result<Vec<Artifact>> {
        mapping_artifacts(self.schema()?, options)
    }

    pub fn combined_mapping(&self, convention: OutputConvention) -> Result<Artifact> {
        combined_mapping_artifact(self.schema()?, convention)
    }

    pub fn schema_document(&self, table: &str) -> Result<Artifact> {
        schema_artifact(self.schema()?, table)
    }

    pub fn schema_documents(&self) -> Result<Vec<Artifact>> {
        schema_artifacts(self.schema()?)
    }

    pub fn combined_schema_document(&self) -> Result<Artifact> {
        combined_schema_artifact(self.schema()?)
    }
}
