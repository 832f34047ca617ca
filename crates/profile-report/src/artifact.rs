//! Named output units and their delivery to disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// File name of the all-tables mapping.
pub const COMBINED_MAPPING_FILE: &str = "Data_Export_Mapping_ALL_TABLES.csv";

/// File name of the all-tables schema document.
pub const COMBINED_SCHEMA_FILE: &str = "schema_ALL_TABLES.xml";

pub fn mapping_file_name(table: &str, include_relations: bool) -> String {
    let suffix = if include_relations {
        "_with_relations"
    } else {
        ""
    };
    format!("Data_Export_Mapping_{table}{suffix}.csv")
}

pub fn schema_file_name(table: &str) -> String {
    format!("schema_{table}.xml")
}

/// What an artifact contains; drives the completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    Mapping {
        table: String,
        include_relations: bool,
    },
    CombinedMapping {
        tables: usize,
    },
    Schema {
        table: String,
    },
    CombinedSchema {
        tables: usize,
    },
}

/// One downloadable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Fields, plus relation rows when relations are included.
    pub element_count: usize,
}

impl Artifact {
    /// Contents as text, without the leading byte-order mark.
    pub fn text(&self) -> String {
        let body = self
            .bytes
            .strip_prefix(crate::sheet::UTF8_BOM)
            .unwrap_or(&self.bytes[..]);
        String::from_utf8_lossy(body).into_owned()
    }

    /// Write the artifact into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes).with_context(|| format!("write {}", path.display()))?;
        info!(
            path = %path.display(),
            bytes = self.bytes.len(),
            elements = self.element_count,
            "artifact written"
        );
        Ok(path)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ArtifactKind::Mapping {
                table,
                include_relations,
            } => {
                write!(f, "mapping for {table}: {} elements", self.element_count)?;
                if *include_relations {
                    f.write_str(" (relations included)")?;
                }
                Ok(())
            }
            ArtifactKind::CombinedMapping { tables } => write!(
                f,
                "combined mapping: {tables} tables, {} fields",
                self.element_count
            ),
            ArtifactKind::Schema { table } => {
                write!(f, "schema for {table}: {} fields", self.element_count)
            }
            ArtifactKind::CombinedSchema { tables } => write!(
                f,
                "combined schema: {tables} tables, {} fields",
                self.element_count
            ),
        }
    }
}
