//! Profile loading: parse, extract, build.

use std::fs;
use std::path::Path;
use std::time::Instant;

use profile_model::{CanonicalSchema, Result};
use tracing::{info, info_span, warn};

use crate::builder::build_schema;
use crate::dialects::{catalog, extract_fields, relationship};
use crate::xml::parse_document;

/// Build the canonical schema of a profile document held in memory.
///
/// A document that is not well-formed XML is rejected as a whole with
/// `ProfileError::MalformedSource`; nothing is extracted from it.
pub fn parse_profile(text: &str) -> Result<CanonicalSchema> {
    let span = info_span!("parse_profile", bytes = text.len());
    let _guard = span.enter();
    let start = Instant::now();

    let doc = parse_document(text).inspect_err(|err| {
        warn!(error = %err, "profile rejected");
    })?;

    let extractions = extract_fields(&doc);
    let relationship_types = relationship::extract(&doc);
    let catalog = catalog::extract(&doc);
    let schema = build_schema(extractions, relationship_types, catalog);

    let summary = schema.summary();
    info!(
        tables = summary.total_tables,
        fields = summary.total_fields,
        relationships = summary.total_relationships,
        types = summary.total_types,
        lists = summary.total_lists,
        duration_ms = start.elapsed().as_millis(),
        "profile loaded"
    );
    Ok(schema)
}

/// Read and parse a profile file.
pub fn load_profile(path: impl AsRef<Path>) -> Result<CanonicalSchema> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    info!(path = %path.display(), "reading profile");
    parse_profile(&text)
}
