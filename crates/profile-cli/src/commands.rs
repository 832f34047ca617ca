use std::path::Path;

use anyhow::{Context, Result};
use tracing::info_span;

use profile_cli::ProfileSession;
use profile_model::{MappingOptions, ProfileError};
use profile_report::Artifact;

use crate::cli::{FieldsArgs, MappingArgs, ProfileArg, SchemaArgs, Selection, SummaryArgs};
use crate::summary::{print_artifacts, print_fields, print_relations, print_summary, print_tables};

fn open(profile: &Path) -> Result<ProfileSession> {
    let mut session = ProfileSession::new();
    session
        .load_path(profile)
        .with_context(|| format!("load profile {}", profile.display()))?;
    Ok(session)
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let session = open(&args.source.profile)?;
    let summary = session.schema()?.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Profile: {}", args.source.profile.display());
        print_summary(&summary);
    }
    Ok(())
}

pub fn run_tables(args: &ProfileArg) -> Result<()> {
    let session = open(&args.profile)?;
    print_tables(session.schema()?);
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let session = open(&args.source.profile)?;
    let table = session
        .schema()?
        .table(&args.table)
        .ok_or_else(|| ProfileError::UnknownTable {
            table: args.table.clone(),
        })?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(table.fields())?);
    } else {
        print_fields(table);
    }
    Ok(())
}

pub fn run_relations(args: &ProfileArg) -> Result<()> {
    let session = open(&args.profile)?;
    print_relations(session.schema()?.relationship_types());
    Ok(())
}

pub fn run_mapping(args: &MappingArgs) -> Result<()> {
    let session = open(&args.source.profile)?;
    let options = MappingOptions::default()
        .with_convention(args.convention.into())
        .with_relations(!args.no_relations);
    let span = info_span!("mapping", convention = %options.convention);
    let _guard = span.enter();

    let artifacts = match &args.selection {
        Selection { table: Some(table), .. } => vec![session.mapping(table, options)?],
        Selection { all: true, .. } => session.mappings(options)?,
        _ => vec![session.combined_mapping(options.convention)?],
    };
    deliver(&args.output_dir, &artifacts)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let session = open(&args.source.profile)?;
    let span = info_span!("schema");
    let _guard = span.enter();

    let artifacts = match &args.selection {
        Selection { table: Some(table), .. } => vec![session.schema_document(table)?],
        Selection { all: true, .. } => session.schema_documents()?,
        _ => vec![session.combined_schema_document()?],
    };
    deliver(&args.output_dir, &artifacts)
}

/// Write every artifact, then report them. Nothing is reported on failure.
fn deliver(output_dir: &Path, artifacts: &[Artifact]) -> Result<()> {
    for artifact in artifacts {
        artifact.write_to(output_dir)?;
    }
    print_artifacts(output_dir, artifacts);
    Ok(())
}
