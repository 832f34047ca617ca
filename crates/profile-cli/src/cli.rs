//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use profile_model::OutputConvention;

#[derive(Parser)]
#[command(
    name = "ca-profile",
    version,
    about = "CollectiveAccess profile extractor - schema summary and export mappings",
    long_about = "Extract the table/field structure of a CollectiveAccess installation profile.\n\n\
                  Understands legacy elementSet, metadataElement and typeRestriction profiles.\n\
                  Generates flat export mapping CSV files and schema XML documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print table, field, relationship, type and list counts.
    Summary(SummaryArgs),

    /// List tables with their field counts.
    Tables(ProfileArg),

    /// List the fields of one table in output order.
    Fields(FieldsArgs),

    /// List relationship types.
    Relations(ProfileArg),

    /// Generate flat export mapping CSV files.
    Mapping(MappingArgs),

    /// Generate schema XML documents.
    Schema(SchemaArgs),
}

#[derive(Args)]
pub struct ProfileArg {
    /// Path to the profile XML document.
    #[arg(value_name = "PROFILE")]
    pub profile: PathBuf,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: ProfileArg,

    /// Print the counters as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub source: ProfileArg,

    /// Table name, e.g. ca_objects.
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Print the fields as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// Which tables an output covers.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Selection {
    /// One table.
    #[arg(long = "table", value_name = "TABLE")]
    pub table: Option<String>,

    /// One file per table.
    #[arg(long = "all")]
    pub all: bool,

    /// A single file covering every table.
    #[arg(long = "combined")]
    pub combined: bool,
}

#[derive(Args)]
pub struct MappingArgs {
    #[command(flatten)]
    pub source: ProfileArg,

    #[command(flatten)]
    pub selection: Selection,

    /// Element naming convention: codes for XML exporters, labels for CSV exporters.
    #[arg(long = "convention", value_enum, default_value = "technical")]
    pub convention: ConventionArg,

    /// Leave relationship subtrees out of per-table mappings.
    #[arg(long = "no-relations")]
    pub no_relations: bool,

    /// Directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub source: ProfileArg,

    #[command(flatten)]
    pub selection: Selection,

    /// Directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConventionArg {
    Technical,
    Readable,
}

impl From<ConventionArg> for OutputConvention {
    fn from(value: ConventionArg) -> Self {
        match value {
            ConventionArg::Technical => OutputConvention::Technical,
            ConventionArg::Readable => OutputConvention::Readable,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
