//! Profile ingestion.
//!
//! Turns a CollectiveAccess installation profile (any mix of the legacy
//! `elementSet`, current `metadataElement` and `typeRestriction` dialects)
//! into a [`profile_model::CanonicalSchema`].

pub mod builder;
pub mod dialects;
pub mod loader;
pub mod locale;
pub mod xml;

pub use builder::{BASE_TABLES, SchemaBuilder, build_schema, intrinsic_fields};
pub use dialects::{
    ElementSetResult, Extraction, MetadataElementResult, RestrictionResult, TableContribution,
    extract_fields,
};
pub use loader::{load_profile, parse_profile};
pub use locale::{LocaleFallback, LocaleRank, first_known_text, pick_by_locale, resolve_text};
