//! Extraction strategies, one per profile dialect.
//!
//! Each extractor reads the whole document and returns its own tagged
//! result. Nothing is merged here; [`crate::builder`] reduces the results
//! with a fixed precedence.

pub mod catalog;
pub mod element_set;
pub mod metadata_element;
pub mod relationship;
pub mod restriction;

use profile_model::Field;
use roxmltree::Document;

/// Fields one dialect offers to one table.
///
/// An empty `fields` list still makes the table exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableContribution {
    pub table: String,
    pub fields: Vec<Field>,
}

impl TableContribution {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
        }
    }
}

/// Legacy `<elementSet code="ca_...">` / `<element>` contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSetResult {
    pub contributions: Vec<TableContribution>,
}

/// Current-format `<metadataElement>` contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataElementResult {
    pub contributions: Vec<TableContribution>,
}

/// Contributions derived from standalone `<typeRestriction type="...">` markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionResult {
    pub contributions: Vec<TableContribution>,
}

/// One dialect's extraction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    ElementSet(ElementSetResult),
    MetadataElement(MetadataElementResult),
    Restriction(RestrictionResult),
}

impl Extraction {
    /// Merge precedence; lower values are merged first and win conflicts.
    pub fn precedence(&self) -> u8 {
        match self {
            Extraction::ElementSet(_) => 0,
            Extraction::MetadataElement(_) => 1,
            Extraction::Restriction(_) => 2,
        }
    }

    pub fn dialect(&self) -> &'static str {
        match self {
            Extraction::ElementSet(_) => "elementSet",
            Extraction::MetadataElement(_) => "metadataElement",
            Extraction::Restriction(_) => "typeRestriction",
        }
    }

    pub fn contributions(&self) -> &[TableContribution] {
        match self {
            Extraction::ElementSet(result) => &result.contributions,
            Extraction::MetadataElement(result) => &result.contributions,
            Extraction::Restriction(result) => &result.contributions,
        }
    }

    pub fn into_contributions(self) -> Vec<TableContribution> {
        match self {
            Extraction::ElementSet(result) => result.contributions,
            Extraction::MetadataElement(result) => result.contributions,
            Extraction::Restriction(result) => result.contributions,
        }
    }

    pub fn field_count(&self) -> usize {
        self.contributions().iter().map(|c| c.fields.len()).sum()
    }
}

/// Run the three field extractors over one document.
pub fn extract_fields(doc: &Document<'_>) -> Vec<Extraction> {
    vec![
        Extraction::ElementSet(element_set::extract(doc)),
        Extraction::MetadataElement(metadata_element::extract(doc)),
        Extraction::Restriction(restriction::extract(doc)),
    ]
}
