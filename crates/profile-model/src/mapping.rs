//! Flat mapping rows and compile options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column headers of a flat mapping sheet.
pub const MAPPING_HEADER: [&str; 9] = [
    "Rule type",
    "ID",
    "Parent ID",
    "Element",
    "Source",
    "Options",
    "Notes",
    "Original values",
    "Replacement values",
];

/// ID reserved for the synthetic root row of every mapping.
pub const ROOT_ID: u32 = 1;

/// Element name of the synthetic root row.
pub const ROOT_ELEMENT: &str = "record";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleType {
    Mapping,
    Setting,
    /// Separator and settings-header rows.
    Blank,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Mapping => "Mapping",
            RuleType::Setting => "Setting",
            RuleType::Blank => "",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming convention for mapped element names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputConvention {
    /// Element names are field codes; suitable for XML exporters.
    #[default]
    Technical,
    /// Element names are field labels; suitable for CSV exporters.
    Readable,
}

impl OutputConvention {
    /// Exporter format token written into the settings block.
    pub fn token(&self) -> &'static str {
        match self {
            OutputConvention::Technical => "XML",
            OutputConvention::Readable => "CSV",
        }
    }
}

impl fmt::Display for OutputConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parameters of a single-table flat mapping compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingOptions {
    pub convention: OutputConvention,
    pub include_relations: bool,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            convention: OutputConvention::Technical,
            include_relations: true,
        }
    }
}

impl MappingOptions {
    #[must_use]
    pub fn with_convention(mut self, convention: OutputConvention) -> Self {
        self.convention = convention;
        self
    }

    #[must_use]
    pub fn with_relations(mut self, include: bool) -> Self {
        self.include_relations = include;
        self
    }
}

/// One 9-column record of a flat mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    pub rule_type: RuleType,
    pub id: String,
    pub parent_id: String,
    pub element: String,
    pub source: String,
    pub options: String,
    pub notes: String,
    pub original_values: String,
    pub replacement_values: String,
}

impl MappingRow {
    /// A `Mapping` rule. `parent` is `None` only for the root row.
    pub fn mapping(
        id: u32,
        parent: Option<u32>,
        element: impl Into<String>,
        source: impl Into<String>,
        options: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            rule_type: RuleType::Mapping,
            id: id.to_string(),
            parent_id: parent.map(|p| p.to_string()).unwrap_or_default(),
            element: element.into(),
            source: source.into(),
            options: options.into(),
            notes: notes.into(),
            original_values: String::new(),
            replacement_values: String::new(),
        }
    }

    /// A `Setting` row: key, value, description and note occupy the
    /// ID, Parent ID, Element and Source columns.
    pub fn setting(key: &str, value: impl Into<String>, description: &str, notes: &str) -> Self {
        Self {
            rule_type: RuleType::Setting,
            id: key.to_string(),
            parent_id: value.into(),
            element: description.to_string(),
            source: notes.to_string(),
            options: String::new(),
            notes: String::new(),
            original_values: String::new(),
            replacement_values: String::new(),
        }
    }

    /// Header line of the settings block.
    pub fn settings_header() -> Self {
        Self {
            rule_type: RuleType::Blank,
            id: "Setting".to_string(),
            parent_id: "Setting Value".to_string(),
            element: "Description".to_string(),
            source: "Notes".to_string(),
            options: String::new(),
            notes: String::new(),
            original_values: String::new(),
            replacement_values: String::new(),
        }
    }

    pub fn blank() -> Self {
        Self {
            rule_type: RuleType::Blank,
            id: String::new(),
            parent_id: String::new(),
            element: String::new(),
            source: String::new(),
            options: String::new(),
            notes: String::new(),
            original_values: String::new(),
            replacement_values: String::new(),
        }
    }

    pub fn is_mapping(&self) -> bool {
        self.rule_type == RuleType::Mapping
    }

    /// Cells in header order.
    pub fn to_record(&self) -> [&str; 9] {
        [
            self.rule_type.as_str(),
            &self.id,
            &self.parent_id,
            &self.element,
            &self.source,
            &self.options,
            &self.notes,
            &self.original_values,
            &self.replacement_values,
        ]
    }
}

/// A compiled flat mapping, header excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSheet {
    pub rows: Vec<MappingRow>,
    /// Number of field rows (root and containers excluded).
    pub field_rows: usize,
    /// Number of rows contributed by relationship compilation.
    pub relation_rows: usize,
}

impl MappingSheet {
    pub fn mapping_rows(&self) -> impl Iterator<Item = &MappingRow> {
        self.rows.iter().filter(|row| row.is_mapping())
    }

    pub fn settings(&self) -> impl Iterator<Item = &MappingRow> {
        self.rows
            .iter()
            .filter(|row| row.rule_type == RuleType::Setting)
    }

    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings()
            .find(|row| row.id == key)
            .map(|row| row.parent_id.as_str())
    }

    /// Element count reported to users once the mapping is delivered.
    pub fn element_count(&self) -> usize {
        self.field_rows + self.relation_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_row_has_empty_parent() {
        let row = MappingRow::mapping(ROOT_ID, None, ROOT_ELEMENT, "", "", "Root element for export");
        assert_eq!(row.id, "1");
        assert_eq!(row.parent_id, "");
        assert_eq!(row.to_record()[0], "Mapping");
    }

    #[test]
    fn setting_row_layout() {
        let row = MappingRow::setting("table", "ca_objects", "Sets the table", "Basic tables");
        assert_eq!(
            row.to_record(),
            ["Setting", "table", "ca_objects", "Sets the table", "Basic tables", "", "", "", ""]
        );
    }

    #[test]
    fn convention_tokens() {
        assert_eq!(OutputConvention::Technical.token(), "XML");
        assert_eq!(OutputConvention::Readable.token(), "CSV");
        assert_eq!(OutputConvention::default(), OutputConvention::Technical);
    }

    #[test]
    fn options_builder() {
        let options = MappingOptions::default()
            .with_convention(OutputConvention::Readable)
            .with_relations(false);
        assert_eq!(options.convention, OutputConvention::Readable);
        assert!(!options.include_relations);
    }
}
