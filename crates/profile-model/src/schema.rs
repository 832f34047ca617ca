//! Canonical schema model.
//!
//! The schema is assembled once per source document by the ingest crate and
//! is read-only afterwards: compilers only ever see `&CanonicalSchema`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prefix shared by every CollectiveAccess table name.
pub const TABLE_PREFIX: &str = "ca_";

/// Table name of the entities table, which gets an extra relation field.
pub const ENTITIES_TABLE: &str = "ca_entities";

/// Strip the first `ca_` occurrence from a table name (`ca_objects` -> `objects`).
pub fn entity_name(table: &str) -> String {
    table.replacen(TABLE_PREFIX, "", 1)
}

/// One exportable attribute of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Element code, unique within the owning table.
    pub code: String,
    /// Free-form datatype tag ("Text", "List", "Integer", ...).
    pub datatype: String,
    /// Human-readable label; never empty once constructed.
    pub label: String,
    /// Description text, possibly empty.
    pub description: String,
}

impl Field {
    /// Build a field, substituting `code` for an empty label.
    pub fn new(
        code: impl Into<String>,
        datatype: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let label = label.into();
        let label = if label.is_empty() { code.clone() } else { label };
        Self {
            code,
            datatype: datatype.into(),
            label,
            description: description.into(),
        }
    }

    /// Source path of this field in the export engine (`<table>.<code>`).
    pub fn source(&self, table: &str) -> String {
        format!("{table}.{}", self.code)
    }

    /// Notes text: the label, followed by ` - <description>` when present.
    pub fn notes(&self) -> String {
        if self.description.is_empty() {
            self.label.clone()
        } else {
            format!("{} - {}", self.label, self.description)
        }
    }
}

/// A named, ordered collection of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    fields: Vec<Field>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.fields.iter().any(|field| field.code == code)
    }

    pub fn field(&self, code: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.code == code)
    }

    /// Append a field unless one with the same code already exists.
    ///
    /// Returns `true` when the field was inserted.
    pub fn push_unique(&mut self, field: Field) -> bool {
        if self.contains(&field.code) {
            return false;
        }
        self.fields.push(field);
        true
    }

    /// Insert `block` in front of the existing fields, keeping the block's
    /// own order and skipping codes that are already present.
    ///
    /// Returns the number of inserted fields.
    pub fn prepend_unique(&mut self, block: &[Field]) -> usize {
        let mut head: Vec<Field> = Vec::with_capacity(block.len() + self.fields.len());
        for field in block {
            if !self.contains(&field.code) && !head.iter().any(|f| f.code == field.code) {
                head.push(field.clone());
            }
        }
        let inserted = head.len();
        head.append(&mut self.fields);
        self.fields = head;
        inserted
    }
}

/// A directed association between two tables with forward/reverse labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipType {
    pub code: String,
    pub left_table: String,
    pub right_table: String,
    pub label_left: String,
    pub label_right: String,
}

impl RelationshipType {
    pub fn touches(&self, table: &str) -> bool {
        self.left_table == table || self.right_table == table
    }

    /// The table on the other side of this relation as seen from `table`.
    pub fn other_table(&self, table: &str) -> &str {
        if self.left_table == table {
            &self.right_table
        } else {
            &self.left_table
        }
    }
}

/// A record type declared in the profile (`<type>` element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Tag name of the element that declares the type.
    pub table: String,
    pub code: String,
    pub name: String,
    pub parent: String,
}

/// One item of a vocabulary list (`<list>` / `<item>` elements).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub list: String,
    pub code: String,
    pub label: String,
}

/// Counters shown to users after a profile is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSummary {
    pub total_tables: usize,
    pub total_fields: usize,
    pub total_relationships: usize,
    pub total_types: usize,
    pub total_lists: usize,
}

/// The merged, deduplicated model of one profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSchema {
    tables: BTreeMap<String, Table>,
    relationship_types: Vec<RelationshipType>,
    types: Vec<TypeEntry>,
    lists: Vec<ListItem>,
    list_count: usize,
}

impl CanonicalSchema {
    pub fn new(
        tables: BTreeMap<String, Table>,
        relationship_types: Vec<RelationshipType>,
        types: Vec<TypeEntry>,
        lists: Vec<ListItem>,
        list_count: usize,
    ) -> Self {
        Self {
            tables,
            relationship_types,
            types,
            lists,
            list_count,
        }
    }

    /// Table names in ascending lexicographic order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Tables in ascending name order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn fields_of(&self, name: &str) -> Option<&[Field]> {
        self.tables.get(name).map(Table::fields)
    }

    pub fn relationship_types(&self) -> &[RelationshipType] {
        &self.relationship_types
    }

    pub fn types(&self) -> &[TypeEntry] {
        &self.types
    }

    pub fn list_items(&self) -> &[ListItem] {
        &self.lists
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            total_tables: self.tables.len(),
            total_fields: self.tables.values().map(Table::len).sum(),
            total_relationships: self.relationship_types.len(),
            total_types: self.types.len(),
            total_lists: self.list_count,
        }
    }
}
