//! Flat export mapping compilers.
//!
//! Every compiler is a pure function of a [`profile_model::CanonicalSchema`]
//! and its options; row IDs are reassigned on every call.

pub mod combined;
pub mod flat;
pub mod ids;
pub mod relations;

pub use combined::{PRIMARY_TABLE, compile_combined_mapping};
pub use flat::{SEPARATOR_ROWS, compile_fields, compile_table_mapping, element_name};
pub use ids::IdAllocator;
pub use relations::{
    ARRAY_OPTION, RelationField, RelationRows, compile_relationships, emit_relationships,
    related_tables,
};

use profile_model::{CanonicalSchema, MappingOptions, MappingSheet, Result};

/// Compile one flat mapping per table, in ascending table-name order.
pub fn compile_all_mappings(
    schema: &CanonicalSchema,
    options: MappingOptions,
) -> Result<Vec<(String, MappingSheet)>> {
    schema
        .table_names()
        .map(|table| Ok((table.to_string(), compile_table_mapping(schema, table, options)?)))
        .collect()
}
