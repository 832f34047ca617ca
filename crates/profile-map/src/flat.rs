//! Single-table flat mapping compilation.

use profile_model::{
    CanonicalSchema, Field, MappingOptions, MappingRow, MappingSheet, OutputConvention,
    ProfileError, ROOT_ELEMENT, ROOT_ID, RelationshipType, Result, entity_name,
};
use tracing::debug;

use crate::ids::IdAllocator;
use crate::relations::compile_relationships;

/// Number of empty rows between the mapping rules and the settings block.
pub const SEPARATOR_ROWS: usize = 3;

const ROOT_NOTES: &str = "Root element for export";

/// Element name of a field under the given convention.
pub fn element_name(field: &Field, convention: OutputConvention) -> &str {
    match convention {
        OutputConvention::Technical => &field.code,
        OutputConvention::Readable => &field.label,
    }
}

/// Compile the flat mapping of one table of `schema`.
pub fn compile_table_mapping(
    schema: &CanonicalSchema,
    table: &str,
    options: MappingOptions,
) -> Result<MappingSheet> {
    let fields = schema
        .fields_of(table)
        .ok_or_else(|| ProfileError::UnknownTable {
            table: table.to_string(),
        })?;
    Ok(compile_fields(
        table,
        fields,
        schema.relationship_types(),
        options,
    ))
}

/// Compile a flat mapping from an explicit field list.
pub fn compile_fields(
    table: &str,
    fields: &[Field],
    relationship_types: &[RelationshipType],
    options: MappingOptions,
) -> MappingSheet {
    let mut rows = Vec::with_capacity(fields.len() + 12);
    rows.push(MappingRow::mapping(
        ROOT_ID,
        None,
        ROOT_ELEMENT,
        "",
        "",
        ROOT_NOTES,
    ));

    let mut ids = IdAllocator::after_root();
    for field in fields {
        rows.push(MappingRow::mapping(
            ids.allocate(),
            Some(ROOT_ID),
            element_name(field, options.convention),
            field.source(table),
            "",
            field.notes(),
        ));
    }

    let relation_rows = if options.include_relations {
        let relations = compile_relationships(relationship_types, table, ids.peek());
        let count = relations.rows.len();
        rows.extend(relations.rows);
        count
    } else {
        0
    };

    rows.extend(std::iter::repeat_with(MappingRow::blank).take(SEPARATOR_ROWS));
    rows.extend(table_settings(table, options));

    debug!(
        table,
        fields = fields.len(),
        relation_rows,
        convention = %options.convention,
        "compiled flat mapping"
    );
    MappingSheet {
        rows,
        field_rows: fields.len(),
        relation_rows,
    }
}

/// Settings header plus the four settings of a single-table mapping.
fn table_settings(table: &str, options: MappingOptions) -> Vec<MappingRow> {
    let token = options.convention.token();
    let suffix = if options.include_relations {
        " avec relations"
    } else {
        ""
    };
    vec![
        MappingRow::settings_header(),
        MappingRow::setting(
            "code",
            format!("export_{}_{}", entity_name(table), token.to_lowercase()),
            "Alphanumeric code of the mapping",
            "Arbitrary, no special characters or spaces",
        ),
        MappingRow::setting(
            "name",
            format!("Export {table} ({token}){suffix}"),
            "Human readable name of the mapping",
            "Arbitrary text",
        ),
        MappingRow::setting(
            "table",
            table,
            "Sets the table for the exported data",
            "Corresponds to CollectiveAccess Basic Tables",
        ),
        MappingRow::setting(
            "exporter_format",
            token,
            "Set exporter type",
            "XML, CSV or MARC",
        ),
    ]
}
