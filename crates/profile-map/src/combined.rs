//! All-tables flat mapping in one shared ID space.
//!
//! Layout: the root, then per table (ascending name order) one container row
//! parented to the root, followed by that table's fields parented to the
//! container. Relations are not part of the combined mapping, and element
//! names are always field codes.

use profile_model::{
    CanonicalSchema, MappingRow, MappingSheet, OutputConvention, ROOT_ELEMENT, ROOT_ID,
};
use tracing::debug;

use crate::flat::SEPARATOR_ROWS;
use crate::ids::IdAllocator;

const ROOT_NOTES: &str = "Root element for XML export";

/// Table named in the settings block of the combined mapping.
pub const PRIMARY_TABLE: &str = "ca_objects";

pub fn compile_combined_mapping(
    schema: &CanonicalSchema,
    convention: OutputConvention,
) -> MappingSheet {
    let mut rows = vec![MappingRow::mapping(
        ROOT_ID,
        None,
        ROOT_ELEMENT,
        "",
        "",
        ROOT_NOTES,
    )];
    let mut ids = IdAllocator::after_root();
    let mut field_rows = 0;

    for table in schema.tables() {
        let table_id = ids.allocate();
        rows.push(MappingRow::mapping(
            table_id,
            Some(ROOT_ID),
            table.name.as_str(),
            "",
            "",
            format!("Table {}", table.name),
        ));
        for field in table.fields() {
            rows.push(MappingRow::mapping(
                ids.allocate(),
                Some(table_id),
                field.code.as_str(),
                field.source(&table.name),
                "",
                field.notes(),
            ));
        }
        field_rows += table.len();
    }

    rows.extend(std::iter::repeat_with(MappingRow::blank).take(SEPARATOR_ROWS));
    let token = convention.token();
    rows.extend([
        MappingRow::settings_header(),
        MappingRow::setting(
            "code",
            format!("export_all_tables_{}", token.to_lowercase()),
            "Alphanumeric code of the mapping",
            "All tables combined",
        ),
        MappingRow::setting(
            "name",
            format!("Export All Tables ({token})"),
            "Human readable name of the mapping",
            "Arbitrary text",
        ),
        MappingRow::setting(
            "table",
            PRIMARY_TABLE,
            "Sets the table for the exported data",
            "Primary table",
        ),
        MappingRow::setting(
            "exporter_format",
            token,
            "Set exporter type",
            "XML, CSV or MARC",
        ),
    ]);

    debug!(
        tables = schema.summary().total_tables,
        field_rows,
        last_id = ids.peek() - 1,
        "compiled combined mapping"
    );
    MappingSheet {
        rows,
        field_rows,
        relation_rows: 0,
    }
}
