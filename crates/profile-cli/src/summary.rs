use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use profile_map::related_tables;
use profile_model::{CanonicalSchema, RelationshipType, SchemaSummary, Table as SchemaTable};
use profile_report::Artifact;

pub fn print_summary(summary: &SchemaSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in [
        ("Tables", summary.total_tables),
        ("Fields", summary.total_fields),
        ("Relationship types", summary.total_relationships),
        ("Types", summary.total_types),
        ("Lists", summary.total_lists),
    ] {
        table.add_row(vec![Cell::new(label), count_cell(count)]);
    }
    println!("{table}");
}

pub fn print_tables(schema: &CanonicalSchema) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Fields"),
        header_cell("Related tables"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total_fields = 0usize;
    for entry in schema.tables() {
        total_fields += entry.len();
        let related: Vec<&str> = related_tables(schema.relationship_types(), &entry.name)
            .into_keys()
            .collect();
        let related_cell = if related.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(related.join(", "))
        };
        table.add_row(vec![
            Cell::new(&entry.name).fg(Color::Green),
            count_cell(entry.len()),
            related_cell,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_fields).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_fields(entry: &SchemaTable) {
    println!("Table: {}", entry.name);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Code"),
        header_cell("Label"),
        header_cell("Datatype"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, field) in entry.fields().iter().enumerate() {
        let description = if field.description.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&field.description)
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&field.code).fg(Color::Green),
            Cell::new(&field.label),
            Cell::new(&field.datatype),
            description,
        ]);
    }
    println!("{table}");
}

pub fn print_relations(relationship_types: &[RelationshipType]) {
    if relationship_types.is_empty() {
        println!("No relationship types.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Left table"),
        header_cell("Right table"),
        header_cell("Label"),
        header_cell("Reverse label"),
    ]);
    apply_table_style(&mut table);
    for relation in relationship_types {
        table.add_row(vec![
            Cell::new(&relation.code).fg(Color::Green),
            Cell::new(&relation.left_table),
            Cell::new(&relation.right_table),
            Cell::new(&relation.label_left),
            Cell::new(&relation.label_right),
        ]);
    }
    println!("{table}");
}

pub fn print_artifacts(output_dir: &Path, written: &[Artifact]) {
    println!("Output: {}", output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Elements"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for artifact in written {
        table.add_row(vec![
            Cell::new(&artifact.file_name),
            count_cell(artifact.element_count),
            Cell::new(artifact.to_string()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
