//! Schema documents: field metadata only, no row IDs, no relations.

use profile_model::{CanonicalSchema, Field, ProfileError};

use crate::xml::XmlNode;

/// Root element of the all-tables document.
pub const COMBINED_ROOT: &str = "schemas";

/// The `<schema table="...">` block of one table.
pub fn compile_schema_node(table: &str, fields: &[Field]) -> XmlNode {
    let mut list = XmlNode::new("fields");
    for field in fields {
        list.push(field_node(table, field));
    }
    XmlNode::new("schema")
        .with_attribute("table", table)
        .with_child(list)
}

fn field_node(table: &str, field: &Field) -> XmlNode {
    let mut node = XmlNode::new("field")
        .with_child(XmlNode::text_element("code", field.code.as_str()))
        .with_child(XmlNode::text_element("label", field.label.as_str()))
        .with_child(XmlNode::text_element("datatype", field.datatype.as_str()));
    if !field.description.is_empty() {
        node.push(XmlNode::text_element(
            "description",
            field.description.as_str(),
        ));
    }
    node.with_child(XmlNode::text_element("source", field.source(table)))
}

/// Schema document of one table of `schema`.
pub fn compile_schema_document(
    schema: &CanonicalSchema,
    table: &str,
) -> profile_model::Result<XmlNode> {
    let fields = schema
        .fields_of(table)
        .ok_or_else(|| ProfileError::UnknownTable {
            table: table.to_string(),
        })?;
    Ok(compile_schema_node(table, fields))
}

/// One document wrapping the schema blocks of every table.
pub fn compile_combined_document(schema: &CanonicalSchema) -> XmlNode {
    let mut root = XmlNode::new(COMBINED_ROOT);
    for table in schema.tables() {
        root.push(compile_schema_node(&table.name, table.fields()));
    }
    root
}
