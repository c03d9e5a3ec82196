//! Módulo que compila un `CREATE TABLE`.

use crate::{
    aliases::results::Result,
    statements::ddl_statement::primary_key::PrimaryKey,
    table_metadata::{table_name::TableName, table_schema::TableSchema},
};

/// Compila el `CREATE TABLE` de una tabla.
///
/// Falla con [InvalidSchema](crate::errors::error::Error::InvalidSchema) si el esquema no
/// declara ninguna partition key, o si sus claves son ambiguas
/// (ver [TableSchema::check_keys]). Nunca devuelve CQL parcial.
pub fn compile_create_table(
    table: &TableName,
    schema: &TableSchema,
    if_not_exists: bool,
) -> Result<String> {
    let table_str = table.to_string();
    schema.check_keys(&table_str)?;

    let primary_key = PrimaryKey::derive(schema);
    if !primary_key.has_partition_key() {
        return Err(schema.invalid(
            &table_str,
            "se necesita al menos una columna en la partition key".to_string(),
        ));
    }

    let mut definitions: Vec<String> = schema
        .columns()
        .map(|(name, column)| format!("{} {}", name, column.cql_type))
        .collect();
    definitions.push(primary_key.to_string());

    let mut cql = format!(
        "CREATE TABLE {}{} ({})",
        if if_not_exists { "IF NOT EXISTS " } else { "" },
        table_str,
        definitions.join(", ")
    );
    if let Some(order_clause) = primary_key.order_clause() {
        cql.push_str(" WITH ");
        cql.push_str(&order_clause);
    }
    cql.push(';');

    Ok(cql)
}
