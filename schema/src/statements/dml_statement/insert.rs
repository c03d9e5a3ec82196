//! Módulo que compila un `INSERT`.

use crate::table_metadata::table_name::TableName;

/// Compila un `INSERT` con un `?` por columna, en el mismo orden.
pub fn compile_insert(table: &TableName, columns: &[&str]) -> String {
    let placeholders = vec!["?"; columns.len()];
    format!(
        "INSERT INTO {} ({}) VALUES ( {} );",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}
