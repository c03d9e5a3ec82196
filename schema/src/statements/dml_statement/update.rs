//! Módulo que compila un `UPDATE`.

use crate::{
    statements::dml_statement::assignments, table_metadata::table_name::TableName,
};

/// Compila un `UPDATE`.
///
/// Los valores de `SET` se ligan antes que los del `WHERE`.
pub fn compile_update(table: &TableName, set_columns: &[&str], where_columns: &[&str]) -> String {
    format!(
        "UPDATE {} SET {} WHERE {};",
        table,
        assignments(set_columns, ", "),
        assignments(where_columns, " AND ")
    )
}
