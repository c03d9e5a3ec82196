//! Módulo que compila un `DROP TABLE`.

use crate::table_metadata::table_name::TableName;

/// Compila el `DROP TABLE` de una tabla.
pub fn compile_drop_table(table: &TableName, if_exists: bool) -> String {
    format!(
        "DROP TABLE {}{};",
        if if_exists { "IF EXISTS " } else { "" },
        table
    )
}
