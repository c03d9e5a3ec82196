//! Paquete de sentencias DML.

/// `INSERT`.
pub mod insert;
/// `SELECT`.
pub mod select;
/// `UPDATE`.
pub mod update;

/// Arma una lista de columnas con sus _placeholders_, por ejemplo `a = ?, b = ?`.
pub(crate) fn assignments(columns: &[&str], separator: &str) -> String {
    columns
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<String>>()
        .join(separator)
}
