//! Módulo que compila un `SELECT`.

use {
    crate::table_metadata::table_name::TableName,
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Las columnas que devuelve un `SELECT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// `*`
    All,
    /// Una lista de columnas.
    Columns(Vec<String>),
}

impl Selection {
    /// Una selección de las columnas dadas.
    pub fn columns(columns: &[&str]) -> Self {
        Self::Columns(columns.iter().map(|column| column.to_string()).collect())
    }

    /// Las columnas nombradas explícitamente; vacío si es `*`.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::All => Vec::new(),
            Self::Columns(columns) => columns.iter().map(String::as_str).collect(),
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::All => write!(f, "*"),
            Self::Columns(columns) => write!(f, "{}", columns.join(", ")),
        }
    }
}

/// Compila un `SELECT` sin condiciones.
pub fn compile_select_all(table: &TableName, selection: &Selection) -> String {
    format!("SELECT {} FROM {};", selection, table)
}

/// Compila un `SELECT` con una condición de igualdad por cada columna de `where_columns`.
pub fn compile_select(
    table: &TableName,
    selection: &Selection,
    where_columns: &[&str],
    allow_filtering: bool,
) -> String {
    let relations = where_columns
        .iter()
        .map(|column| format!("({} = ?)", column))
        .collect::<Vec<String>>();
    format!(
        "SELECT {} FROM {} WHERE {}{};",
        selection,
        table,
        relations.join(" AND "),
        if allow_filtering {
            " ALLOW FILTERING"
        } else {
            ""
        }
    )
}

/// Compila un `SELECT *` con una cláusula `WHERE` escrita a mano.
///
/// La cláusula se copia tal cual: quien la escribe se encarga de que sus `?` coincidan
/// con los valores.
pub fn compile_select_where(table: &TableName, clause: &str) -> String {
    format!("SELECT * FROM {} WHERE {};", table, clause)
}
