//! Módulo para el nombre de una tabla.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// El nombre de una tabla, opcionalmente calificado con su keyspace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableName {
    /// Nombre del keyspace al que pertenece la tabla, si se indicó.
    pub keyspace: Option<String>,
    /// Nombre de la tabla.
    pub name: String,
}

impl TableName {
    /// Crea un nombre de tabla a partir de `tabla` o `keyspace.tabla`.
    pub fn new(qualified: &str) -> Self {
        match qualified.split_once('.') {
            Some((keyspace, name)) => Self::with_keyspace(keyspace, name),
            None => Self {
                keyspace: None,
                name: qualified.to_string(),
            },
        }
    }

    /// Crea un nombre de tabla dentro de un keyspace.
    pub fn with_keyspace(keyspace: &str, name: &str) -> Self {
        Self {
            keyspace: Some(keyspace.to_string()),
            name: name.to_string(),
        }
    }

    /// Obtiene el nombre de la tabla.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Obtiene el nombre del keyspace al que pertenece la tabla.
    pub fn get_keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.keyspace {
            Some(keyspace) => write!(f, "{}.{}", keyspace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for TableName {
    fn from(qualified: &str) -> Self {
        Self::new(qualified)
    }
}
