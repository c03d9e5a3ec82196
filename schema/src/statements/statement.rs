//! Módulo para la sentencia ya compilada.

use {
    crate::data_types::value::Value,
    serde::Serialize,
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// El carácter que marca un parámetro posicional.
pub const PLACEHOLDER: char = '?';

/// Una sentencia CQL lista para ser ejecutada, junto con los valores que se ligan
/// de izquierda a derecha a sus `?`.
///
/// Las sentencias DDL no llevan valores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statement {
    /// El texto CQL.
    pub cql: String,
    /// Los valores a ligar, en orden.
    pub values: Vec<Value>,
}

impl Statement {
    /// Crea una sentencia con valores.
    pub fn new(cql: String, values: Vec<Value>) -> Self {
        Self { cql, values }
    }

    /// Crea una sentencia sin valores.
    pub fn ddl(cql: String) -> Self {
        Self::new(cql, Vec::new())
    }

    /// La cantidad de `?` en el texto.
    pub fn placeholder_count(&self) -> usize {
        count_placeholders(&self.cql)
    }

    /// Verifica si la sentencia lleva valores a ligar.
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.cql)
    }
}

/// Cuenta los `?` de un texto CQL.
pub fn count_placeholders(cql: &str) -> usize {
    cql.matches(PLACEHOLDER).count()
}
