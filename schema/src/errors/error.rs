//! Módulo para mensajes de errores.

use {
    crate::{data_types::cql_type::CqlType, table_metadata::table_schema::TableSchema},
    std::{
        error::Error as StdError,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Errores que pueden surgir al armar una sentencia.
///
/// Todos son deterministas: dependen sólo del esquema y de los datos recibidos,
/// por lo que no tiene sentido reintentar la operación que los produjo.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// El esquema de la tabla no permite generar un `CREATE TABLE` válido.
    ///
    /// El contenido es `<table><schema><reason>`, donde:
    /// * `<table>` es el nombre de la tabla que se intentó crear.
    /// * `<schema>` es el [esquema](TableSchema) completo, para poder diagnosticar.
    /// * `<reason>` es un [String] que explica qué falló.
    InvalidSchema(String, TableSchema, String),

    /// Se referenció una columna que no pertenece al esquema.
    ///
    /// El contenido es `<table><column>`.
    UnknownColumn(String, String),

    /// La cantidad de parámetros no coincide con la cantidad de _placeholders_.
    ///
    /// El contenido es `<context><expected><received>`, donde `<context>` es el nombre
    /// de la tabla o, si no se conoce, el texto CQL de la sentencia.
    ValueCountMismatch(String, usize, usize),

    /// Una cláusula que necesita al menos una columna quedó vacía.
    ///
    /// El contenido es `<table><clause>`, por ejemplo `users` y `WHERE`.
    EmptyClause(String, String),

    /// Un valor no corresponde al tipo declarado para su columna.
    ///
    /// El contenido es `<column><expected><received>`, donde `<received>` es una
    /// descripción del valor recibido.
    TypeMismatch(String, CqlType, String),

    /// La configuración leída no es válida.
    ConfigError(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidSchema(table, schema, reason) => {
                write!(
                    f,
                    "Esquema inválido para la tabla '{}': {}\n{}",
                    table, reason, schema
                )
            }
            Self::UnknownColumn(table, column) => {
                write!(
                    f,
                    "La columna '{}' no pertenece a la tabla '{}'",
                    column, table
                )
            }
            Self::ValueCountMismatch(context, expected, received) => {
                write!(
                    f,
                    "Se esperaban {} valores para '{}', pero se recibieron {}",
                    expected, context, received
                )
            }
            Self::EmptyClause(table, clause) => {
                write!(
                    f,
                    "La cláusula {} de la tabla '{}' necesita al menos una columna",
                    clause, table
                )
            }
            Self::TypeMismatch(column, expected, received) => {
                write!(
                    f,
                    "La columna '{}' es de tipo {}, pero se recibió {}",
                    column, expected, received
                )
            }
            Self::ConfigError(msg) => write!(f, "Error de configuración: {}", msg),
        }
    }
}

impl StdError for Error {}
