//! Módulo para declarar una tabla en JSON.

use {
    crate::{
        aliases::results::Result,
        config::files::load_json,
        errors::error::Error,
        statements::statement::Statement,
        table::TableHandle,
        table_metadata::{
            column_definition::ColumnDefinition, table_name::TableName, table_schema::TableSchema,
        },
    },
    serde::{Deserialize, Serialize},
    std::str::FromStr,
};

/// Una columna tal como se escribe en el archivo de configuración.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Nombre de la columna.
    pub name: String,
    /// Tipo y rol de la columna.
    #[serde(flatten)]
    pub definition: ColumnDefinition,
}

/// La declaración completa de una tabla.
///
/// ```json
/// {
///     "name": "users",
///     "keyspace": "app",
///     "columns": [
///         {"name": "id", "type": "timeuuid", "partition_key": true},
///         {"name": "tags", "type": {"set": "text"}, "nullable": true}
///     ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Nombre de la tabla.
    pub name: String,
    /// Keyspace de la tabla, si se quiere calificar el nombre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyspace: Option<String>,
    /// Si el `CREATE TABLE` debe llevar `IF NOT EXISTS`.
    #[serde(default)]
    pub if_not_exists: bool,
    /// Columnas en orden de declaración.
    pub columns: Vec<ColumnConfig>,
}

impl TableConfig {
    /// Carga la configuración desde un archivo JSON.
    pub fn load(path: &str) -> Result<Self> {
        load_json(path)
    }

    /// El nombre de la tabla, calificado si hay keyspace.
    pub fn table_name(&self) -> TableName {
        match &self.keyspace {
            Some(keyspace) => TableName::with_keyspace(keyspace, &self.name),
            None => TableName::new(&self.name),
        }
    }

    /// Arma el esquema con las columnas en el orden del archivo.
    pub fn schema(&self) -> TableSchema {
        self.columns
            .iter()
            .fold(TableSchema::builder(), |builder, column| {
                builder.column(&column.name, column.definition.clone())
            })
            .build()
    }

    /// Registra la tabla declarada.
    pub fn into_handle(self) -> Result<TableHandle> {
        TableHandle::new(self.table_name(), self.schema())
    }

    /// El `CREATE TABLE` de la tabla, respetando `if_not_exists`.
    pub fn create(&self) -> Result<Statement> {
        let handle = self.clone().into_handle()?;
        if self.if_not_exists {
            handle.create_if_not_exists()
        } else {
            handle.create()
        }
    }
}

impl FromStr for TableConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| Error::ConfigError(format!("Configuración de tabla inválida: {}", e)))
    }
}
