//! Módulo para los comandos que entiende `cqlc`.

use {
    schema::{
        aliases::{results::Result, types::Uint},
        config::{files::load_json, table_config::TableConfig},
        errors::error::Error,
        statements::{
            ddl_statement::keyspace::{create_keyspace, drop_keyspace, DEFAULT_REPLICATION_FACTOR},
            dml_statement::select::Selection,
            statement::Statement,
        },
    },
    serde_json::{Map, Value as JsonValue},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Un comando de `cqlc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create`: el `CREATE TABLE` de la tabla.
    Create,
    /// `drop`: el `DROP TABLE IF EXISTS` de la tabla.
    Drop,
    /// `select-all`: un `SELECT *` sin condiciones.
    SelectAll,
    /// `insert <registro.json>`: un `INSERT` con los campos del registro.
    Insert(String),
    /// `create-keyspace <nombre> [factor]`.
    CreateKeyspace(String, Uint),
    /// `drop-keyspace <nombre>`.
    DropKeyspace(String),
}

impl Command {
    /// Parsea un comando a partir de su nombre y sus argumentos.
    pub fn parse(name: &str, args: &[String]) -> Result<Self> {
        let command = match name {
            "create" => Self::Create,
            "drop" => Self::Drop,
            "select-all" => Self::SelectAll,
            "insert" => Self::Insert(required(name, args, 0)?),
            "create-keyspace" => {
                let keyspace = required(name, args, 0)?;
                let replication = match args.get(1) {
                    Some(factor) => factor.parse::<Uint>().map_err(|_| {
                        Error::ConfigError(format!(
                            "'{}' no es un factor de replicación válido",
                            factor
                        ))
                    })?,
                    None => DEFAULT_REPLICATION_FACTOR,
                };
                Self::CreateKeyspace(keyspace, replication)
            }
            "drop-keyspace" => Self::DropKeyspace(required(name, args, 0)?),
            _ => {
                return Err(Error::ConfigError(format!(
                    "Comando desconocido: '{}'",
                    name
                )))
            }
        };
        Ok(command)
    }

    /// Verifica si el comando necesita el archivo de esquema de una tabla.
    pub fn needs_table(&self) -> bool {
        !matches!(self, Self::CreateKeyspace(_, _) | Self::DropKeyspace(_))
    }

    /// Compila la sentencia del comando.
    pub fn run(&self, table: Option<&TableConfig>) -> Result<Statement> {
        match self {
            Self::CreateKeyspace(name, replication) => Ok(create_keyspace(name, *replication)),
            Self::DropKeyspace(name) => Ok(drop_keyspace(name)),
            _ => {
                let config = table.ok_or_else(|| {
                    Error::ConfigError(format!("El comando '{}' necesita un esquema", self))
                })?;
                self.run_on_table(config)
            }
        }
    }

    fn run_on_table(&self, config: &TableConfig) -> Result<Statement> {
        match self {
            Self::Create => config.create(),
            Self::Drop => Ok(config.clone().into_handle()?.drop_if_exists()),
            Self::SelectAll => config.clone().into_handle()?.select_all(&Selection::All),
            Self::Insert(path) => {
                let record: Map<String, JsonValue> = load_json(path)?;
                config.clone().into_handle()?.insert_from_json(&record)
            }
            Self::CreateKeyspace(_, _) | Self::DropKeyspace(_) => self.run(None),
        }
    }
}

fn required(command: &str, args: &[String], position: usize) -> Result<String> {
    args.get(position).cloned().ok_or_else(|| {
        Error::ConfigError(format!(
            "Faltan argumentos para el comando '{}'",
            command
        ))
    })
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Create => write!(f, "create"),
            Self::Drop => write!(f, "drop"),
            Self::SelectAll => write!(f, "select-all"),
            Self::Insert(path) => write!(f, "insert {}", path),
            Self::CreateKeyspace(name, replication) => {
                write!(f, "create-keyspace {} {}", name, replication)
            }
            Self::DropKeyspace(name) => write!(f, "drop-keyspace {}", name),
        }
    }
}
