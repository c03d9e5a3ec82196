//! Módulo para interpretar los argumentos de `cqlc`.

use {
    crate::command::Command,
    logger::log::{LogLevel, Logger},
    schema::{
        aliases::results::Result, config::table_config::TableConfig, errors::error::Error,
        statements::statement::Statement,
    },
};

/// Cómo se usa la herramienta.
pub const USAGE: &str = "Uso:
    cqlc [opciones] <esquema.json> create
    cqlc [opciones] <esquema.json> drop
    cqlc [opciones] <esquema.json> select-all
    cqlc [opciones] <esquema.json> insert <registro.json>
    cqlc [opciones] create-keyspace <nombre> [factor]
    cqlc [opciones] drop-keyspace <nombre>

Opciones:
    --log-level <nivel>   trace, debug, info, warning o error (por defecto: info)
    --json                imprime la sentencia como JSON";

/// Una ejecución de `cqlc` ya interpretada.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Ruta al archivo con el esquema de la tabla, si el comando lo necesita.
    pub schema_path: Option<String>,
    /// El comando a correr.
    pub command: Command,
    /// Nivel mínimo de los mensajes que se registran.
    pub log_level: LogLevel,
    /// Si la salida es JSON en vez de texto.
    pub json: bool,
}

impl Invocation {
    /// Interpreta los argumentos, sin incluir el nombre del programa.
    pub fn parse(argv: &[String]) -> Result<Self> {
        let mut log_level = LogLevel::Info;
        let mut json = false;
        let mut positional = Vec::new();

        let mut args = argv.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => json = true,
                "--log-level" => {
                    let level = args.next().ok_or_else(|| {
                        Error::ConfigError("Falta el nivel de --log-level".to_string())
                    })?;
                    log_level = level
                        .parse::<LogLevel>()
                        .map_err(|e| Error::ConfigError(format!("{}", e)))?;
                }
                option if option.starts_with("--") => {
                    return Err(Error::ConfigError(format!(
                        "Opción desconocida: '{}'",
                        option
                    )))
                }
                _ => positional.push(arg.to_string()),
            }
        }

        let (schema_path, command) = match positional.as_slice() {
            [] => return Err(Error::ConfigError("Faltan argumentos".to_string())),
            [name, rest @ ..] if name.ends_with("-keyspace") => {
                (None, Command::parse(name, rest)?)
            }
            [path, name, rest @ ..] => (Some(path.to_string()), Command::parse(name, rest)?),
            [path] => {
                return Err(Error::ConfigError(format!(
                    "Falta el comando a correr sobre '{}'",
                    path
                )))
            }
        };

        Ok(Self {
            schema_path,
            command,
            log_level,
            json,
        })
    }

    /// Carga el esquema, si hace falta, y compila la sentencia.
    pub fn run(&self, logger: Option<&Logger>) -> Result<Statement> {
        let config = match (&self.schema_path, self.command.needs_table()) {
            (Some(path), true) => {
                let config = TableConfig::load(path)?;
                log(logger, LogLevel::Info, &format!(
                    "Esquema de '{}' cargado desde {} ({} columnas)",
                    config.table_name(),
                    path,
                    config.columns.len()
                ));
                Some(config)
            }
            _ => None,
        };

        let statement = self.command.run(config.as_ref())?;
        log(logger, LogLevel::Debug, &format!("[{}] {}", self.command, statement));
        Ok(statement)
    }

    /// Arma el texto a imprimir para una sentencia.
    pub fn render(&self, statement: &Statement) -> Result<String> {
        if self.json {
            return serde_json::to_string_pretty(statement)
                .map_err(|e| Error::ConfigError(format!("Error serializando la sentencia: {}", e)));
        }

        if !statement.has_values() {
            return Ok(statement.cql.to_string());
        }
        let values = statement
            .values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>();
        Ok(format!("{}\nValores: [{}]", statement.cql, values.join(", ")))
    }
}

/// Registra un mensaje si hay logger. Un fallo del logger no corta la ejecución.
pub fn log(logger: Option<&Logger>, level: LogLevel, msg: &str) {
    if let Some(logger) = logger {
        if let Err(err) = logger.log(level, msg, Some(level.color())) {
            eprintln!("{}", err);
        }
    }
}
