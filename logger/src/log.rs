//! Módulo del logger.

use {
    chrono::Utc,
    std::{
        error::Error as StdError,
        fmt::{Display, Formatter, Result as FmtResult},
        fs::{self, OpenOptions},
        io::{self, Error as IoError, Write},
        path::{Path, PathBuf},
        str::FromStr,
    },
};

/// Colores ANSI con los que se imprime cada mensaje por `stdout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Rojo.
    Red,
    /// Verde.
    Green,
    /// Amarillo.
    Yellow,
    /// Azul.
    Blue,
    /// Gris, para el nivel más bajo.
    Gray,
}

impl Color {
    fn to_ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Gray => "\x1b[90m",
        }
    }
}

/// Nivel de un mensaje. Están ordenados de menor a mayor severidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Detalles internos.
    Trace,
    /// Información útil para depurar, como cada sentencia compilada.
    Debug,
    /// Eventos normales.
    Info,
    /// Algo inesperado, pero recuperable.
    Warning,
    /// Una operación falló.
    Error,
}

impl LogLevel {
    /// El color con el que se imprime por defecto un mensaje de este nivel.
    pub fn color(&self) -> Color {
        match self {
            Self::Trace => Color::Gray,
            Self::Debug => Color::Blue,
            Self::Info => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Self::Trace),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Configuración para la rotación de archivos.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Tamaño máximo del archivo en bytes.
    pub max_size: u64,
    /// Número máximo de archivos de respaldo.
    pub max_files: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024,
            max_files: 5,
        }
    }
}

/// Formato de los mensajes.
///
/// La plantilla acepta `{level}`, `{timestamp}` y `{message}`.
#[derive(Debug, Clone)]
pub struct LogFormatter {
    /// Formato de `chrono` para la fecha.
    pub timestamp_format: String,
    /// Plantilla de cada línea.
    pub message_template: String,
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            message_template: "[{level}] [{timestamp}]: {message}".to_string(),
        }
    }
}

/// Un logger que escribe en `<dir>/<name>.log`.
///
/// No guarda el archivo abierto, así que se puede clonar y compartir entre hilos.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
    min_level: LogLevel,
    echo: bool,
    rotation_config: RotationConfig,
    formatter: LogFormatter,
}

impl Logger {
    /// Crea un logger cuyo archivo se llama como `name`.
    ///
    /// Los caracteres que no son válidos en un nombre de archivo se reemplazan por `_`.
    pub fn new(
        dir: &Path,
        name: &str,
        min_level: LogLevel,
        rotation_config: Option<RotationConfig>,
        formatter: Option<LogFormatter>,
    ) -> Result<Self, LoggerError> {
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidPath(
                "El nombre del log no puede estar vacío".to_string(),
            ));
        }

        if !dir.is_dir() {
            fs::create_dir_all(dir)?;
        }

        let log_file = dir.join(format!("{}.log", sanitize(name)));
        OpenOptions::new().create(true).append(true).open(&log_file)?;

        let rotation_config = match rotation_config {
            Some(config) if config.max_files == 0 => {
                return Err(LoggerError::InvalidPath(
                    "El número máximo de archivos debe ser mayor a cero".to_string(),
                ));
            }
            Some(config) => config,
            None => RotationConfig::default(),
        };

        Ok(Self {
            log_file,
            min_level,
            echo: true,
            rotation_config,
            formatter: formatter.unwrap_or_default(),
        })
    }

    /// Desactiva o activa el eco de los mensajes por `stdout`.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// La ruta del archivo de log actual.
    pub fn get_path(&self) -> &Path {
        &self.log_file
    }

    /// Registra un mensaje si su nivel es igual o superior al nivel mínimo configurado.
    pub fn log(&self, level: LogLevel, msg: &str, color: Option<Color>) -> Result<(), LoggerError> {
        if level < self.min_level {
            return Ok(());
        }

        self.rotate_if_needed()?;

        let timestamp = Utc::now()
            .format(&self.formatter.timestamp_format)
            .to_string();
        let log_msg = format!(
            "{}\n",
            self.formatter
                .message_template
                .replace("{level}", &level.to_string())
                .replace("{timestamp}", &timestamp)
                .replace("{message}", msg)
        );

        if let (true, Some(color)) = (self.echo, color) {
            print!("{}{}\x1b[0m", color.to_ansi(), log_msg);
            io::stdout().flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(log_msg.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    fn rotate_if_needed(&self) -> Result<(), LoggerError> {
        let metadata = fs::metadata(&self.log_file)?;
        if metadata.len() <= self.rotation_config.max_size {
            return Ok(());
        }

        let max_files = self.rotation_config.max_files;
        for i in (1..=max_files).rev() {
            let current = self.backup(i);
            if current.exists() {
                if i == max_files {
                    fs::remove_file(current)?;
                } else {
                    fs::rename(current, self.backup(i + 1))?;
                }
            }
        }

        fs::rename(&self.log_file, self.backup(1))?;
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.log_file)?;

        Ok(())
    }

    fn backup(&self, number: u32) -> PathBuf {
        self.log_file.with_extension(format!("log.{}", number))
    }

    /// Registra un mensaje de nivel TRACE.
    pub fn trace(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Trace, msg, Some(LogLevel::Trace.color()))
    }

    /// Registra un mensaje de nivel DEBUG.
    pub fn debug(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Debug, msg, Some(LogLevel::Debug.color()))
    }

    /// Registra un mensaje de nivel INFO.
    pub fn info(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Info, msg, Some(LogLevel::Info.color()))
    }

    /// Registra un mensaje de nivel WARNING.
    pub fn warning(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warning, msg, Some(LogLevel::Warning.color()))
    }

    /// Registra un mensaje de nivel ERROR.
    pub fn error(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, msg, Some(LogLevel::Error.color()))
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

/// Errores del logger.
#[derive(Debug)]
pub enum LoggerError {
    /// Falló una operación sobre el archivo.
    IoError(IoError),
    /// La ruta o la configuración del archivo no es válida.
    InvalidPath(String),
    /// Un nivel de log desconocido.
    InvalidLevel(String),
}

impl Display for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::IoError(e) => write!(f, "Error de E/S: {}", e),
            Self::InvalidPath(msg) => write!(f, "Ruta inválida: {}", msg),
            Self::InvalidLevel(level) => write!(f, "Nivel de log desconocido: '{}'", level),
        }
    }
}

impl StdError for LoggerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IoError> for LoggerError {
    fn from(err: IoError) -> Self {
        Self::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::Arc, tempfile::TempDir};

    const NAME: &str = "cqlc";

    fn setup_test_logger(min_level: LogLevel) -> (TempDir, Logger) {
        let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
        let logger = Logger::new(temp_dir.path(), NAME, min_level, None, None)
            .expect("Error al crear el logger")
            .with_echo(false);

        (temp_dir, logger)
    }

    fn read_log(temp_dir: &TempDir) -> String {
        fs::read_to_string(temp_dir.path().join("cqlc.log"))
            .expect("Error al leer el archivo de log")
    }

    #[test]
    fn test_1_crea_el_archivo_con_el_nombre_dado() {
        let (temp_dir, logger) = setup_test_logger(LogLevel::Trace);

        assert!(temp_dir.path().join("cqlc.log").exists());
        assert_eq!(logger.get_path(), temp_dir.path().join("cqlc.log").as_path());
    }

    #[test]
    fn test_2_nombres_con_caracteres_invalidos() {
        let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
        let logger = Logger::new(temp_dir.path(), "app:users/v1", LogLevel::Info, None, None);

        assert!(logger.is_ok());
        assert!(temp_dir.path().join("app_users_v1.log").exists());

        let empty = Logger::new(temp_dir.path(), "  ", LogLevel::Info, None, None);
        assert!(matches!(empty, Err(LoggerError::InvalidPath(_))));
    }

    #[test]
    fn test_3_niveles() {
        let (temp_dir, logger) = setup_test_logger(LogLevel::Trace);

        logger.trace("Mensaje trace").expect("Error en el log de trace");
        logger.debug("Mensaje debug").expect("Error en el log de debug");
        logger.info("Mensaje info").expect("Error en el log de info");
        logger.warning("Mensaje warning").expect("Error en el log de warning");
        logger.error("Mensaje error").expect("Error en el log de error");

        let log_content = read_log(&temp_dir);
        for level in ["TRACE", "DEBUG", "INFO", "WARNING", "ERROR"] {
            assert!(log_content.contains(level));
        }
    }

    #[test]
    fn test_4_filtrado_por_nivel() {
        let (temp_dir, logger) = setup_test_logger(LogLevel::Info);

        logger.debug("No debería aparecer").expect("Error en el log de debug");
        logger.info("Debería aparecer").expect("Error en el log de info");
        logger.warning("Debería aparecer").expect("Error en el log de warning");

        let log_content = read_log(&temp_dir);
        assert!(!log_content.contains("DEBUG"));
        assert!(log_content.contains("INFO"));
        assert!(log_content.contains("WARNING"));
    }

    #[test]
    fn test_5_formato_personalizado() {
        let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
        let formatter = LogFormatter {
            timestamp_format: "%H:%M:%S".to_string(),
            message_template: "TEST-{level}: {message}".to_string(),
        };
        let logger = Logger::new(temp_dir.path(), NAME, LogLevel::Info, None, Some(formatter))
            .expect("Error al crear el logger")
            .with_echo(false);

        logger.info("Mensaje de prueba").expect("Error al registrar mensaje");

        let log_content = read_log(&temp_dir);
        assert!(log_content.contains("TEST-INFO: Mensaje de prueba"));
        assert!(!log_content.contains("[INFO]"));
    }

    #[test]
    fn test_6_rotacion() {
        let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
        let rotation_config = RotationConfig {
            max_size: 100,
            max_files: 3,
        };
        let logger = Logger::new(
            temp_dir.path(),
            NAME,
            LogLevel::Info,
            Some(rotation_config),
            None,
        )
        .expect("Error al crear el logger")
        .with_echo(false);

        for i in 0..10 {
            logger
                .info(&format!("Mensaje largo de prueba número {}", i))
                .expect("Error al registrar mensaje");
        }

        assert!(temp_dir.path().join("cqlc.log").exists());
        assert!(temp_dir.path().join("cqlc.log.1").exists());
        assert!(temp_dir.path().join("cqlc.log.2").exists());
        assert!(temp_dir.path().join("cqlc.log.3").exists());
        assert!(!temp_dir.path().join("cqlc.log.4").exists());
    }

    #[test]
    fn test_7_rotacion_sin_respaldos() {
        let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
        let rotation_config = RotationConfig {
            max_size: 100,
            max_files: 0,
        };
        let result = Logger::new(
            temp_dir.path(),
            NAME,
            LogLevel::Info,
            Some(rotation_config),
            None,
        );

        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));
    }

    #[test]
    fn test_8_parsear_niveles() {
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("WARN".parse::<LogLevel>().ok(), Some(LogLevel::Warning));
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_9_logs_concurrentes() {
        let (temp_dir, logger) = setup_test_logger(LogLevel::Trace);
        let logger = Arc::new(logger);
        let mut handles = vec![];

        for i in 0..10 {
            let logger_clone = Arc::clone(&logger);
            handles.push(std::thread::spawn(move || {
                for j in 0..10 {
                    logger_clone
                        .info(&format!("Mensaje del hilo {} número {}", i, j))
                        .expect("Error al registrar mensaje");
                }
            }));
        }

        for handle in handles {
            handle.join().expect("El hilo entró en pánico");
        }

        assert_eq!(read_log(&temp_dir).lines().count(), 100);
    }

    #[test]
    fn test_10_se_guardan_tantos_respaldos_como_max_files() {
        for max_files in 1..=3 {
            let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
            let logger = Logger::new(
                temp_dir.path(),
                NAME,
                LogLevel::Info,
                Some(RotationConfig {
                    max_size: 50,
                    max_files,
                }),
                None,
            )
            .expect("Error al crear el logger")
            .with_echo(false);

            for i in 0..30 {
                logger
                    .info(&format!("Mensaje de rotación número {}", i))
                    .expect("Error al registrar mensaje");
            }

            for backup in 1..=max_files {
                assert!(temp_dir.path().join(format!("cqlc.log.{}", backup)).exists());
            }
            assert!(!temp_dir
                .path()
                .join(format!("cqlc.log.{}", max_files + 1))
                .exists());
        }
    }
}
