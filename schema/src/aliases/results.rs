//! Módulo para alises de resultados.

use {crate::errors::error::Error, std::result};

/// Resultado que envuelve un error personalizado de la librería.
pub type Result<T> = result::Result<T, Error>;
