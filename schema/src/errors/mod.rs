//! Paquete de errores de la librería.

pub mod error;
