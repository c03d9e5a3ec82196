//! Paquete para declarar tablas desde archivos de configuración JSON.

pub mod files;
pub mod json_value;
pub mod table_config;
