//! Paquete de aliases usados en toda la librería.

pub mod results;
pub mod types;
