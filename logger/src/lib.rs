//! Logger a archivo con niveles, rotación por tamaño y eco en colores por salida estándar.
#![warn(missing_docs)]

pub mod log;
