//! Herramienta de línea de comandos que compila tablas declaradas en JSON a sentencias CQL.
//!
//! Sólo imprime las sentencias: no se conecta a ningún nodo.
#![warn(missing_docs)]

pub mod command;
pub mod invocation;
