//! Librería para definir esquemas de tablas tipados y compilarlos a sentencias CQL.
//!
//! No se conecta a ningún nodo: sólo produce [sentencias](statements::statement::Statement)
//! que luego ejecuta quien corresponda.
#![warn(missing_docs)]

pub mod aliases;
pub mod config;
pub mod data_types;
pub mod errors;
pub mod statements;
pub mod table;
pub mod table_metadata;
