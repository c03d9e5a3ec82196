//! Paquete de módulos que compilan las distintas sentencias de CQL.

/// Módulo que contiene las sentencias DDL: tablas y keyspaces.
pub mod ddl_statement;
/// Módulo que contiene las sentencias DML: inserciones, actualizaciones y consultas.
pub mod dml_statement;
/// Módulo que inserta las llamadas a funciones nativas en el texto de una sentencia.
pub mod injector;
/// Módulo que contiene la sentencia compilada.
pub mod statement;
