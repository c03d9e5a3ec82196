//! Paquete de sentencias DDL.

/// `CREATE TABLE`.
pub mod create_table;
/// `DROP TABLE`.
pub mod drop_table;
/// `CREATE KEYSPACE` y `DROP KEYSPACE`.
pub mod keyspace;
/// Derivación de la primary key y del orden de clustering.
pub mod primary_key;
/// Estrategias de replicación de un keyspace.
pub mod replication_strategy;
