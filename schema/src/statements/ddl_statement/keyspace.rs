//! Módulo para crear y borrar keyspaces.
//!
//! Ambas sentencias son idempotentes.

use crate::{
    aliases::types::Uint,
    statements::{
        ddl_statement::replication_strategy::ReplicationStrategy, statement::Statement,
    },
};

/// Factor de replicación por defecto.
pub const DEFAULT_REPLICATION_FACTOR: Uint = 1;

/// `CREATE KEYSPACE IF NOT EXISTS` con estrategia simple y el factor de replicación dado.
pub fn create_keyspace(name: &str, replication_factor: Uint) -> Statement {
    create_keyspace_with(
        name,
        &ReplicationStrategy::SimpleStrategy(replication_factor),
    )
}

/// `CREATE KEYSPACE IF NOT EXISTS` con una estrategia de replicación cualquiera.
pub fn create_keyspace_with(name: &str, strategy: &ReplicationStrategy) -> Statement {
    Statement::ddl(format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {};",
        name, strategy
    ))
}

/// `DROP KEYSPACE IF EXISTS`.
pub fn drop_keyspace(name: &str) -> Statement {
    Statement::ddl(format!("DROP KEYSPACE IF EXISTS {};", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1_crear_keyspace() {
        let statement = create_keyspace("media", 3);

        assert_eq!(
            statement.cql,
            "CREATE KEYSPACE IF NOT EXISTS media WITH replication = {'class': 'SimpleStrategy', 'replication_factor' : 3};"
        );
        assert!(statement.values.is_empty());
    }

    #[test]
    fn test_2_factor_por_defecto() {
        let statement = create_keyspace("ks", DEFAULT_REPLICATION_FACTOR);

        assert!(statement.cql.ends_with("'replication_factor' : 1};"));
    }

    #[test]
    fn test_3_borrar_keyspace() {
        assert_eq!(drop_keyspace("ks").cql, "DROP KEYSPACE IF EXISTS ks;");
    }
}
