//! Módulo que detalla una estrategia de replicación de un keyspace.

use {
    crate::aliases::types::Uint,
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Representa una estrategia de replicación.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplicationStrategy {
    /// SimpleStrategy(replicas)
    SimpleStrategy(Uint),
    /// NetworkTopologyStrategy(datacenter_and_replicas)
    NetworkTopologyStrategy(Vec<(String, Uint)>),
}

impl ReplicationStrategy {
    /// Obtiene la cantidad de réplicas de la estrategia de replicación simple.
    /// Si no es estrategia simple, retorna None.
    pub fn simple_replicas(&self) -> Option<Uint> {
        match self {
            ReplicationStrategy::SimpleStrategy(replicas) => Some(*replicas),
            _ => None,
        }
    }
}

impl Default for ReplicationStrategy {
    fn default() -> Self {
        Self::SimpleStrategy(1)
    }
}

impl Display for ReplicationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::SimpleStrategy(replicas) => write!(
                f,
                "{{'class': 'SimpleStrategy', 'replication_factor' : {}}}",
                replicas
            ),
            Self::NetworkTopologyStrategy(datacenters) => {
                write!(f, "{{'class': 'NetworkTopologyStrategy'")?;
                for (datacenter, replicas) in datacenters {
                    write!(f, ", '{}' : {}", datacenter, replicas)?;
                }
                write!(f, "}}")
            }
        }
    }
}
