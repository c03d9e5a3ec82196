//! Módulo para el orden de agrupamiento de las columnas de clustering.

use {
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Representa la dirección de ordenación en una cláusula `CLUSTERING ORDER BY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// Orden ascendente.
    Asc,
    /// Orden descendente.
    Desc,
}

impl Display for Ordering {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}

/// El orden declarado para una columna de clustering.
///
/// La forma indexada fija explícitamente la prioridad entre columnas; la forma simple
/// queda detrás de todas las indexadas, en orden de declaración.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClusteringOrder {
    /// Sólo la dirección.
    Bare(Ordering),
    /// Dirección con prioridad explícita.
    Indexed {
        /// Prioridad de la columna: menor índice, antes en la clave.
        index: usize,
        /// Dirección.
        order: Ordering,
    },
}

impl ClusteringOrder {
    /// La dirección declarada.
    pub fn order(&self) -> Ordering {
        match self {
            Self::Bare(order) | Self::Indexed { order, .. } => *order,
        }
    }

    /// La prioridad explícita, si la hay.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Bare(_) => None,
            Self::Indexed { index, .. } => Some(*index),
        }
    }
}

impl From<Ordering> for ClusteringOrder {
    fn from(order: Ordering) -> Self {
        Self::Bare(order)
    }
}
