//! Módulo que detalla la definición de una columna.

use {
    crate::{
        data_types::{cql_type::CqlType, value::Value},
        table_metadata::ordering::ClusteringOrder,
    },
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Representa la definición de una columna: su tipo y el rol que cumple en la clave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Tipo de dato de la columna.
    #[serde(rename = "type")]
    pub cql_type: CqlType,
    /// Si la columna es parte de la partition key.
    #[serde(default)]
    pub partition_key: bool,
    /// Si la columna es parte de la clustering key.
    #[serde(default)]
    pub clustering_key: bool,
    /// El orden de agrupamiento, si se declaró alguno.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clustering_order: Option<ClusteringOrder>,
    /// Si la columna admite valores nulos. Las columnas de clave nunca los admiten.
    #[serde(default)]
    pub nullable: bool,
}

impl ColumnDefinition {
    /// Crea una columna común del tipo dado.
    pub fn new(cql_type: impl Into<CqlType>) -> Self {
        Self {
            cql_type: cql_type.into(),
            partition_key: false,
            clustering_key: false,
            clustering_order: None,
            nullable: false,
        }
    }

    /// Marca la columna como parte de la partition key.
    pub fn partition_key(mut self) -> Self {
        self.partition_key = true;
        self
    }

    /// Marca la columna como parte de la clustering key, sin orden explícito.
    pub fn clustering_key(mut self) -> Self {
        self.clustering_key = true;
        self
    }

    /// Marca la columna como clustering key con el orden dado.
    pub fn clustering(mut self, order: impl Into<ClusteringOrder>) -> Self {
        self.clustering_key = true;
        self.clustering_order = Some(order.into());
        self
    }

    /// Permite valores nulos en la columna.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Verifica si la columna forma parte de la primary key.
    pub fn is_key(&self) -> bool {
        self.partition_key || self.clustering_key
    }

    /// El orden que efectivamente aparece en `CLUSTERING ORDER BY`, si corresponde.
    pub fn declared_order(&self) -> Option<ClusteringOrder> {
        if self.clustering_key {
            self.clustering_order
        } else {
            None
        }
    }

    /// Verifica si un valor puede guardarse en esta columna.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return self.nullable && !self.is_key();
        }
        self.cql_type.accepts(value)
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.cql_type)?;
        if self.partition_key {
            write!(f, " PARTITION KEY")?;
        }
        if self.clustering_key {
            write!(f, " CLUSTERING KEY")?;
        }
        match self.clustering_order {
            Some(ClusteringOrder::Bare(order)) => write!(f, " {}", order)?,
            Some(ClusteringOrder::Indexed { index, order }) => {
                write!(f, " {} #{}", order, index)?
            }
            None => {}
        }
        if self.nullable {
            write!(f, " NULL")?;
        }
        Ok(())
    }
}
