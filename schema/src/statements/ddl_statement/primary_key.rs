//! Módulo que deriva la primary key y el orden de clustering a partir de un esquema.

use {
    crate::table_metadata::{ordering::Ordering, table_schema::TableSchema},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// La primary key de una tabla, tal como aparece en el `CREATE TABLE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryKey {
    /// Columnas de la partition key, en orden de declaración.
    pub partition_key: Vec<String>,
    /// Todas las columnas de clustering, ordenadas por prioridad.
    pub clustering_key: Vec<String>,
    /// Sólo las columnas de clustering con orden declarado, con la misma prioridad.
    pub clustering_order: Vec<(String, Ordering)>,
}

impl PrimaryKey {
    /// Deriva la primary key de un esquema.
    ///
    /// La prioridad de una columna de clustering sale de su orden declarado: primero
    /// las que tienen índice explícito (de menor a mayor), después las que sólo tienen
    /// dirección, y al final las que no declaran orden. Los empates se resuelven por
    /// orden de declaración.
    pub fn derive(schema: &TableSchema) -> Self {
        let partition_key = schema
            .get_partition_key()
            .into_iter()
            .map(String::from)
            .collect();

        let mut ordered: Vec<(usize, &str, Ordering)> = schema
            .columns()
            .filter_map(|(name, column)| {
                column
                    .declared_order()
                    .map(|order| (order.index().unwrap_or(usize::MAX), name, order.order()))
            })
            .collect();
        // `sort_by_key` es estable.
        ordered.sort_by_key(|(priority, _, _)| *priority);

        let priority_of = |name: &str| {
            ordered
                .iter()
                .position(|(_, ordered_name, _)| *ordered_name == name)
                .unwrap_or(usize::MAX)
        };

        let mut clustering: Vec<&str> = schema
            .columns()
            .filter(|(_, column)| column.clustering_key)
            .map(|(name, _)| name)
            .collect();
        clustering.sort_by_key(|name| priority_of(*name));

        Self {
            partition_key,
            clustering_key: clustering.into_iter().map(String::from).collect(),
            clustering_order: ordered
                .into_iter()
                .map(|(_, name, order)| (name.to_string(), order))
                .collect(),
        }
    }

    /// Verifica si hay al menos una columna en la partition key.
    pub fn has_partition_key(&self) -> bool {
        !self.partition_key.is_empty()
    }

    /// El contenido de `CLUSTERING ORDER BY (...)`, si alguna columna declaró orden.
    pub fn order_clause(&self) -> Option<String> {
        if self.clustering_order.is_empty() {
            return None;
        }
        let orders = self
            .clustering_order
            .iter()
            .map(|(name, order)| format!("{} {}", name, order))
            .collect::<Vec<String>>();
        Some(format!("CLUSTERING ORDER BY ({})", orders.join(", ")))
    }
}

impl Display for PrimaryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let partition = if self.partition_key.len() == 1 {
            self.partition_key[0].clone()
        } else {
            format!("({})", self.partition_key.join(", "))
        };

        let mut parts = vec![partition];
        parts.extend(self.clustering_key.iter().cloned());
        write!(f, "PRIMARY KEY({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            data_types::native_types::NativeType,
            table_metadata::{column_definition::ColumnDefinition, ordering::ClusteringOrder},
        },
    };

    fn int() -> ColumnDefinition {
        ColumnDefinition::new(NativeType::Int)
    }

    fn indexed(index: usize, order: Ordering) -> ClusteringOrder {
        ClusteringOrder::Indexed { index, order }
    }

    #[test]
    fn test_1_indexadas_antes_que_simples() {
        let schema = TableSchema::builder()
            .column("id", int().partition_key())
            .column("colA", int().clustering(Ordering::Asc))
            .column("colB", int().clustering(indexed(0, Ordering::Desc)))
            .column("colC", int().clustering(indexed(1, Ordering::Desc)))
            .build();
        let key = PrimaryKey::derive(&schema);

        assert_eq!(key.clustering_key, vec!["colB", "colC", "colA"]);
        assert_eq!(
            key.order_clause(),
            Some("CLUSTERING ORDER BY (colB DESC, colC DESC, colA ASC)".to_string())
        );
        assert_eq!(key.to_string(), "PRIMARY KEY(id, colB, colC, colA)");
    }

    #[test]
    fn test_2_clustering_sin_orden_va_al_final_y_no_aparece_en_el_orden() {
        let schema = TableSchema::builder()
            .column("plain", int().clustering_key())
            .column("id", int().partition_key())
            .column("ts", int().clustering(Ordering::Desc))
            .build();
        let key = PrimaryKey::derive(&schema);

        assert_eq!(key.clustering_key, vec!["ts", "plain"]);
        assert_eq!(
            key.clustering_order,
            vec![("ts".to_string(), Ordering::Desc)]
        );
    }

    #[test]
    fn test_3_simples_conservan_el_orden_de_declaracion() {
        let schema = TableSchema::builder()
            .column("id", int().partition_key())
            .column("c", int().clustering(Ordering::Desc))
            .column("a", int().clustering(Ordering::Asc))
            .column("b", int().clustering(indexed(5, Ordering::Asc)))
            .build();
        let key = PrimaryKey::derive(&schema);

        assert_eq!(key.clustering_key, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_4_partition_key_compuesta() {
        let schema = TableSchema::builder()
            .column("a", int().partition_key())
            .column("b", int().partition_key())
            .column("c", int().clustering_key())
            .build();
        let key = PrimaryKey::derive(&schema);

        assert_eq!(key.to_string(), "PRIMARY KEY((a, b), c)");
        assert_eq!(key.order_clause(), None);
    }

    #[test]
    fn test_5_sin_partition_key() {
        let schema = TableSchema::builder().column("a", int()).build();
        let key = PrimaryKey::derive(&schema);

        assert!(!key.has_partition_key());
    }
}
