//! Módulo que detalla el esquema de una tabla.

use {
    crate::{
        aliases::results::Result, errors::error::Error,
        table_metadata::column_definition::ColumnDefinition,
    },
    serde::Serialize,
    std::{
        collections::HashSet,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Representa las columnas de una tabla, en el orden en que fueron declaradas.
///
/// El orden importa: define el listado de columnas del `CREATE TABLE` y la prioridad
/// por defecto entre claves de clustering. Una vez construido no se modifica.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    columns: Vec<(String, ColumnDefinition)>,
}

impl TableSchema {
    /// Crea un constructor de esquemas vacío.
    pub fn builder() -> TableSchemaBuilder {
        TableSchemaBuilder::default()
    }

    /// Itera las columnas en orden de declaración.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnDefinition)> {
        self.columns
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Obtiene los nombres de las columnas en orden de declaración.
    pub fn get_columns_names(&self) -> Vec<&str> {
        self.columns().map(|(name, _)| name).collect()
    }

    /// Busca la definición de una columna.
    pub fn get(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns()
            .find(|(column, _)| *column == name)
            .map(|(_, definition)| definition)
    }

    /// Verifica si la columna pertenece al esquema.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// La cantidad de columnas.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Verifica si el esquema no tiene columnas.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Obtiene la partition key de la tabla, en orden de declaración.
    pub fn get_partition_key(&self) -> Vec<&str> {
        self.columns()
            .filter(|(_, definition)| definition.partition_key)
            .map(|(name, _)| name)
            .collect()
    }

    /// Rechaza las combinaciones de claves que no tienen una resolución obvia:
    /// una columna que es a la vez partition y clustering key, o dos columnas que
    /// declaran el mismo índice de clustering.
    pub fn check_keys(&self, table: &str) -> Result<()> {
        let mut seen_indexes = HashSet::new();

        for (name, definition) in self.columns() {
            if definition.partition_key && definition.clustering_key {
                return Err(self.invalid(
                    table,
                    format!(
                        "la columna '{}' no puede ser partition key y clustering key a la vez",
                        name
                    ),
                ));
            }

            let index = definition.declared_order().and_then(|order| order.index());
            if let Some(index) = index {
                if !seen_indexes.insert(index) {
                    return Err(self.invalid(
                        table,
                        format!(
                            "el índice de clustering {} está repetido (columna '{}')",
                            index, name
                        ),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Arma un error de esquema inválido para esta tabla.
    pub fn invalid(&self, table: &str, reason: String) -> Error {
        Error::InvalidSchema(table.to_string(), self.clone(), reason)
    }
}

impl Display for TableSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{{")?;
        for (name, definition) in self.columns() {
            writeln!(f, "    {} {},", name, definition)?;
        }
        write!(f, "}}")
    }
}

/// Constructor de [TableSchema], que conserva el orden de declaración.
#[derive(Default)]
pub struct TableSchemaBuilder {
    columns: Vec<(String, ColumnDefinition)>,
}

impl TableSchemaBuilder {
    /// Agrega una columna al final.
    ///
    /// Si la columna ya existía, se reemplaza su definición conservando su posición.
    pub fn column(mut self, name: &str, definition: ColumnDefinition) -> Self {
        match self.columns.iter_mut().find(|(column, _)| column == name) {
            Some((_, existing)) => *existing = definition,
            None => self.columns.push((name.to_string(), definition)),
        }
        self
    }

    /// Termina de construir el esquema.
    pub fn build(self) -> TableSchema {
        TableSchema {
            columns: self.columns,
        }
    }
}
