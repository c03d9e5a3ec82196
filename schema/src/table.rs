//! Módulo que une un esquema con el nombre de su tabla.

use {
    crate::{
        aliases::results::Result,
        config::json_value::value_from_json,
        data_types::{native_function::Param, value::Value},
        errors::error::Error,
        statements::{
            ddl_statement::{create_table::compile_create_table, drop_table::compile_drop_table},
            dml_statement::{
                insert::compile_insert,
                select::{compile_select, compile_select_all, compile_select_where, Selection},
                update::compile_update,
            },
            injector::inject_function_calls,
            statement::Statement,
        },
        table_metadata::{
            column_definition::ColumnDefinition, table_name::TableName, table_schema::TableSchema,
        },
    },
    serde_json::{Map, Value as JsonValue},
};

/// Una tabla lista para compilar sentencias.
///
/// Cada operación es pura: sólo lee el esquema y los argumentos, y devuelve una
/// [Statement] nueva. Se puede compartir entre hilos sin sincronización.
#[derive(Clone, Debug, PartialEq)]
pub struct TableHandle {
    name: TableName,
    schema: TableSchema,
}

impl TableHandle {
    /// Registra un esquema bajo un nombre de tabla (`tabla` o `keyspace.tabla`).
    ///
    /// Rechaza nombres vacíos, columnas que son partition y clustering key a la vez, e
    /// índices de clustering repetidos. La falta de partition key recién se reporta en
    /// [create](Self::create).
    pub fn new(name: impl Into<TableName>, schema: TableSchema) -> Result<Self> {
        let name = name.into();
        if name.get_name().trim().is_empty() {
            return Err(schema.invalid(
                &name.to_string(),
                "el nombre de la tabla no puede estar vacío".to_string(),
            ));
        }
        if let Some(keyspace) = name.get_keyspace() {
            if keyspace.trim().is_empty() {
                return Err(schema.invalid(
                    &name.to_string(),
                    "el keyspace no puede estar vacío".to_string(),
                ));
            }
        }
        schema.check_keys(&name.to_string())?;
        Ok(Self { name, schema })
    }

    /// Obtiene el nombre de la tabla.
    pub fn get_name(&self) -> &TableName {
        &self.name
    }

    /// Obtiene el esquema de la tabla.
    pub fn get_schema(&self) -> &TableSchema {
        &self.schema
    }

    /// `CREATE TABLE`.
    pub fn create(&self) -> Result<Statement> {
        compile_create_table(&self.name, &self.schema, false).map(Statement::ddl)
    }

    /// `CREATE TABLE IF NOT EXISTS`.
    pub fn create_if_not_exists(&self) -> Result<Statement> {
        compile_create_table(&self.name, &self.schema, true).map(Statement::ddl)
    }

    /// `DROP TABLE`.
    pub fn drop_table(&self) -> Statement {
        Statement::ddl(compile_drop_table(&self.name, false))
    }

    /// `DROP TABLE IF EXISTS`.
    pub fn drop_if_exists(&self) -> Statement {
        Statement::ddl(compile_drop_table(&self.name, true))
    }

    /// `INSERT` de las columnas dadas, con un parámetro por columna.
    pub fn insert(&self, columns: &[&str], params: Vec<Param>) -> Result<Statement> {
        self.non_empty(columns, "VALUES")?;
        self.check_params(columns, &params)?;
        inject_function_calls(&compile_insert(&self.name, columns), params)
    }

    /// `INSERT` a partir de los pares columna/valor de un registro, en su orden de
    /// iteración.
    pub fn insert_from_obj<K, P>(&self, record: impl IntoIterator<Item = (K, P)>) -> Result<Statement>
    where
        K: AsRef<str>,
        P: Into<Param>,
    {
        let (names, params): (Vec<K>, Vec<Param>) = record
            .into_iter()
            .map(|(name, param)| (name, param.into()))
            .unzip();
        let columns: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        self.insert(&columns, params)
    }

    /// `INSERT` a partir de un objeto JSON, convirtiendo cada campo según el tipo de su
    /// columna.
    pub fn insert_from_json(&self, record: &Map<String, JsonValue>) -> Result<Statement> {
        let mut fields = Vec::with_capacity(record.len());
        for (column, raw) in record {
            let definition = self.column(column)?;
            let value = value_from_json(column, &definition.cql_type, raw)?;
            fields.push((column.as_str(), value));
        }
        self.insert_from_obj(fields)
    }

    /// `UPDATE`. Los parámetros del `SET` van antes que los del `WHERE`.
    ///
    /// Las columnas de la primary key no se pueden asignar en el `SET`.
    pub fn update(
        &self,
        set_columns: &[&str],
        where_columns: &[&str],
        params: Vec<Param>,
    ) -> Result<Statement> {
        self.non_empty(set_columns, "SET")?;
        self.non_empty(where_columns, "WHERE")?;
        for column in set_columns {
            if self.column(column)?.is_key() {
                return Err(self.schema.invalid(
                    &self.name.to_string(),
                    format!(
                        "la columna '{}' es parte de la primary key y no se puede actualizar",
                        column
                    ),
                ));
            }
        }
        let columns = [set_columns, where_columns].concat();
        self.check_params(&columns, &params)?;
        inject_function_calls(
            &compile_update(&self.name, set_columns, where_columns),
            params,
        )
    }

    /// `SELECT` sin condiciones.
    pub fn select_all(&self, selection: &Selection) -> Result<Statement> {
        self.check_selection(selection)?;
        Ok(Statement::new(
            compile_select_all(&self.name, selection),
            Vec::new(),
        ))
    }

    /// `SELECT` con una igualdad por cada columna de `where_columns`.
    pub fn select(
        &self,
        selection: &Selection,
        where_columns: &[&str],
        params: Vec<Param>,
        allow_filtering: bool,
    ) -> Result<Statement> {
        self.check_selection(selection)?;
        self.non_empty(where_columns, "WHERE")?;
        self.check_params(where_columns, &params)?;
        inject_function_calls(
            &compile_select(&self.name, selection, where_columns, allow_filtering),
            params,
        )
    }

    /// `SELECT *` con una cláusula `WHERE` escrita a mano.
    ///
    /// No se verifica nada: quien escribe la cláusula se encarga de que sus `?`
    /// coincidan con los valores.
    pub fn select_where(&self, clause: &str, values: Vec<Value>) -> Statement {
        Statement::new(compile_select_where(&self.name, clause), values)
    }

    fn column(&self, name: &str) -> Result<&ColumnDefinition> {
        self.schema
            .get(name)
            .ok_or_else(|| Error::UnknownColumn(self.name.to_string(), name.to_string()))
    }

    fn check_selection(&self, selection: &Selection) -> Result<()> {
        if let Selection::Columns(_) = selection {
            self.non_empty(&selection.names(), "SELECT")?;
        }
        for column in selection.names() {
            self.column(column)?;
        }
        Ok(())
    }

    fn non_empty(&self, columns: &[&str], clause: &str) -> Result<()> {
        if columns.is_empty() {
            return Err(Error::EmptyClause(
                self.name.to_string(),
                clause.to_string(),
            ));
        }
        Ok(())
    }

    fn check_params(&self, columns: &[&str], params: &[Param]) -> Result<()> {
        if columns.len() != params.len() {
            return Err(Error::ValueCountMismatch(
                self.name.to_string(),
                columns.len(),
                params.len(),
            ));
        }

        for (column, param) in columns.iter().zip(params) {
            let definition = self.column(column)?;
            // Las funciones nativas las evalúa el servidor.
            if let Param::Bound(value) = param {
                if !definition.accepts(value) {
                    return Err(Error::TypeMismatch(
                        column.to_string(),
                        definition.cql_type,
                        value.describe(),
                    ));
                }
            }
        }
        Ok(())
    }
}
