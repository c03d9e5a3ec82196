//! Paquete para funciones públicas comunes entre tests de integración.
//!
//! Dichas funciones se definen directamente en este archivo, o sino corremos el riesgo
//! de que cargo crea que los archivos son archivos de tests en sí.

#![allow(dead_code)]

use {
    schema::{
        aliases::results::Result,
        config::{files::load_json, table_config::TableConfig},
        data_types::native_types::NativeType,
        table::TableHandle,
        table_metadata::{column_definition::ColumnDefinition, table_schema::TableSchema},
    },
    serde_json::{Map, Value as JsonValue},
    utils::get_root_path::get_script_path,
};

/// La tabla `users` de los ejemplos: `id` es la partition key y `name` una columna común.
pub fn users_table() -> Result<TableHandle> {
    TableHandle::new(
        "users",
        TableSchema::builder()
            .column(
                "id",
                ColumnDefinition::new(NativeType::TimeUuid).partition_key(),
            )
            .column("name", ColumnDefinition::new(NativeType::Varchar))
            .build(),
    )
}

/// Carga un esquema de `scripts/schemas`.
pub fn load_table_config(name: &str) -> Result<TableConfig> {
    TableConfig::load(&get_script_path(&format!("schemas/{}.json", name)))
}

/// Carga un registro de `scripts/records`.
pub fn load_record(name: &str) -> Result<Map<String, JsonValue>> {
    load_json(&get_script_path(&format!("records/{}.json", name)))
}
