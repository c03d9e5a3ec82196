//! Paquete de módulos que describen una tabla: sus columnas, claves y nombre.

pub mod column_definition;
pub mod ordering;
pub mod table_name;
pub mod table_schema;
