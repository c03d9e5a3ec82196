//! Paquete de módulos que contienen los tipos de datos que se pueden declarar en un esquema.

/// Módulo que contiene las colecciones (`set` y `list`).
pub mod collection_type;
/// Módulo que contiene el tipo de una columna.
pub mod cql_type;
/// Módulo que contiene las llamadas a funciones nativas y los parámetros.
pub mod native_function;
/// Módulo que contiene los tipos nativos de _CQL_.
pub mod native_types;
/// Módulo que contiene los valores que se ligan a los _placeholders_.
pub mod value;
