//! Módulo para aliases de los tipos de datos nativos de Cassandra.

// Definiciones de notaciones

/// Un entero de un solo byte *con signo*.
pub type TinyInt = i8;

/// Un entero compuesto por 2 bytes *con signo*.
pub type Short = i16;

/// Un entero de 4 bytes *con signo*.
pub type Int = i32;

/// Un entero de 8 bytes *con signo*.
pub type Long = i64;

/// Un entero de precisión arbitraria, acotado a 16 bytes.
pub type Varint = i128;

/// Un entero compuesto por un solo byte *sin signo*.
pub type Byte = u8;

/// Un entero de 4 bytes *sin signo*.
pub type Uint = u32;

/// Un entero de 16 bytes que emula un UUID (asumimos no tiene signo).
pub type Uuid = u128;

/// Un número de punto flotante IEEE 754 (Binary32) de precisión simple.
pub type Float = f32;

/// Un número de punto flotante IEEE 754 (Binary64) de precisión doble.
pub type Double = f64;
