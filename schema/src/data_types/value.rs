//! Módulo para los valores que se ligan a los _placeholders_ de una sentencia.

use {
    crate::aliases::types::{Byte, Double, Float, Int, Long, Short, TinyInt, Uuid, Varint},
    chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc},
    serde::Serialize,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        net::IpAddr,
    },
};

/// Cantidad de nanosegundos en un segundo.
const NANOS_PER_SEC: Long = 1_000_000_000;

/// Representa el dato en cuestión que se liga a un `?`, junto con su representación en Rust.
///
/// Varios tipos de CQL comparten representación (por ejemplo `text`, `varchar` y `ascii`
/// usan [String]); qué valores acepta cada columna lo decide
/// [CqlType::accepts](crate::data_types::cql_type::CqlType::accepts).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    /// La ausencia de valor.
    Null,
    /// Texto, para `ascii`, `text` y `varchar`.
    Text(String),
    /// Entero de 8 bits, para `tinyint`.
    TinyInt(TinyInt),
    /// Entero de 16 bits, para `smallint`.
    SmallInt(Short),
    /// Entero de 32 bits, para `int`.
    Int(Int),
    /// Entero de 64 bits, para `bigint` y `counter`.
    BigInt(Long),
    /// Entero de precisión arbitraria, para `varint`.
    Varint(Varint),
    /// Punto flotante de precisión simple, para `float`.
    Float(Float),
    /// Punto flotante de precisión doble, para `double`.
    Double(Double),
    /// Decimal de precisión variable, guardado en su forma textual.
    Decimal(String),
    /// Booleano.
    Boolean(bool),
    /// Bytes arbitrarios, para `blob`.
    Blob(Vec<Byte>),
    /// Una fecha sin hora.
    Date(NaiveDate),
    /// Una hora sin fecha, en nanosegundos desde la medianoche.
    Time(Long),
    /// Fecha y hora en UTC.
    Timestamp(DateTime<Utc>),
    /// Un UUID, para `uuid` y `timeuuid`.
    Uuid(Uuid),
    /// Una dirección IP.
    Inet(IpAddr),
    /// Los elementos de un `set`.
    Set(Vec<Value>),
    /// Los elementos de una `list`.
    List(Vec<Value>),
}

impl Value {
    /// Crea un valor de tipo `set`.
    pub fn set<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Crea un valor de tipo `list`.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Crea un decimal a partir de su representación textual.
    pub fn decimal(digits: &str) -> Self {
        Self::Decimal(digits.to_string())
    }

    /// Verifica si el valor es nulo.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Nombre corto de la variante, para mensajes de error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::TinyInt(_) => "tinyint",
            Self::SmallInt(_) => "smallint",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Varint(_) => "varint",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Decimal(_) => "decimal",
            Self::Boolean(_) => "boolean",
            Self::Blob(_) => "blob",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::Timestamp(_) => "timestamp",
            Self::Uuid(_) => "uuid",
            Self::Inet(_) => "inet",
            Self::Set(_) => "set",
            Self::List(_) => "list",
        }
    }

    /// Describe el valor junto con su variante, por ejemplo `int 5`.
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            _ => format!("{} {}", self.kind(), self),
        }
    }
}

/// Formatea un UUID como `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
pub fn format_uuid(uuid: Uuid) -> String {
    let hex = format!("{:032x}", uuid);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Null => write!(f, "null"),
            Self::Text(text) => write!(f, "'{}'", text),
            Self::TinyInt(n) => write!(f, "{}", n),
            Self::SmallInt(n) => write!(f, "{}", n),
            Self::Int(n) => write!(f, "{}", n),
            Self::BigInt(n) => write!(f, "{}", n),
            Self::Varint(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Double(n) => write!(f, "{}", n),
            Self::Decimal(digits) => write!(f, "{}", digits),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Blob(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Self::Date(date) => write!(f, "'{}'", date.format("%Y-%m-%d")),
            Self::Time(nanos) => write!(f, "{}", nanos),
            Self::Timestamp(ts) => write!(f, "'{}'", ts.to_rfc3339()),
            Self::Uuid(uuid) => write!(f, "{}", format_uuid(*uuid)),
            Self::Inet(ip) => write!(f, "'{}'", ip),
            Self::Set(items) => write!(f, "{{{}}}", join_values(items)),
            Self::List(items) => write!(f, "[{}]", join_values(items)),
        }
    }
}

macro_rules! impl_value_from {
    ($($rust_type:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$rust_type> for Value {
                fn from(value: $rust_type) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_value_from!(
    String => Text,
    TinyInt => TinyInt,
    Short => SmallInt,
    Int => Int,
    Long => BigInt,
    Varint => Varint,
    Float => Float,
    Double => Double,
    bool => Boolean,
    Vec<Byte> => Blob,
    NaiveDate => Date,
    DateTime<Utc> => Timestamp,
    Uuid => Uuid,
    IpAddr => Inet,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveTime> for Value {
    fn from(time: NaiveTime) -> Self {
        let secs = Long::from(time.num_seconds_from_midnight());
        Self::Time(secs * NANOS_PER_SEC + Long::from(time.nanosecond()))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}
