//! Módulo para los tipos nativos de CQL.

use {
    crate::{aliases::results::Result, errors::error::Error},
    serde::{Deserialize, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Native types are the basic data types that are supported by Cassandra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    /// ASCII character string
    Ascii,

    /// 64-bit signed long
    BigInt,

    /// Arbitrary bytes (no validation)
    Blob,

    /// Either true or false
    Boolean,

    /// Counter column (64-bit signed value).
    Counter,

    /// A date (with no corresponding time value).
    Date,

    /// Variable-precision decimal
    Decimal,

    /// 64-bit IEEE-754 floating point
    Double,

    /// 32-bit IEEE-754 floating point
    Float,

    /// An IP address, either IPv4 (4 bytes long) or IPv6 (16 bytes long).
    Inet,

    /// 32-bit signed int
    Int,

    /// 16-bit signed int
    SmallInt,

    /// UTF8 encoded string
    Text,

    /// A time (with no corresponding date value) with nanosecond precision.
    Time,

    /// A timestamp (date and time) with millisecond precision.
    Timestamp,

    /// Version 1 UUID, generally used as a “conflict-free” timestamp.
    TimeUuid,

    /// 8-bit signed int
    TinyInt,

    /// A UUID (of any version)
    Uuid,

    /// UTF8 encoded string
    Varchar,

    /// Arbitrary-precision integer
    Varint,
}

impl NativeType {
    /// Todos los tipos nativos, en orden alfabético.
    pub const ALL: [NativeType; 20] = [
        NativeType::Ascii,
        NativeType::BigInt,
        NativeType::Blob,
        NativeType::Boolean,
        NativeType::Counter,
        NativeType::Date,
        NativeType::Decimal,
        NativeType::Double,
        NativeType::Float,
        NativeType::Inet,
        NativeType::Int,
        NativeType::SmallInt,
        NativeType::Text,
        NativeType::Time,
        NativeType::Timestamp,
        NativeType::TimeUuid,
        NativeType::TinyInt,
        NativeType::Uuid,
        NativeType::Varchar,
        NativeType::Varint,
    ];

    /// El token con el que el tipo aparece en una sentencia CQL.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::BigInt => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Inet => "inet",
            Self::Int => "int",
            Self::SmallInt => "smallint",
            Self::Text => "text",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::TimeUuid => "timeuuid",
            Self::TinyInt => "tinyint",
            Self::Uuid => "uuid",
            Self::Varchar => "varchar",
            Self::Varint => "varint",
        }
    }
}

impl Display for NativeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.token())
    }
}

impl FromStr for NativeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let type_name = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|native| native.token() == type_name)
            .copied()
            .ok_or_else(|| Error::ConfigError(format!("'{}' no es un tipo nativo.", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1_tokens() {
        assert_eq!(NativeType::TimeUuid.to_string(), "timeuuid");
        assert_eq!(NativeType::BigInt.to_string(), "bigint");
        assert_eq!(NativeType::SmallInt.to_string(), "smallint");
    }

    #[test]
    fn test_2_parsear_desde_token() {
        for native in NativeType::ALL {
            assert_eq!(native.token().parse::<NativeType>(), Ok(native));
        }
        assert_eq!("VARCHAR".parse::<NativeType>(), Ok(NativeType::Varchar));
    }

    #[test]
    fn test_3_parsear_tipo_desconocido() {
        let res = "duration".parse::<NativeType>();

        assert!(matches!(res, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_4_serde_usa_el_token() {
        let json = serde_json::to_string(&NativeType::TimeUuid).unwrap_or_default();
        assert_eq!(json, "\"timeuuid\"");

        let native: std::result::Result<NativeType, _> = serde_json::from_str("\"smallint\"");
        assert!(matches!(native, Ok(NativeType::SmallInt)));
    }
}
