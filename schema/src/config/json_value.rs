//! Módulo que convierte valores JSON en [Value]s según el tipo de su columna.

use {
    crate::{
        aliases::{
            results::Result,
            types::{Byte, Int, Short, TinyInt, Uuid, Varint},
        },
        data_types::{
            collection_type::CollectionType, cql_type::CqlType, native_types::NativeType,
            value::Value,
        },
        errors::error::Error,
    },
    chrono::{DateTime, NaiveDate, NaiveTime, Utc},
    serde_json::Value as JsonValue,
    std::net::IpAddr,
};

/// Convierte un valor JSON al [Value] que corresponde al tipo de la columna.
///
/// Los `null` de JSON se convierten en [Value::Null]; si la columna los admite o no se
/// decide después, al armar la sentencia.
pub fn value_from_json(column: &str, cql_type: &CqlType, raw: &JsonValue) -> Result<Value> {
    if raw.is_null() {
        return Ok(Value::Null);
    }

    match cql_type {
        CqlType::Native(native) => native_from_json(column, *native, raw),
        CqlType::Collection(collection) => {
            let items = raw
                .as_array()
                .ok_or_else(|| mismatch(column, cql_type, raw))?
                .iter()
                .map(|item| native_from_json(column, collection.element(), item))
                .collect::<Result<Vec<Value>>>()?;
            match collection {
                CollectionType::Set(_) => Ok(Value::Set(items)),
                CollectionType::List(_) => Ok(Value::List(items)),
            }
        }
    }
}

fn mismatch(column: &str, cql_type: &CqlType, raw: &JsonValue) -> Error {
    Error::TypeMismatch(column.to_string(), *cql_type, format!("JSON {}", raw))
}

fn native_from_json(column: &str, native: NativeType, raw: &JsonValue) -> Result<Value> {
    let cql_type = CqlType::Native(native);
    let fail = || mismatch(column, &cql_type, raw);

    let value = match native {
        NativeType::Ascii | NativeType::Text | NativeType::Varchar => {
            raw.as_str().map(|text| Value::Text(text.to_string()))
        }
        NativeType::Boolean => raw.as_bool().map(Value::Boolean),
        NativeType::TinyInt => raw
            .as_i64()
            .and_then(|n| TinyInt::try_from(n).ok())
            .map(Value::TinyInt),
        NativeType::SmallInt => raw
            .as_i64()
            .and_then(|n| Short::try_from(n).ok())
            .map(Value::SmallInt),
        NativeType::Int => raw
            .as_i64()
            .and_then(|n| Int::try_from(n).ok())
            .map(Value::Int),
        NativeType::BigInt | NativeType::Counter => raw.as_i64().map(Value::BigInt),
        NativeType::Varint => match raw {
            JsonValue::String(digits) => digits.parse::<Varint>().ok().map(Value::Varint),
            _ => raw.as_i64().map(|n| Value::Varint(Varint::from(n))),
        },
        NativeType::Float => raw.as_f64().map(|n| Value::Float(n as f32)),
        NativeType::Double => raw.as_f64().map(Value::Double),
        NativeType::Decimal => match raw {
            JsonValue::String(digits) => Some(Value::Decimal(digits.to_string())),
            JsonValue::Number(number) => Some(Value::Decimal(number.to_string())),
            _ => None,
        },
        NativeType::Blob => raw.as_str().and_then(parse_blob).map(Value::Blob),
        NativeType::Date => raw
            .as_str()
            .and_then(|text| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
            .map(Value::Date),
        NativeType::Time => match raw {
            JsonValue::String(text) => text.parse::<NaiveTime>().ok().map(Value::from),
            _ => raw.as_i64().map(Value::Time),
        },
        NativeType::Timestamp => match raw {
            JsonValue::String(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|ts| Value::Timestamp(ts.with_timezone(&Utc))),
            _ => raw
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(Value::Timestamp),
        },
        NativeType::Uuid | NativeType::TimeUuid => {
            raw.as_str().and_then(parse_uuid).map(Value::Uuid)
        }
        NativeType::Inet => raw
            .as_str()
            .and_then(|text| text.parse::<IpAddr>().ok())
            .map(Value::Inet),
    };

    value.ok_or_else(fail)
}

/// Parsea un UUID en su forma `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
pub fn parse_uuid(text: &str) -> Option<Uuid> {
    let hex: String = text.chars().filter(|c| *c != '-').collect();
    if hex.len() != 32 {
        return None;
    }
    Uuid::from_str_radix(&hex, 16).ok()
}

/// Parsea un blob escrito como `0x` seguido de dígitos hexadecimales.
pub fn parse_blob(text: &str) -> Option<Vec<Byte>> {
    let hex = text.strip_prefix("0x")?;
    if hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| hex.get(i..i + 2).and_then(|pair| Byte::from_str_radix(pair, 16).ok()))
        .collect()
}
