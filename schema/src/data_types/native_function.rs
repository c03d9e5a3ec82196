//! Módulo para las funciones nativas y los parámetros de una sentencia.

use {
    crate::{
        aliases::types::{Byte, Double, Float, Int, Long, Short, TinyInt, Uuid, Varint},
        data_types::value::Value,
    },
    chrono::{DateTime, NaiveDate, NaiveTime, Utc},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        net::IpAddr,
    },
};

/// Una llamada a una función evaluada por el servidor, como `now()`.
///
/// Su texto se inserta tal cual en la sentencia en lugar de ligarse a un `?`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NativeFunctionCall {
    text: String,
}

impl NativeFunctionCall {
    /// Envuelve el texto CQL de una llamada.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// `now()`: un `timeuuid` generado por el servidor.
    pub fn now() -> Self {
        Self::new("now()")
    }

    /// `uuid()`: un `uuid` aleatorio generado por el servidor.
    pub fn uuid() -> Self {
        Self::new("uuid()")
    }

    /// `currentTimestamp()`: el `timestamp` actual del servidor.
    pub fn current_timestamp() -> Self {
        Self::new("currentTimestamp()")
    }

    /// `currentDate()`: la `date` actual del servidor.
    pub fn current_date() -> Self {
        Self::new("currentDate()")
    }

    /// `toTimestamp(<arg>)`, donde el argumento es a su vez CQL crudo.
    pub fn to_timestamp(arg: &str) -> Self {
        Self::new(&format!("toTimestamp({})", arg))
    }

    /// El texto CQL de la llamada.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for NativeFunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

/// Lo que recibe una operación DML por cada columna: un valor a ligar o una función nativa.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// Un valor que se liga a su `?`.
    Bound(Value),
    /// Una función que reemplaza a su `?` en el texto.
    Native(NativeFunctionCall),
}

impl Param {
    /// Crea un parámetro de función nativa a partir de su texto.
    pub fn native(text: &str) -> Self {
        Self::Native(NativeFunctionCall::new(text))
    }

    /// Verifica si el parámetro es una función nativa.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Self::Bound(value)
    }
}

impl From<NativeFunctionCall> for Param {
    fn from(call: NativeFunctionCall) -> Self {
        Self::Native(call)
    }
}

/// Arma un `Vec<Param>` a partir de expresiones de distintos tipos.
#[macro_export]
macro_rules! params {
    ($($param:expr),* $(,)?) => {
        vec![$($crate::data_types::native_function::Param::from($param)),*]
    };
}

impl<T: Into<Value>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        Self::Bound(Value::from(value))
    }
}

macro_rules! impl_param_from {
    ($($rust_type:ty),* $(,)?) => {
        $(
            impl From<$rust_type> for Param {
                fn from(value: $rust_type) -> Self {
                    Self::Bound(Value::from(value))
                }
            }
        )*
    };
}

impl_param_from!(
    &str,
    String,
    TinyInt,
    Short,
    Int,
    Long,
    Varint,
    Float,
    Double,
    bool,
    Vec<Byte>,
    NaiveDate,
    NaiveTime,
    DateTime<Utc>,
    Uuid,
    IpAddr,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1_funciones_conocidas() {
        assert_eq!(NativeFunctionCall::now().text(), "now()");
        assert_eq!(
            NativeFunctionCall::to_timestamp("now()").to_string(),
            "toTimestamp(now())"
        );
    }

    #[test]
    fn test_2_parametros_desde_valores() {
        assert_eq!(Param::from("hola"), Param::Bound(Value::from("hola")));
        assert_eq!(
            Param::from(NativeFunctionCall::uuid()),
            Param::native("uuid()")
        );
        assert!(Param::native("now()").is_native());
        assert!(!Param::from(3).is_native());
    }
}
