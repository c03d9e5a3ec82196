//! Módulo para el tipo de una columna.

use {
    crate::data_types::{collection_type::CollectionType, native_types::NativeType, value::Value},
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Tipo de dato de una columna.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CqlType {
    /// Tipo de dato nativo.
    Native(NativeType),
    /// Tipo de colección.
    Collection(CollectionType),
}

impl CqlType {
    /// Un `set` de elementos del tipo nativo dado.
    pub fn set_of(element: NativeType) -> Self {
        Self::Collection(CollectionType::Set(element))
    }

    /// Una `list` de elementos del tipo nativo dado.
    pub fn list_of(element: NativeType) -> Self {
        Self::Collection(CollectionType::List(element))
    }

    /// Verifica si un valor (no nulo) puede guardarse en una columna de este tipo.
    ///
    /// Los enteros más chicos se aceptan en columnas de enteros más grandes, ya que
    /// la conversión no pierde información. La nulabilidad la decide la columna.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Native(native), _) => native_accepts(*native, value),
            (Self::Collection(CollectionType::Set(inner)), Value::Set(items))
            | (Self::Collection(CollectionType::List(inner)), Value::List(items)) => items
                .iter()
                .all(|item| !item.is_null() && native_accepts(*inner, item)),
            _ => false,
        }
    }
}

fn native_accepts(native: NativeType, value: &Value) -> bool {
    use crate::data_types::{native_types::NativeType as N, value::Value as V};

    match (native, value) {
        (N::Ascii, V::Text(text)) => text.is_ascii(),
        (N::Text | N::Varchar, V::Text(_)) => true,
        (N::TinyInt, V::TinyInt(_)) => true,
        (N::SmallInt, V::TinyInt(_) | V::SmallInt(_)) => true,
        (N::Int, V::TinyInt(_) | V::SmallInt(_) | V::Int(_)) => true,
        (N::BigInt | N::Counter, V::TinyInt(_) | V::SmallInt(_) | V::Int(_) | V::BigInt(_)) => {
            true
        }
        (
            N::Varint,
            V::TinyInt(_) | V::SmallInt(_) | V::Int(_) | V::BigInt(_) | V::Varint(_),
        ) => true,
        (N::Float, V::Float(_)) => true,
        (N::Double, V::Float(_) | V::Double(_)) => true,
        (N::Decimal, V::Decimal(_) | V::Float(_) | V::Double(_)) => true,
        (N::Boolean, V::Boolean(_)) => true,
        (N::Blob, V::Blob(_)) => true,
        (N::Date, V::Date(_)) => true,
        (N::Time, V::Time(_)) => true,
        (N::Timestamp, V::Timestamp(_)) => true,
        (N::Uuid | N::TimeUuid, V::Uuid(_)) => true,
        (N::Inet, V::Inet(_)) => true,
        _ => false,
    }
}

impl From<NativeType> for CqlType {
    fn from(native: NativeType) -> Self {
        Self::Native(native)
    }
}

impl From<CollectionType> for CqlType {
    fn from(collection: CollectionType) -> Self {
        Self::Collection(collection)
    }
}

impl Display for CqlType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Native(native) => write!(f, "{}", native),
            Self::Collection(collection) => write!(f, "{}", collection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1_renderizar_tipos() {
        assert_eq!(CqlType::from(NativeType::Varchar).to_string(), "varchar");
        assert_eq!(CqlType::set_of(NativeType::Int).to_string(), "set<int>");
        assert_eq!(CqlType::list_of(NativeType::Text).to_string(), "list<text>");
    }

    #[test]
    fn test_2_acepta_valores_nativos() {
        let text = CqlType::from(NativeType::Text);
        assert!(text.accepts(&Value::from("hola")));
        assert!(!text.accepts(&Value::Int(1)));

        let ascii = CqlType::from(NativeType::Ascii);
        assert!(ascii.accepts(&Value::from("plain")));
        assert!(!ascii.accepts(&Value::from("ñandú")));

        let uuid = CqlType::from(NativeType::TimeUuid);
        assert!(uuid.accepts(&Value::Uuid(42)));
    }

    #[test]
    fn test_3_ensancha_enteros() {
        let bigint = CqlType::from(NativeType::BigInt);
        assert!(bigint.accepts(&Value::Int(3)));
        assert!(bigint.accepts(&Value::TinyInt(3)));

        let smallint = CqlType::from(NativeType::SmallInt);
        assert!(!smallint.accepts(&Value::Int(3)));
    }

    #[test]
    fn test_4_acepta_colecciones() {
        let tags = CqlType::set_of(NativeType::Text);
        assert!(tags.accepts(&Value::set(["a", "b"])));
        assert!(tags.accepts(&Value::Set(vec![])));
        assert!(!tags.accepts(&Value::list(["a"])));
        assert!(!tags.accepts(&Value::Set(vec![Value::Null])));
        assert!(!tags.accepts(&Value::set([1, 2])));
    }

    #[test]
    fn test_5_deserializar_nativo_o_coleccion() {
        let native: std::result::Result<CqlType, _> = serde_json::from_str("\"timeuuid\"");
        assert!(matches!(native, Ok(CqlType::Native(NativeType::TimeUuid))));

        let list: std::result::Result<CqlType, _> = serde_json::from_str(r#"{"list": "int"}"#);
        assert!(matches!(
            list,
            Ok(CqlType::Collection(CollectionType::List(NativeType::Int)))
        ));
    }
}
