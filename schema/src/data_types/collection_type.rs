//! Módulo para los tipos de colección.

use {
    crate::data_types::native_types::NativeType,
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Tipo de colección.
///
/// Sólo se admiten colecciones de tipos nativos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    /// SET '<' native_type '>'
    Set(NativeType),

    /// LIST '<' native_type '>'
    List(NativeType),
}

impl CollectionType {
    /// El tipo de los elementos de la colección.
    pub fn element(&self) -> NativeType {
        match self {
            Self::Set(inner) | Self::List(inner) => *inner,
        }
    }

    /// El nombre del tipo de colección.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Set(_) => "set",
            Self::List(_) => "list",
        }
    }
}

impl Display for CollectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}<{}>", self.kind(), self.element())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1_renderizar_colecciones() {
        assert_eq!(CollectionType::Set(NativeType::Text).to_string(), "set<text>");
        assert_eq!(
            CollectionType::List(NativeType::TimeUuid).to_string(),
            "list<timeuuid>"
        );
    }

    #[test]
    fn test_2_deserializar() {
        let set: std::result::Result<CollectionType, _> = serde_json::from_str(r#"{"set": "int"}"#);

        assert!(matches!(set, Ok(CollectionType::Set(NativeType::Int))));
    }
}
