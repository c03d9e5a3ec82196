//! Módulo que reemplaza _placeholders_ por llamadas a funciones nativas.
//!
//! Algunas posiciones de una sentencia tienen que ser evaluadas por el servidor (como
//! `now()`), así que su texto va en la sentencia y no en la lista de valores. El resto
//! de los `?` tiene que seguir ligándose en el mismo orden.

use crate::{
    aliases::results::Result,
    data_types::{native_function::Param, value::Value},
    errors::error::Error,
    statements::statement::{Statement, PLACEHOLDER},
};

/// Inserta en `cql` el texto de cada [Param::Native], y devuelve la sentencia con los
/// valores restantes.
///
/// Requiere un parámetro por cada `?`. Si ningún parámetro es una función nativa, el
/// texto queda idéntico.
pub fn inject_function_calls(cql: &str, params: Vec<Param>) -> Result<Statement> {
    let fragments: Vec<&str> = cql.split(PLACEHOLDER).collect();
    let placeholders = fragments.len() - 1;
    if placeholders != params.len() {
        return Err(Error::ValueCountMismatch(
            cql.to_string(),
            placeholders,
            params.len(),
        ));
    }

    let native_indexes: Vec<usize> = params
        .iter()
        .enumerate()
        .filter(|(_, param)| param.is_native())
        .map(|(index, _)| index)
        .collect();
    if native_indexes.is_empty() {
        let values = params.into_iter().filter_map(bound_value).collect();
        return Ok(Statement::new(cql.to_string(), values));
    }

    let mut text = String::with_capacity(cql.len());
    text.push_str(fragments[0]);
    for (param, fragment) in params.iter().zip(&fragments[1..]) {
        match param {
            Param::Native(call) => text.push_str(call.text()),
            Param::Bound(_) => text.push(PLACEHOLDER),
        }
        text.push_str(fragment);
    }

    let values = params
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !native_indexes.contains(index))
        .filter_map(|(_, param)| bound_value(param))
        .collect();

    Ok(Statement::new(text, values))
}

fn bound_value(param: Param) -> Option<Value> {
    match param {
        Param::Bound(value) => Some(value),
        Param::Native(_) => None,
    }
}
