//! Deserialize result sets into user-defined types with serde.

use crate::{
    connector::{ResultRow, ResultSet},
    error::{Error, ErrorKind},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize each row of a [`ResultSet`](../connector/struct.ResultSet.html).
///
/// For an expected structure:
///
/// ```
/// #[derive(serde::Deserialize)]
/// struct User {
///     id: i64,
///     name: String,
/// }
/// ```
///
/// and a result set of `SELECT id, name FROM users`, returns a `Vec<User>`.
pub fn from_rows<T: DeserializeOwned>(result_set: ResultSet) -> crate::Result<Vec<T>> {
    let mut deserialized = Vec::with_capacity(result_set.len());

    for row in result_set {
        deserialized.push(from_row(row)?);
    }

    Ok(deserialized)
}

/// Deserialize a single row into a user-defined type.
pub fn from_row<T: DeserializeOwned>(row: ResultRow) -> crate::Result<T> {
    let json = Value::from(row);

    serde_json::from_value(json).map_err(|e| Error::builder(ErrorKind::FromRowError(e)).build())
}
