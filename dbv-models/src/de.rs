//! Deserialization helpers.

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's default value.
///
/// `#[serde(default)]` only covers missing keys; the API also sends `null`
/// for unset scalars and lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
