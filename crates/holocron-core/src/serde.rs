// Module name shadows the `serde` crate; use `::serde` for the external one.
use ::serde::{Deserialize, Deserializer};

/// Deserialize a field that must tell "absent" apart from an explicit `null`.
///
/// Pair with `#[serde(default, deserialize_with = "holocron_core::serde::double_option")]`
/// on an `Option<Option<T>>` field: a missing key stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
