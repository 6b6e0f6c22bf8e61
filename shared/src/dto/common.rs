use serde::{Deserialize, Deserializer, Serialize};

/// Error body returned by the backend on non-success responses.
///
/// The backend reports failures as `{"detail": "..."}`; some routes use
/// `{"error": "..."}` instead, both land in `detail`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub detail: String,
}

/// Reads a field the backend may send as `null`, treating it like a missing
/// one. Use together with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
