//! Read-only access to the session the login flow leaves in local storage.

use crate::config::Config;
use gloo_storage::{LocalStorage, Storage};

/// Bearer token of the signed-in user, if any.
pub fn access_token() -> Option<String> {
    read_session_value(Config::ACCESS_TOKEN_KEY)
}

/// Id of the signed-in user, if any.
pub fn current_user_id() -> Option<String> {
    read_session_value(Config::USER_ID_KEY)
}

/// Whether the viewer is looking at their own profile and may edit it.
pub fn is_own_profile(viewed_user_id: &str, session_user_id: Option<&str>) -> bool {
    session_user_id
        .map(|id| !id.is_empty() && id.trim() == viewed_user_id.trim())
        .unwrap_or(false)
}

fn read_session_value(key: &str) -> Option<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .map(|raw| decode_stored(&raw))
        .filter(|value| !value.is_empty())
}

/// Values are written either raw (`localStorage.setItem`) or JSON-encoded
/// (gloo-storage); a JSON string is unquoted, anything else is taken as is.
fn decode_stored(raw: &str) -> String {
    match serde_json::from_str::<String>(raw) {
        Ok(value) => value,
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_own_profile_matches_ids() {
        assert!(is_own_profile("42", Some("42")));
        assert!(!is_own_profile("42", Some("43")));
    }

    #[test]
    fn test_is_own_profile_requires_session() {
        assert!(!is_own_profile("42", None));
        assert!(!is_own_profile("", Some("")));
    }

    #[test]
    fn test_decode_stored_raw_and_json() {
        assert_eq!(decode_stored("eyJhbGciOi.payload.sig"), "eyJhbGciOi.payload.sig");
        assert_eq!(decode_stored("\"eyJhbGciOi.payload.sig\""), "eyJhbGciOi.payload.sig");
        assert_eq!(decode_stored("42"), "42");
    }
}
