use crate::auth::access_token;
use compete_shared::{ErrorResponse, Result, SharedError};
use gloo_net::http::{Request, RequestBuilder, Response};
use log::{debug, error};
use serde::de::DeserializeOwned;

/// Creates a request with the session's bearer token attached
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    };

    match access_token() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        None => {
            debug!("No access token stored, sending {} {} unauthenticated", method, url);
            req
        }
    }
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    authenticated_request("PUT", url)
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Maps a transport failure into the shared error type.
pub fn network_error(context: &str, e: gloo_net::Error) -> SharedError {
    error!("{}: {}", context, e);
    SharedError::Network(format!("{}: {}", context, e))
}

/// Decodes a JSON body, turning non-success statuses into `SharedError`.
pub async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.detail,
            Err(_) => response.status_text(),
        };
        error!("{} failed with status {}: {}", context, status, message);
        return Err(SharedError::from_status(status, message));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to parse {} response: {}", context, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
