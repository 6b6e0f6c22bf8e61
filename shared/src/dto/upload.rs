use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};

/// Reply of the `/upload_image` endpoint. `errno == 0` means success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadImageResponse {
    pub errno: i32,
    #[serde(default)]
    pub data: Option<UploadedImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedImage {
    pub url: String,
}

impl UploadImageResponse {
    /// The stored image URL, or `SharedError::Upload` when the backend
    /// rejected the file or omitted the URL.
    pub fn into_url(self) -> Result<String> {
        match (self.errno, self.data) {
            (0, Some(image)) if !image.url.is_empty() => Ok(image.url),
            (errno, _) => Err(SharedError::Upload { errno }),
        }
    }
}
