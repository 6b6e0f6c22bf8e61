use crate::api::api_url;
use crate::api::utils::{network_error, read_json};
use compete_shared::{Result, SharedError, UploadImageResponse};
use gloo_net::http::Request;
use log::debug;
use web_sys::{File, FormData};

const UPLOAD_PATH: &str = "/upload_image";
const UPLOAD_FIELD: &str = "image";

/// Uploads an image as multipart form data and returns its public URL.
///
/// A reply with a non-zero `errno` is reported as `SharedError::Upload`.
pub async fn upload_image(file: &File) -> Result<String> {
    debug!("Uploading image {} ({} bytes)", file.name(), file.size());

    let form = FormData::new()
        .map_err(|e| SharedError::Conversion(format!("Failed to create form data: {:?}", e)))?;
    form.append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| SharedError::Conversion(format!("Failed to attach image: {:?}", e)))?;

    let response = Request::post(&api_url(UPLOAD_PATH))
        .body(form)
        .map_err(|e| SharedError::Conversion(format!("Failed to build upload request: {}", e)))?
        .send()
        .await
        .map_err(|e| network_error("Failed to upload image", e))?;

    let reply: UploadImageResponse = read_json(response, "image upload").await?;
    let url = reply.into_url()?;
    debug!("Image stored at {}", url);
    Ok(url)
}
