//! Image upload client for the object-storage endpoint.
//!
//! The storage service is a separate host from the marketplace backend;
//! it authenticates with a static API key header and answers each
//! multipart upload with the public URL of the stored file.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::ApiError;

/// Maximum accepted image size; larger payloads are rejected before any
/// request is made
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "fileUrl", default)]
    file_url: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the storage upload endpoint
#[derive(Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for UploadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl UploadClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .context("Failed to create upload HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    /// Upload one image, returning the public URL of the stored file
    pub async fn upload_image(
        &self,
        filename: &str,
        mimetype: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::Validation(format!(
                "image {filename} exceeds the {} MB upload limit",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mimetype)
            .map_err(|_| ApiError::Validation(format!("invalid mime type: {mimetype}")))?;
        let form = Form::new().part("file", part);

        debug!(filename, "uploading image");
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                warn!("upload network error: {err}");
                ApiError::Network
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = if status.as_u16() == 413 {
                "image is too large, upload a smaller one".to_string()
            } else {
                format!("upload failed with status {}", status)
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response.json().await.map_err(|_| ApiError::Server {
            status: status.as_u16(),
            message: "malformed upload response".to_string(),
        })?;

        body.file_url.ok_or_else(|| ApiError::Server {
            status: status.as_u16(),
            message: body.message.unwrap_or_else(|| "image upload failed".to_string()),
        })
    }
}
