use serde::Deserialize;
use std::sync::Arc;

use crate::api::{ApiRequest, FormField, FormValue, HttpTransport, Method, RequestBody};
use crate::common::UploadError;
use crate::config::AppConfig;

pub const MEDIA_HOST: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    pub fn accept(&self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Video => "video/*",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct UploadResult {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    error: Option<UploadFailure>,
}

#[derive(Debug, Default, Deserialize)]
struct UploadFailure {
    #[serde(default)]
    message: Option<String>,
}

/// Unsigned uploads of images and videos to the third-party media host.
#[derive(Clone)]
pub struct MediaUploader {
    cloud_name: String,
    upload_preset: String,
    transport: Arc<dyn HttpTransport>,
}

impl MediaUploader {
    pub fn new(config: &AppConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            cloud_name: config.media_cloud_name.clone(),
            upload_preset: config.media_upload_preset.clone(),
            transport,
        }
    }

    pub fn upload_url(&self, kind: AssetKind) -> String {
        format!("{}/{}/{}/upload", MEDIA_HOST, self.cloud_name, kind.as_str())
    }

    /// Uploads one asset and returns its public `https` URL.
    pub async fn upload(
        &self,
        kind: AssetKind,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let request = ApiRequest {
            method: Method::Post,
            url: self.upload_url(kind),
            headers: Vec::new(),
            body: RequestBody::Multipart(vec![
                FormField {
                    name: "file".into(),
                    value: FormValue::File {
                        filename: filename.to_string(),
                        bytes,
                    },
                },
                FormField {
                    name: "upload_preset".into(),
                    value: FormValue::Text(self.upload_preset.clone()),
                },
            ]),
        };

        let response = self.transport.send(request).await?;
        let result: UploadResult = response.json().unwrap_or_default();

        match result.secure_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => {
                let reason = result
                    .error
                    .and_then(|e| e.message)
                    .unwrap_or_else(|| "Unknown error".to_string());
                log::warn!("{} upload of {} rejected: {}", kind.as_str(), filename, reason);
                Err(UploadError::Rejected(reason))
            }
        }
    }
}
