use serde::{Deserialize, Serialize};

/// Where the media host lives and how to authenticate against it.
#[derive(Debug, Clone, Default)]
pub struct MediaStoreConfig {
    pub upload_url: String,
    pub api_key: String,
}

/// Wire format the media host expects for an upload.
#[derive(Debug, Serialize)]
pub struct UploadRequest<'a> {
    pub file: &'a str,
    pub api_key: &'a str,
}

/// Wire format the media host answers with.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub public_id: String,
}
