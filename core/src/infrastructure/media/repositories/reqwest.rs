use reqwest::Client;
use tracing::{debug, error};
use url::Url;

use crate::{
    domain::{common::CoreError, media::entities::MediaObject, media::port::MediaStore},
    infrastructure::media::repositories::entities::{
        MediaStoreConfig, UploadRequest, UploadResponse,
    },
};

/// Talks to the external media host over HTTP. The host takes a JSON body
/// with the raw payload and an API key, and answers with the hosted URL.
#[derive(Debug, Clone)]
pub struct ReqwestMediaStore {
    upload_url: String,
    api_key: String,
    client: Client,
}

impl ReqwestMediaStore {
    pub fn new(config: MediaStoreConfig, client: Client) -> Self {
        Self {
            upload_url: config.upload_url,
            api_key: config.api_key,
            client,
        }
    }
}

impl MediaStore for ReqwestMediaStore {
    async fn upload(&self, payload: &str) -> Result<MediaObject, CoreError> {
        let url = Url::parse(&self.upload_url).map_err(|_| CoreError::InvalidMediaEndpoint {
            endpoint: self.upload_url.clone(),
        })?;

        let response = self
            .client
            .post(url)
            .json(&UploadRequest {
                file: payload,
                api_key: &self.api_key,
            })
            .send()
            .await
            .map_err(|e| {
                error!("{}", e);
                CoreError::MediaUploadFailed { msg: e.to_string() }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|message| message.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| status.to_string());

            return Err(CoreError::MediaUploadFailed { msg: detail });
        }

        let uploaded = response.json::<UploadResponse>().await.map_err(|e| {
            debug!("{}", e);
            CoreError::MediaUploadFailed { msg: e.to_string() }
        })?;

        Ok(MediaObject {
            url: uploaded.url,
            public_id: uploaded.public_id,
        })
    }
}
