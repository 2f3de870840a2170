use std::sync::{Arc, Mutex};

use crate::domain::common::CoreError;

use super::entities::MediaObject;

pub trait MediaStore: Send + Sync {
    /// Hand an image payload to the media host, returning where it ended up.
    fn upload(&self, payload: &str) -> impl Future<Output = Result<MediaObject, CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockMediaStore {
    uploads: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockMediaStore {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A store whose uploads always fail, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Payloads uploaded so far, in order.
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

impl MediaStore for MockMediaStore {
    async fn upload(&self, payload: &str) -> Result<MediaObject, CoreError> {
        if self.fail {
            return Err(CoreError::MediaUploadFailed {
                msg: "mock upload failure".to_string(),
            });
        }

        let public_id = uuid::Uuid::new_v4();
        self.uploads.lock().unwrap().push(payload.to_owned());

        Ok(MediaObject {
            url: format!("https://media.example/{public_id}.png"),
            public_id: public_id.to_string(),
        })
    }
}
