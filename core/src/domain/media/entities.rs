use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An image hosted by the external media service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct MediaObject {
    /// Public URL the image is served from. This is what gets stored as
    /// the post's image submission.
    pub url: String,
    /// Identifier assigned by the media host.
    pub public_id: String,
}
