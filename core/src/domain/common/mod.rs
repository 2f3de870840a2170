use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

use crate::domain::post::entities::{PostId, PostType};
use crate::domain::subreddit::entities::SubredditId;
use crate::domain::user::entities::UserId;

pub mod services;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Service is currently unavailable")]
    ServiceUnavailable(String),

    #[error("Post with id {id} not found")]
    PostNotFound { id: PostId },

    #[error("Subreddit with id {id} not found")]
    SubredditNotFound { id: SubredditId },

    #[error("User with id {id} not found")]
    UserNotFound { id: UserId },

    #[error("Post title cannot be empty")]
    InvalidTitle,

    #[error("Invalid post type: {given}")]
    InvalidPostType { given: String },

    #[error("{post_type} submission cannot be empty")]
    EmptySubmission { post_type: PostType },

    #[error("Media upload failed: {msg}")]
    MediaUploadFailed { msg: String },

    #[error("Invalid media endpoint: {endpoint}")]
    InvalidMediaEndpoint { endpoint: String },

    #[error("Health check failed")]
    Unhealthy,

    #[error("Database error: {msg}")]
    DatabaseError { msg: String },

    /// Serialization error occurred when converting a document
    #[error("Serialization error: {msg}")]
    SerializationError { msg: String },
}

#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPaginated {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for GetPaginated {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl GetPaginated {
    /// Largest page size a client may request.
    pub const MAX_LIMIT: u32 = 50;

    /// Clamp page and limit into their accepted ranges.
    pub fn normalized(&self) -> GetPaginated {
        GetPaginated {
            page: self.page.max(1),
            limit: self.limit.clamp(1, Self::MAX_LIMIT),
        }
    }

    /// Number of elements preceding this page.
    pub fn offset(&self) -> u64 {
        let normalized = self.normalized();
        (normalized.page as u64 - 1) * normalized.limit as u64
    }

    /// Compute the slice window for a collection of `total_count` elements,
    /// together with references to the neighbouring pages when they exist.
    ///
    /// The returned indices are the raw page bounds. `end_index` may point
    /// past the collection on the last page; data access clamps it.
    pub fn window(&self, total_count: u64) -> PaginationWindow {
        let normalized = self.normalized();
        let start_index = (normalized.page as u64 - 1) * normalized.limit as u64;
        let end_index = normalized.page as u64 * normalized.limit as u64;

        let previous = (start_index > 0).then(|| PageRef {
            page: normalized.page - 1,
            limit: normalized.limit,
        });
        let next = (end_index < total_count).then(|| PageRef {
            page: normalized.page.saturating_add(1),
            limit: normalized.limit,
        });

        PaginationWindow {
            start_index,
            end_index,
            previous,
            next,
        }
    }
}

/// Reference to an adjacent page, advertised to clients next to the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageRef {
    pub page: u32,
    pub limit: u32,
}

/// Slice bounds and neighbouring pages for one page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    pub start_index: u64,
    pub end_index: u64,
    pub previous: Option<PageRef>,
    pub next: Option<PageRef>,
}

pub type TotalPaginatedElements = u64;
