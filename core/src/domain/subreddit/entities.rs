use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::post::entities::PostId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct SubredditId(pub Uuid);

impl std::fmt::Display for SubredditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SubredditId {
    fn from(uuid: Uuid) -> Self {
        SubredditId(uuid)
    }
}

impl From<SubredditId> for Uuid {
    fn from(subreddit_id: SubredditId) -> Self {
        subreddit_id.0
    }
}

/// A community that posts belong to. The `posts` array mirrors the posts
/// collection and is maintained by the post service on create and delete.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Subreddit {
    pub id: SubredditId,
    pub name: String,
    pub description: Option<String>,
    pub posts: Vec<PostId>,

    pub created_at: DateTime<Utc>,
}
