use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::post::entities::PostId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct UserId(pub Uuid);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        UserId(uuid)
    }
}

impl From<UserId> for Uuid {
    fn from(user_id: UserId) -> Self {
        user_id.0
    }
}

/// An account as this service sees it. Registration lives elsewhere; the
/// post service only bumps karma and maintains the `posts` array.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub karma: i64,
    pub posts: Vec<PostId>,

    pub created_at: DateTime<Utc>,
}
