use bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use serde::{Deserialize, Serialize};

use crate::domain::post::entities::PostId;
use crate::domain::user::entities::{User, UserId};

/// BSON shape of a user in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub username: String,
    pub karma: i64,
    #[serde(default)]
    pub posts: Vec<BsonUuid>,
    pub created_at: BsonDateTime,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: BsonUuid::from_uuid_1(user.id.0),
            username: user.username,
            karma: user.karma,
            posts: user
                .posts
                .into_iter()
                .map(|post| BsonUuid::from_uuid_1(post.0))
                .collect(),
            created_at: BsonDateTime::from_chrono(user.created_at),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: UserId(document.id.to_uuid_1()),
            username: document.username,
            karma: document.karma,
            posts: document
                .posts
                .into_iter()
                .map(|post| PostId(post.to_uuid_1()))
                .collect(),
            created_at: document.created_at.to_chrono(),
        }
    }
}
