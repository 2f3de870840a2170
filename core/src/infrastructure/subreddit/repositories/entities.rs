use bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use serde::{Deserialize, Serialize};

use crate::domain::post::entities::PostId;
use crate::domain::subreddit::entities::{Subreddit, SubredditId};

/// BSON shape of a subreddit in the `subreddits` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubredditDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub posts: Vec<BsonUuid>,
    pub created_at: BsonDateTime,
}

impl From<Subreddit> for SubredditDocument {
    fn from(subreddit: Subreddit) -> Self {
        Self {
            id: BsonUuid::from_uuid_1(subreddit.id.0),
            name: subreddit.name,
            description: subreddit.description,
            posts: subreddit
                .posts
                .into_iter()
                .map(|post| BsonUuid::from_uuid_1(post.0))
                .collect(),
            created_at: BsonDateTime::from_chrono(subreddit.created_at),
        }
    }
}

impl From<SubredditDocument> for Subreddit {
    fn from(document: SubredditDocument) -> Self {
        Self {
            id: SubredditId(document.id.to_uuid_1()),
            name: document.name,
            description: document.description,
            posts: document
                .posts
                .into_iter()
                .map(|post| PostId(post.to_uuid_1()))
                .collect(),
            created_at: document.created_at.to_chrono(),
        }
    }
}
