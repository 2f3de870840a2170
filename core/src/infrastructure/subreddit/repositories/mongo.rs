use bson::{Uuid as BsonUuid, doc};
use mongodb::{Collection, Database};

use crate::{
    domain::{
        common::CoreError,
        post::entities::PostId,
        subreddit::{
            entities::{Subreddit, SubredditId},
            ports::SubredditRepository,
        },
    },
    infrastructure::subreddit::repositories::entities::SubredditDocument,
};

#[derive(Clone)]
pub struct MongoSubredditRepository {
    collection: Collection<SubredditDocument>,
}

impl MongoSubredditRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<SubredditDocument>("subreddits"),
        }
    }
}

impl SubredditRepository for MongoSubredditRepository {
    async fn find_by_id(&self, id: &SubredditId) -> Result<Option<Subreddit>, CoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": BsonUuid::from_uuid_1(id.0) })
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(document.map(Subreddit::from))
    }

    async fn attach_post(&self, id: &SubredditId, post_id: &PostId) -> Result<(), CoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": BsonUuid::from_uuid_1(id.0) },
                doc! { "$push": { "posts": BsonUuid::from_uuid_1(post_id.0) } },
            )
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.matched_count == 0 {
            return Err(CoreError::SubredditNotFound { id: *id });
        }

        Ok(())
    }

    async fn detach_post(&self, id: &SubredditId, post_id: &PostId) -> Result<(), CoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": BsonUuid::from_uuid_1(id.0) },
                doc! { "$pull": { "posts": BsonUuid::from_uuid_1(post_id.0) } },
            )
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.matched_count == 0 {
            return Err(CoreError::SubredditNotFound { id: *id });
        }

        Ok(())
    }
}
