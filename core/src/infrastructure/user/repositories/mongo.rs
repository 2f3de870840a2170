use bson::{Uuid as BsonUuid, doc};
use mongodb::{Collection, Database};

use crate::{
    domain::{
        common::CoreError,
        post::entities::PostId,
        user::{
            entities::{User, UserId},
            ports::UserRepository,
        },
    },
    infrastructure::user::repositories::entities::UserDocument,
};

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<UserDocument>("users"),
        }
    }
}

impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, CoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": BsonUuid::from_uuid_1(id.0) })
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(document.map(User::from))
    }

    async fn attach_post(&self, id: &UserId, post_id: &PostId) -> Result<(), CoreError> {
        // One atomic write covers both the post reference and the karma award
        let result = self
            .collection
            .update_one(
                doc! { "_id": BsonUuid::from_uuid_1(id.0) },
                doc! {
                    "$push": { "posts": BsonUuid::from_uuid_1(post_id.0) },
                    "$inc": { "karma": 1_i64 },
                },
            )
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.matched_count == 0 {
            return Err(CoreError::UserNotFound { id: *id });
        }

        Ok(())
    }

    async fn detach_post(&self, id: &UserId, post_id: &PostId) -> Result<(), CoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": BsonUuid::from_uuid_1(id.0) },
                doc! { "$pull": { "posts": BsonUuid::from_uuid_1(post_id.0) } },
            )
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.matched_count == 0 {
            return Err(CoreError::UserNotFound { id: *id });
        }

        Ok(())
    }
}
