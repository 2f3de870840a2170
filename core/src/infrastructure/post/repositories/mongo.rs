use bson::{Bson, Uuid as BsonUuid, doc};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
};
use uuid::Uuid;

use crate::{
    domain::{
        common::{CoreError, GetPaginated, TotalPaginatedElements},
        post::{
            entities::{InsertPostInput, Post, PostId, PostUpdate},
            ports::PostRepository,
        },
    },
    infrastructure::post::repositories::entities::PostDocument,
};

#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<PostDocument>("posts"),
        }
    }

    fn pagination_options(pagination: &GetPaginated) -> FindOptions {
        let normalized = pagination.normalized();

        FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(pagination.offset())
            .limit(normalized.limit as i64)
            .build()
    }
}

impl PostRepository for MongoPostRepository {
    async fn insert(&self, input: InsertPostInput) -> Result<Post, CoreError> {
        let post_type = input.submission.post_type();
        let (text, link, image) = input.submission.into_fields();

        let post = Post {
            id: PostId::from(Uuid::new_v4()),
            title: input.title,
            post_type,
            text_submission: text,
            link_submission: link,
            image_submission: image,
            author_id: input.author_id,
            subreddit_id: input.subreddit_id,
            points: 0,
            voters: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.collection
            .insert_one(PostDocument::from(post.clone()))
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        tracing::info!(
            post_id = %post.id,
            subreddit_id = %post.subreddit_id,
            "Post created"
        );

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, CoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": BsonUuid::from_uuid_1(id.0) })
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(document.map(Post::from))
    }

    async fn list(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Post>, TotalPaginatedElements), CoreError> {
        let options = Self::pagination_options(pagination);
        let filter = doc! {};

        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        let mut cursor = self
            .collection
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        let mut posts = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?
        {
            posts.push(Post::from(document));
        }

        Ok((posts, total))
    }

    async fn update(&self, update: PostUpdate) -> Result<Post, CoreError> {
        let mut set = doc! {
            "updated_at": bson::DateTime::now()
        };

        if let Some(ref title) = update.title {
            set.insert("title", title);
        }

        if let Some(submission) = update.submission {
            let post_type = submission.post_type();
            let (text, link, image) = submission.into_fields();

            // All three content fields are written so exactly one stays
            // populated when the post type changes
            set.insert("post_type", post_type.to_string());
            set.insert("text_submission", Bson::from(text));
            set.insert("link_submission", Bson::from(link));
            set.insert("image_submission", Bson::from(image));
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": BsonUuid::from_uuid_1(update.id.0) },
                doc! { "$set": set },
            )
            .with_options(options)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        match updated {
            Some(document) => {
                tracing::info!(post_id = %update.id, "Post updated");
                Ok(Post::from(document))
            }
            None => Err(CoreError::PostNotFound { id: update.id }),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), CoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": BsonUuid::from_uuid_1(id.0) })
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.deleted_count == 0 {
            return Err(CoreError::PostNotFound { id: *id });
        }

        tracing::info!(post_id = %id, "Post deleted");

        Ok(())
    }
}
