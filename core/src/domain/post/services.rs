use crate::domain::{
    common::{CoreError, GetPaginated, TotalPaginatedElements, services::Service},
    health::port::HealthRepository,
    media::port::MediaStore,
    post::{
        entities::{
            Comment, CreatePostInput, InsertPostInput, Post, PostId, PostUpdate, Submission,
            UpdatePostInput,
        },
        ports::{PostRepository, PostService},
    },
    subreddit::ports::SubredditRepository,
    user::{entities::UserId, ports::UserRepository},
};

impl<P, S, U, M, H> PostService for Service<P, S, U, M, H>
where
    P: PostRepository,
    S: SubredditRepository,
    U: UserRepository,
    M: MediaStore,
    H: HealthRepository,
{
    async fn create_post(&self, input: CreatePostInput) -> Result<Post, CoreError> {
        // Validate title is not empty
        if input.title.trim().is_empty() {
            return Err(CoreError::InvalidTitle);
        }

        // Validate the submission against the declared post type
        let mut submission = Submission::validate(
            &input.post_type,
            input.text_submission.as_deref(),
            input.link_submission.as_deref(),
            input.image_submission.as_deref(),
        )?;

        // Check the referenced documents exist
        if self
            .subreddit_repository
            .find_by_id(&input.subreddit_id)
            .await?
            .is_none()
        {
            return Err(CoreError::SubredditNotFound {
                id: input.subreddit_id,
            });
        }

        let author = UserId::from(input.author_id);
        if self.user_repository.find_by_id(&author).await?.is_none() {
            return Err(CoreError::UserNotFound { id: author });
        }

        // Image payloads go to the media host before anything is persisted,
        // so an upload failure leaves no post behind
        if let Submission::Image(payload) = &submission {
            let media = self.media_store.upload(payload).await?;
            submission = Submission::Image(media.url);
        }

        let post = self
            .post_repository
            .insert(InsertPostInput {
                title: input.title,
                author_id: input.author_id,
                subreddit_id: input.subreddit_id,
                submission,
            })
            .await?;

        // References are attached only once the post document is durable
        self.subreddit_repository
            .attach_post(&post.subreddit_id, &post.id)
            .await?;
        self.user_repository.attach_post(&author, &post.id).await?;

        Ok(post)
    }

    async fn get_post(&self, post_id: &PostId) -> Result<Post, CoreError> {
        let post = self.post_repository.find_by_id(post_id).await?;

        match post {
            Some(post) => Ok(post),
            None => Err(CoreError::PostNotFound { id: *post_id }),
        }
    }

    async fn list_posts(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Post>, TotalPaginatedElements), CoreError> {
        let (posts, total) = self.post_repository.list(pagination).await?;

        Ok((posts, total))
    }

    async fn get_post_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, CoreError> {
        let post = self.post_repository.find_by_id(post_id).await?;

        match post {
            Some(post) => Ok(post.comments),
            None => Err(CoreError::PostNotFound { id: *post_id }),
        }
    }

    async fn update_post(&self, input: UpdatePostInput) -> Result<Post, CoreError> {
        // Check if the post exists
        let existing_post = self
            .post_repository
            .find_by_id(&input.id)
            .await?
            .ok_or(CoreError::PostNotFound { id: input.id })?;

        // Validate title if it's being updated
        if let Some(ref title) = input.title {
            if title.trim().is_empty() {
                return Err(CoreError::InvalidTitle);
            }
        }

        // Touching any content field re-validates the submission as a whole.
        // A missing post_type means the stored one still applies.
        let changes_submission = input.post_type.is_some()
            || input.text_submission.is_some()
            || input.link_submission.is_some()
            || input.image_submission.is_some();

        let submission = if changes_submission {
            let declared_type = input
                .post_type
                .unwrap_or_else(|| existing_post.post_type.to_string());

            let mut submission = Submission::validate(
                &declared_type,
                input.text_submission.as_deref(),
                input.link_submission.as_deref(),
                input.image_submission.as_deref(),
            )?;

            if let Submission::Image(payload) = &submission {
                let media = self.media_store.upload(payload).await?;
                submission = Submission::Image(media.url);
            }

            Some(submission)
        } else {
            None
        };

        let updated_post = self
            .post_repository
            .update(PostUpdate {
                id: input.id,
                title: input.title,
                submission,
            })
            .await?;

        Ok(updated_post)
    }

    async fn delete_post(&self, post_id: &PostId) -> Result<(), CoreError> {
        // The post is fetched first so its references can be detached after
        let post = self
            .post_repository
            .find_by_id(post_id)
            .await?
            .ok_or(CoreError::PostNotFound { id: *post_id })?;

        self.post_repository.delete(post_id).await?;

        // References go away only once the post document is gone
        self.subreddit_repository
            .detach_post(&post.subreddit_id, post_id)
            .await?;
        self.user_repository
            .detach_post(&UserId::from(post.author_id), post_id)
            .await?;

        Ok(())
    }
}
