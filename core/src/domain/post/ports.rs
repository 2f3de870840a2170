use std::sync::{Arc, Mutex};

use crate::domain::{
    common::{CoreError, GetPaginated, TotalPaginatedElements},
    post::entities::{Comment, CreatePostInput, InsertPostInput, Post, PostId, PostUpdate, UpdatePostInput},
};

pub trait PostRepository: Send + Sync {
    fn insert(&self, input: InsertPostInput) -> impl Future<Output = Result<Post, CoreError>> + Send;
    fn find_by_id(
        &self,
        id: &PostId,
    ) -> impl Future<Output = Result<Option<Post>, CoreError>> + Send;
    /// Newest first.
    fn list(
        &self,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<(Vec<Post>, TotalPaginatedElements), CoreError>> + Send;
    fn update(&self, update: PostUpdate) -> impl Future<Output = Result<Post, CoreError>> + Send;
    fn delete(&self, id: &PostId) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Business logic operations on posts.
///
/// This trait is the port through which the HTTP layer drives the post
/// domain. Implementations validate client input, coordinate media uploads
/// and keep the subreddit and author documents consistent with the posts
/// collection. All implementations must be `Send + Sync` so the service can
/// be shared across request handlers.
pub trait PostService: Send + Sync {
    /// Creates a new post.
    ///
    /// The input is validated before anything is persisted: the title must
    /// not be blank, the declared post type must be one of the known kinds
    /// and the submission field matching that type must be present and
    /// non-blank. For image posts, the payload is uploaded to the media host
    /// first and the stored submission becomes the hosted URL. After the
    /// post document is inserted, its id is attached to the subreddit and to
    /// the author, and the author's karma is incremented.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw creation input as received from the client, plus the
    ///   authenticated author id
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(Post)` - The newly created post
    /// - `Err(CoreError::InvalidTitle)` - The title is empty or whitespace
    /// - `Err(CoreError::InvalidPostType)` - The declared type is unknown
    /// - `Err(CoreError::EmptySubmission)` - The matching submission field is missing or blank
    /// - `Err(CoreError::SubredditNotFound)` / `Err(CoreError::UserNotFound)` - Referenced documents do not exist
    /// - `Err(CoreError::MediaUploadFailed)` - The media host rejected the image
    fn create_post(
        &self,
        input: CreatePostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Retrieves a post by its unique identifier.
    ///
    /// # Arguments
    ///
    /// * `post_id` - The id of the post to fetch
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(Post)` - The post was found
    /// - `Err(CoreError::PostNotFound)` - No post exists with the given id
    fn get_post(&self, post_id: &PostId) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Lists posts, newest first, with pagination.
    ///
    /// # Arguments
    ///
    /// * `pagination` - Pagination parameters (page and limit)
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok((Vec<Post>, TotalPaginatedElements))` - One page of posts and the total count
    /// - `Err(CoreError)` - If the repository operation fails
    fn list_posts(
        &self,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<(Vec<Post>, TotalPaginatedElements), CoreError>> + Send;

    /// Retrieves the comments attached to a post.
    ///
    /// # Arguments
    ///
    /// * `post_id` - The id of the post whose comments to fetch
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(Vec<Comment>)` - The post's comments, possibly empty
    /// - `Err(CoreError::PostNotFound)` - No post exists with the given id
    fn get_post_comments(
        &self,
        post_id: &PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    /// Updates an existing post.
    ///
    /// The post must exist. A new title, when present, must not be blank.
    /// When any content field is present the submission is re-validated as a
    /// whole against the declared type (or the stored type when the client
    /// did not send one), and image payloads go through the media host
    /// exactly as on creation. Fields left as `None` keep their stored
    /// values.
    ///
    /// # Arguments
    ///
    /// * `input` - The post id and the raw fields to change
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(Post)` - The updated post
    /// - `Err(CoreError::PostNotFound)` - No post exists with the given id
    /// - `Err(CoreError)` - If validation or the repository operation fails
    fn update_post(
        &self,
        input: UpdatePostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Deletes a post and detaches it from its subreddit and author.
    ///
    /// # Arguments
    ///
    /// * `post_id` - The id of the post to delete
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(())` - The post was deleted and both references removed
    /// - `Err(CoreError::PostNotFound)` - No post exists with the given id
    fn delete_post(&self, post_id: &PostId) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockPostRepository {
    posts: Arc<Mutex<Vec<Post>>>,
}

impl MockPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Place a prebuilt post into the store, bypassing validation.
    pub fn seed(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }
}

impl PostRepository for MockPostRepository {
    async fn insert(&self, input: InsertPostInput) -> Result<Post, CoreError> {
        let mut posts = self.posts.lock().unwrap();

        let post_type = input.submission.post_type();
        let (text, link, image) = input.submission.into_fields();

        let new_post = Post {
            id: PostId::from(uuid::Uuid::new_v4()),
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
            created_at: chrono::Utc::now(),
            updated_at: None,
        };

        posts.push(new_post.clone());

        Ok(new_post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, CoreError> {
        let posts = self.posts.lock().unwrap();

        let post = posts.iter().find(|p| &p.id == id).cloned();

        Ok(post)
    }

    async fn list(
        &self,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Post>, TotalPaginatedElements), CoreError> {
        let posts = self.posts.lock().unwrap();
        let total = posts.len() as u64;

        let mut sorted: Vec<Post> = posts.iter().cloned().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = pagination.offset() as usize;
        let limit = pagination.normalized().limit as usize;

        let page: Vec<Post> = sorted.into_iter().skip(offset).take(limit).collect();

        Ok((page, total))
    }

    async fn update(&self, update: PostUpdate) -> Result<Post, CoreError> {
        let mut posts = self.posts.lock().unwrap();

        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or(CoreError::PostNotFound { id: update.id })?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(submission) = update.submission {
            post.apply_submission(submission);
        }
        post.updated_at = Some(chrono::Utc::now());

        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<(), CoreError> {
        let mut posts = self.posts.lock().unwrap();

        let index = posts
            .iter()
            .position(|p| &p.id == id)
            .ok_or(CoreError::PostNotFound { id: *id })?;

        posts.remove(index);

        Ok(())
    }
}
