use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::CoreError;
use crate::domain::subreddit::entities::SubredditId;
use crate::domain::user::entities::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct PostId(pub Uuid);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PostId {
    fn from(uuid: Uuid) -> Self {
        PostId(uuid)
    }
}

impl From<PostId> for Uuid {
    fn from(post_id: PostId) -> Self {
        post_id.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct AuthorId(pub Uuid);

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AuthorId {
    fn from(uuid: Uuid) -> Self {
        AuthorId(uuid)
    }
}

impl From<AuthorId> for UserId {
    fn from(author_id: AuthorId) -> Self {
        UserId(author_id.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct CommentId(pub Uuid);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CommentId {
    fn from(uuid: Uuid) -> Self {
        CommentId(uuid)
    }
}

/// Kind of content a post carries. Exactly one submission field is
/// populated for a given kind.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum PostType {
    Text,
    Link,
    Image,
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostType::Text => write!(f, "Text"),
            PostType::Link => write!(f, "Link"),
            PostType::Image => write!(f, "Image"),
        }
    }
}

impl FromStr for PostType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Text" => Ok(PostType::Text),
            "Link" => Ok(PostType::Link),
            "Image" => Ok(PostType::Image),
            other => Err(CoreError::InvalidPostType {
                given: other.to_owned(),
            }),
        }
    }
}

/// A validated post payload. Construction goes through [`Submission::validate`],
/// so holding one guarantees the value matches the declared type and is
/// not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Text(String),
    Link(String),
    Image(String),
}

impl Submission {
    /// Check a raw client payload against the declared post type.
    ///
    /// Only the field matching `declared_type` is inspected; the other two
    /// are ignored. A missing or whitespace-only value is rejected.
    pub fn validate(
        declared_type: &str,
        text: Option<&str>,
        link: Option<&str>,
        image: Option<&str>,
    ) -> Result<Submission, CoreError> {
        let post_type: PostType = declared_type.parse()?;

        let value = match post_type {
            PostType::Text => text,
            PostType::Link => link,
            PostType::Image => image,
        };

        match value {
            Some(value) if !value.trim().is_empty() => Ok(match post_type {
                PostType::Text => Submission::Text(value.to_owned()),
                PostType::Link => Submission::Link(value.to_owned()),
                PostType::Image => Submission::Image(value.to_owned()),
            }),
            _ => Err(CoreError::EmptySubmission { post_type }),
        }
    }

    pub fn post_type(&self) -> PostType {
        match self {
            Submission::Text(_) => PostType::Text,
            Submission::Link(_) => PostType::Link,
            Submission::Image(_) => PostType::Image,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Submission::Text(value) | Submission::Link(value) | Submission::Image(value) => value,
        }
    }

    /// Spread the submission back over the three storage fields, populating
    /// the one matching the post type.
    pub fn into_fields(self) -> (Option<String>, Option<String>, Option<String>) {
        match self {
            Submission::Text(value) => (Some(value), None, None),
            Submission::Link(value) => (None, Some(value), None),
            Submission::Image(value) => (None, None, Some(value)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: AuthorId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub post_type: PostType,
    pub text_submission: Option<String>,
    pub link_submission: Option<String>,
    pub image_submission: Option<String>,
    pub author_id: AuthorId,
    pub subreddit_id: SubredditId,
    pub points: i64,
    pub voters: Vec<UserId>,
    #[serde(default)]
    pub comments: Vec<Comment>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// The populated submission value for this post's type.
    pub fn submission(&self) -> Option<&str> {
        match self.post_type {
            PostType::Text => self.text_submission.as_deref(),
            PostType::Link => self.link_submission.as_deref(),
            PostType::Image => self.image_submission.as_deref(),
        }
    }

    /// Replace the post content, clearing the fields of the other types.
    pub fn apply_submission(&mut self, submission: Submission) {
        self.post_type = submission.post_type();
        let (text, link, image) = submission.into_fields();
        self.text_submission = text;
        self.link_submission = link;
        self.image_submission = image;
    }
}

/// Repository-level input for a new post. The submission has already been
/// validated and, for images, uploaded.
#[derive(Debug, Clone)]
pub struct InsertPostInput {
    pub title: String,
    pub author_id: AuthorId,
    pub subreddit_id: SubredditId,
    pub submission: Submission,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreatePostInput {
    pub title: String,
    pub author_id: AuthorId,
    pub subreddit_id: SubredditId,
    pub post_type: String,
    pub text_submission: Option<String>,
    pub link_submission: Option<String>,
    pub image_submission: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub subreddit_id: SubredditId,
    pub post_type: String,
    pub text_submission: Option<String>,
    pub link_submission: Option<String>,
    pub image_submission: Option<String>,
}

impl CreatePostRequest {
    pub fn into_input(self, author_id: AuthorId) -> CreatePostInput {
        CreatePostInput {
            title: self.title,
            author_id,
            subreddit_id: self.subreddit_id,
            post_type: self.post_type,
            text_submission: self.text_submission,
            link_submission: self.link_submission,
            image_submission: self.image_submission,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdatePostInput {
    pub id: PostId,
    pub title: Option<String>,
    pub post_type: Option<String>,
    pub text_submission: Option<String>,
    pub link_submission: Option<String>,
    pub image_submission: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub post_type: Option<String>,
    pub text_submission: Option<String>,
    pub link_submission: Option<String>,
    pub image_submission: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_input(self, id: PostId) -> UpdatePostInput {
        UpdatePostInput {
            id,
            title: self.title,
            post_type: self.post_type,
            text_submission: self.text_submission,
            link_submission: self.link_submission,
            image_submission: self.image_submission,
        }
    }
}

/// Repository-level patch for an existing post. Fields left as `None`
/// keep their stored value.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<String>,
    pub submission: Option<Submission>,
}
