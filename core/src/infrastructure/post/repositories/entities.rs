use bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use serde::{Deserialize, Serialize};

use crate::domain::post::entities::{AuthorId, Comment, CommentId, Post, PostId, PostType};
use crate::domain::subreddit::entities::SubredditId;
use crate::domain::user::entities::UserId;

/// BSON shape of a post in the `posts` collection. Uuids are stored as
/// native binary and timestamps as BSON datetimes so range queries and
/// sorting work server-side.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub title: String,
    pub post_type: PostType,
    pub text_submission: Option<String>,
    pub link_submission: Option<String>,
    pub image_submission: Option<String>,
    pub author_id: BsonUuid,
    pub subreddit_id: BsonUuid,
    pub points: i64,
    pub voters: Vec<BsonUuid>,
    #[serde(default)]
    pub comments: Vec<CommentDocument>,
    pub created_at: BsonDateTime,
    pub updated_at: Option<BsonDateTime>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentDocument {
    pub id: BsonUuid,
    pub author_id: BsonUuid,
    pub body: String,
    pub created_at: BsonDateTime,
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: BsonUuid::from_uuid_1(post.id.0),
            title: post.title,
            post_type: post.post_type,
            text_submission: post.text_submission,
            link_submission: post.link_submission,
            image_submission: post.image_submission,
            author_id: BsonUuid::from_uuid_1(post.author_id.0),
            subreddit_id: BsonUuid::from_uuid_1(post.subreddit_id.0),
            points: post.points,
            voters: post
                .voters
                .into_iter()
                .map(|voter| BsonUuid::from_uuid_1(voter.0))
                .collect(),
            comments: post.comments.into_iter().map(CommentDocument::from).collect(),
            created_at: BsonDateTime::from_chrono(post.created_at),
            updated_at: post.updated_at.map(BsonDateTime::from_chrono),
        }
    }
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: PostId(document.id.to_uuid_1()),
            title: document.title,
            post_type: document.post_type,
            text_submission: document.text_submission,
            link_submission: document.link_submission,
            image_submission: document.image_submission,
            author_id: AuthorId(document.author_id.to_uuid_1()),
            subreddit_id: SubredditId(document.subreddit_id.to_uuid_1()),
            points: document.points,
            voters: document
                .voters
                .into_iter()
                .map(|voter| UserId(voter.to_uuid_1()))
                .collect(),
            comments: document.comments.into_iter().map(Comment::from).collect(),
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.map(|at| at.to_chrono()),
        }
    }
}

impl From<Comment> for CommentDocument {
    fn from(comment: Comment) -> Self {
        Self {
            id: BsonUuid::from_uuid_1(comment.id.0),
            author_id: BsonUuid::from_uuid_1(comment.author_id.0),
            body: comment.body,
            created_at: BsonDateTime::from_chrono(comment.created_at),
        }
    }
}

impl From<CommentDocument> for Comment {
    fn from(document: CommentDocument) -> Self {
        Self {
            id: CommentId(document.id.to_uuid_1()),
            author_id: AuthorId(document.author_id.to_uuid_1()),
            body: document.body,
            created_at: document.created_at.to_chrono(),
        }
    }
}
