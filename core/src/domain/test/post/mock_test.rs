use chrono::Utc;
use uuid::Uuid;

use crate::{
    Service,
    domain::{
        common::GetPaginated,
        health::port::MockHealthRepository,
        media::port::MockMediaStore,
        post::{
            entities::{AuthorId, CreatePostInput, PostId, PostType, UpdatePostInput},
            ports::{MockPostRepository, PostRepository, PostService},
        },
        subreddit::{
            entities::{Subreddit, SubredditId},
            ports::{MockSubredditRepository, SubredditRepository},
        },
        user::{
            entities::{User, UserId},
            ports::{MockUserRepository, UserRepository},
        },
    },
};

fn subreddit(id: SubredditId) -> Subreddit {
    Subreddit {
        id,
        name: "rust".to_string(),
        description: Some("a community".to_string()),
        posts: Vec::new(),
        created_at: Utc::now(),
    }
}

fn user(id: UserId) -> User {
    User {
        id,
        username: "alice".to_string(),
        karma: 0,
        posts: Vec::new(),
        created_at: Utc::now(),
    }
}

fn text_input(author_id: AuthorId, subreddit_id: SubredditId) -> CreatePostInput {
    CreatePostInput {
        title: "First post".to_string(),
        author_id,
        subreddit_id,
        post_type: "Text".to_string(),
        text_submission: Some("hello world".to_string()),
        link_submission: None,
        image_submission: None,
    }
}

// == Create Post Tests ==

#[tokio::test]
async fn test_create_post_success() -> Result<(), Box<dyn std::error::Error>> {
    let post_mock_repo = MockPostRepository::new();
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        post_mock_repo,
        subreddit_mock_repo.clone(),
        user_mock_repo.clone(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let post = service
        .create_post(text_input(AuthorId(author.0), subreddit_id))
        .await
        .expect("create_post returned an error");

    assert_eq!(post.title, "First post", "Expected correct title");
    assert_eq!(post.post_type, PostType::Text, "Expected a text post");
    assert_eq!(
        post.text_submission.as_deref(),
        Some("hello world"),
        "Expected the text submission to be stored"
    );
    assert!(post.link_submission.is_none(), "Link field must stay empty");
    assert!(post.image_submission.is_none(), "Image field must stay empty");
    assert_eq!(post.points, 0, "New posts start with no points");
    assert!(post.comments.is_empty(), "New posts start with no comments");

    // The post id must be attached to both referenced documents
    let stored_subreddit = subreddit_mock_repo
        .find_by_id(&subreddit_id)
        .await?
        .expect("subreddit should exist");
    assert_eq!(
        stored_subreddit.posts,
        vec![post.id],
        "Expected the post attached to the subreddit"
    );

    let stored_user = user_mock_repo
        .find_by_id(&author)
        .await?
        .expect("user should exist");
    assert_eq!(
        stored_user.posts,
        vec![post.id],
        "Expected the post attached to the author"
    );
    assert_eq!(stored_user.karma, 1, "Expected karma awarded on creation");

    Ok(())
}

#[tokio::test]
async fn test_create_post_fail_empty_title() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let mut input = text_input(
        AuthorId(Uuid::new_v4()),
        SubredditId::from(Uuid::new_v4()),
    );
    input.title = "   ".to_string();

    let error = service
        .create_post(input)
        .await
        .expect_err("create_post should have returned an error");

    assert_eq!(
        error.to_string(),
        "Post title cannot be empty",
        "Expected the empty-title error"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_post_fail_unknown_post_type() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let mut input = text_input(
        AuthorId(Uuid::new_v4()),
        SubredditId::from(Uuid::new_v4()),
    );
    input.post_type = "Video".to_string();

    let error = service
        .create_post(input)
        .await
        .expect_err("create_post should have returned an error");

    assert_eq!(
        error.to_string(),
        "Invalid post type: Video",
        "Expected the invalid-type error"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_post_fail_blank_submission() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let input = CreatePostInput {
        title: "A link".to_string(),
        author_id: AuthorId(Uuid::new_v4()),
        subreddit_id: SubredditId::from(Uuid::new_v4()),
        post_type: "Link".to_string(),
        text_submission: None,
        link_submission: Some("".to_string()),
        image_submission: None,
    };

    let error = service
        .create_post(input)
        .await
        .expect_err("create_post should have returned an error");

    assert_eq!(
        error.to_string(),
        "Link submission cannot be empty",
        "Expected the empty-submission error"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_post_fail_unknown_subreddit() -> Result<(), Box<dyn std::error::Error>> {
    let user_mock_repo = MockUserRepository::new();
    let author = UserId::from(Uuid::new_v4());
    user_mock_repo.seed(user(author));

    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        user_mock_repo,
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let error = service
        .create_post(text_input(
            AuthorId(author.0),
            SubredditId::from(Uuid::new_v4()),
        ))
        .await
        .expect_err("create_post should have returned an error");

    assert!(
        error.to_string().contains("not found"),
        "Expected a not-found error, got: {error}"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_post_fail_unknown_author() -> Result<(), Box<dyn std::error::Error>> {
    let subreddit_mock_repo = MockSubredditRepository::new();
    let subreddit_id = SubredditId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));

    let service = Service::new(
        MockPostRepository::new(),
        subreddit_mock_repo,
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let error = service
        .create_post(text_input(AuthorId(Uuid::new_v4()), subreddit_id))
        .await
        .expect_err("create_post should have returned an error");

    assert!(
        error.to_string().contains("not found"),
        "Expected a not-found error, got: {error}"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_image_post_stores_hosted_url() -> Result<(), Box<dyn std::error::Error>> {
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();
    let media_mock_store = MockMediaStore::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        MockPostRepository::new(),
        subreddit_mock_repo,
        user_mock_repo,
        media_mock_store.clone(),
        MockHealthRepository::new(),
    );

    let input = CreatePostInput {
        title: "A picture".to_string(),
        author_id: AuthorId(author.0),
        subreddit_id,
        post_type: "Image".to_string(),
        text_submission: None,
        link_submission: None,
        image_submission: Some("data:image/png;base64,AAAA".to_string()),
    };

    let post = service
        .create_post(input)
        .await
        .expect("create_post returned an error");

    assert_eq!(post.post_type, PostType::Image);
    let stored = post
        .image_submission
        .as_deref()
        .expect("image submission should be populated");
    assert!(
        stored.starts_with("https://media.example/"),
        "Expected the hosted URL, not the raw payload: {stored}"
    );
    assert_eq!(
        media_mock_store.uploads(),
        vec!["data:image/png;base64,AAAA".to_string()],
        "Expected the raw payload handed to the media store"
    );

    Ok(())
}

#[tokio::test]
async fn test_create_image_post_upload_failure_persists_nothing()
-> Result<(), Box<dyn std::error::Error>> {
    let post_mock_repo = MockPostRepository::new();
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        post_mock_repo.clone(),
        subreddit_mock_repo.clone(),
        user_mock_repo.clone(),
        MockMediaStore::failing(),
        MockHealthRepository::new(),
    );

    let input = CreatePostInput {
        title: "A picture".to_string(),
        author_id: AuthorId(author.0),
        subreddit_id,
        post_type: "Image".to_string(),
        text_submission: None,
        link_submission: None,
        image_submission: Some("data:image/png;base64,AAAA".to_string()),
    };

    let error = service
        .create_post(input)
        .await
        .expect_err("create_post should have returned an error");
    assert!(
        error.to_string().starts_with("Media upload failed"),
        "Expected the upload failure, got: {error}"
    );

    // Nothing may be left behind when the upload fails
    let (posts, total) = post_mock_repo.list(&GetPaginated::default()).await?;
    assert!(posts.is_empty(), "No post may be persisted");
    assert_eq!(total, 0);

    let stored_subreddit = subreddit_mock_repo
        .find_by_id(&subreddit_id)
        .await?
        .expect("subreddit should exist");
    assert!(stored_subreddit.posts.is_empty(), "No reference attached");

    let stored_user = user_mock_repo
        .find_by_id(&author)
        .await?
        .expect("user should exist");
    assert!(stored_user.posts.is_empty(), "No reference attached");
    assert_eq!(stored_user.karma, 0, "No karma awarded");

    Ok(())
}

// == List / Read Tests ==

#[tokio::test]
async fn test_list_posts_newest_first_paginated() -> Result<(), Box<dyn std::error::Error>> {
    let post_mock_repo = MockPostRepository::new();
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        post_mock_repo,
        subreddit_mock_repo,
        user_mock_repo,
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    for n in 0..5 {
        let mut input = text_input(AuthorId(author.0), subreddit_id);
        input.title = format!("post {n}");
        service.create_post(input).await?;
        // distinct creation instants so the sort order is deterministic
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let (page, total) = service
        .list_posts(&GetPaginated { page: 1, limit: 3 })
        .await?;
    assert_eq!(total, 5, "Expected the full collection count");
    assert_eq!(page.len(), 3, "Expected one full page");
    assert_eq!(page[0].title, "post 4", "Expected newest first");
    assert_eq!(page[2].title, "post 2");

    let (rest, total) = service
        .list_posts(&GetPaginated { page: 2, limit: 3 })
        .await?;
    assert_eq!(total, 5);
    assert_eq!(rest.len(), 2, "Expected the short final page");
    assert_eq!(rest[0].title, "post 1");

    let (past_end, _) = service
        .list_posts(&GetPaginated { page: 4, limit: 3 })
        .await?;
    assert!(past_end.is_empty(), "A page past the end is empty");

    Ok(())
}

#[tokio::test]
async fn test_get_post_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let missing = PostId::from(Uuid::new_v4());
    let error = service
        .get_post(&missing)
        .await
        .expect_err("get_post should have returned an error");
    assert!(error.to_string().contains("not found"));

    let error = service
        .get_post_comments(&missing)
        .await
        .expect_err("get_post_comments should have returned an error");
    assert!(error.to_string().contains("not found"));

    Ok(())
}

#[tokio::test]
async fn test_get_post_comments_empty_for_new_post() -> Result<(), Box<dyn std::error::Error>> {
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        MockPostRepository::new(),
        subreddit_mock_repo,
        user_mock_repo,
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let post = service
        .create_post(text_input(AuthorId(author.0), subreddit_id))
        .await?;

    let comments = service.get_post_comments(&post.id).await?;
    assert!(comments.is_empty(), "A fresh post has no comments");

    Ok(())
}

// == Update Post Tests ==

#[tokio::test]
async fn test_update_post_title_keeps_submission() -> Result<(), Box<dyn std::error::Error>> {
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        MockPostRepository::new(),
        subreddit_mock_repo,
        user_mock_repo,
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let post = service
        .create_post(text_input(AuthorId(author.0), subreddit_id))
        .await?;

    let updated = service
        .update_post(UpdatePostInput {
            id: post.id,
            title: Some("Renamed".to_string()),
            post_type: None,
            text_submission: None,
            link_submission: None,
            image_submission: None,
        })
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(
        updated.text_submission.as_deref(),
        Some("hello world"),
        "An untouched submission must survive a title change"
    );
    assert!(updated.updated_at.is_some(), "Expected an update timestamp");

    Ok(())
}

#[tokio::test]
async fn test_update_post_change_type_revalidates() -> Result<(), Box<dyn std::error::Error>> {
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        MockPostRepository::new(),
        subreddit_mock_repo,
        user_mock_repo,
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let post = service
        .create_post(text_input(AuthorId(author.0), subreddit_id))
        .await?;

    let updated = service
        .update_post(UpdatePostInput {
            id: post.id,
            title: None,
            post_type: Some("Link".to_string()),
            text_submission: None,
            link_submission: Some("https://example.com".to_string()),
            image_submission: None,
        })
        .await?;

    assert_eq!(updated.post_type, PostType::Link);
    assert_eq!(
        updated.link_submission.as_deref(),
        Some("https://example.com")
    );
    assert!(
        updated.text_submission.is_none(),
        "The old submission must be cleared when the type changes"
    );

    // A new payload without a declared type is checked against the stored type
    let error = service
        .update_post(UpdatePostInput {
            id: post.id,
            title: None,
            post_type: None,
            text_submission: Some("back to text".to_string()),
            link_submission: None,
            image_submission: None,
        })
        .await
        .expect_err("update_post should have returned an error");
    assert_eq!(error.to_string(), "Link submission cannot be empty");

    // Unknown declared types are rejected on update too
    let error = service
        .update_post(UpdatePostInput {
            id: post.id,
            title: None,
            post_type: Some("Video".to_string()),
            text_submission: None,
            link_submission: Some("https://example.com".to_string()),
            image_submission: None,
        })
        .await
        .expect_err("update_post should have returned an error");
    assert_eq!(error.to_string(), "Invalid post type: Video");

    Ok(())
}

#[tokio::test]
async fn test_update_post_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let error = service
        .update_post(UpdatePostInput {
            id: PostId::from(Uuid::new_v4()),
            title: Some("Renamed".to_string()),
            post_type: None,
            text_submission: None,
            link_submission: None,
            image_submission: None,
        })
        .await
        .expect_err("update_post should have returned an error");

    assert!(error.to_string().contains("not found"));

    Ok(())
}

// == Delete Post Tests ==

#[tokio::test]
async fn test_delete_post_detaches_references() -> Result<(), Box<dyn std::error::Error>> {
    let post_mock_repo = MockPostRepository::new();
    let subreddit_mock_repo = MockSubredditRepository::new();
    let user_mock_repo = MockUserRepository::new();

    let subreddit_id = SubredditId::from(Uuid::new_v4());
    let author = UserId::from(Uuid::new_v4());
    subreddit_mock_repo.seed(subreddit(subreddit_id));
    user_mock_repo.seed(user(author));

    let service = Service::new(
        post_mock_repo.clone(),
        subreddit_mock_repo.clone(),
        user_mock_repo.clone(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let post = service
        .create_post(text_input(AuthorId(author.0), subreddit_id))
        .await?;

    service.delete_post(&post.id).await?;

    let found = post_mock_repo.find_by_id(&post.id).await?;
    assert!(found.is_none(), "The post document must be gone");

    let stored_subreddit = subreddit_mock_repo
        .find_by_id(&subreddit_id)
        .await?
        .expect("subreddit should exist");
    assert!(
        stored_subreddit.posts.is_empty(),
        "The subreddit reference must be detached"
    );

    let stored_user = user_mock_repo
        .find_by_id(&author)
        .await?
        .expect("user should exist");
    assert!(
        stored_user.posts.is_empty(),
        "The author reference must be detached"
    );
    assert_eq!(stored_user.karma, 1, "Karma is kept on deletion");

    Ok(())
}

#[tokio::test]
async fn test_delete_post_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(
        MockPostRepository::new(),
        MockSubredditRepository::new(),
        MockUserRepository::new(),
        MockMediaStore::new(),
        MockHealthRepository::new(),
    );

    let error = service
        .delete_post(&PostId::from(Uuid::new_v4()))
        .await
        .expect_err("delete_post should have returned an error");

    assert!(error.to_string().contains("not found"));

    Ok(())
}
