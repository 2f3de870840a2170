use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use posts_core::domain::{
    common::GetPaginated,
    post::{
        entities::{AuthorId, Comment, CreatePostRequest, Post, PostId, UpdatePostRequest},
        ports::PostService,
    },
};
use uuid::Uuid;

use crate::http::server::{
    ApiError, AppState, Response, middleware::auth::entities::UserIdentity,
    response::PaginatedResponse,
};

#[utoipa::path(
    get,
    path = "/posts/new",
    tag = "posts",
    params(
        GetPaginated
    ),
    responses(
        (status = 200, description = "One page of posts, newest first", body = PaginatedResponse<Post>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(pagination): Query<GetPaginated>,
) -> Result<Response<PaginatedResponse<Post>>, ApiError> {
    let (posts, total) = state.service.list_posts(&pagination).await?;

    let normalized = pagination.normalized();
    let window = pagination.window(total);
    let response =
        PaginatedResponse::new(posts, total, normalized.page, normalized.limit, window);

    Ok(Response::ok(response))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post retrieved successfully", body = Post),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_post(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Post>, ApiError> {
    let post_id = PostId::from(id);
    let post = state.service.get_post(&post_id).await?;

    Ok(Response::ok(post))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments retrieved successfully", body = Vec<Comment>),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_post_comments(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Comment>>, ApiError> {
    let post_id = PostId::from(id);
    let comments = state.service.get_post_comments(&post_id).await?;

    Ok(Response::ok(comments))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created successfully", body = Post),
        (status = 400, description = "Bad request - Invalid title, post type or submission"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subreddit or author not found"),
        (status = 502, description = "Media host rejected the upload"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Response<Post>, ApiError> {
    let author_id = AuthorId::from(user_identity.user_id);
    let input = request.into_input(author_id);
    let post = state.service.create_post(input).await?;
    Ok(Response::created(post))
}

#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 202, description = "Post updated successfully", body = Post),
        (status = 400, description = "Bad request - Invalid title, post type or submission"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the post author"),
        (status = 404, description = "Post not found"),
        (status = 502, description = "Media host rejected the upload"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_post(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Response<Post>, ApiError> {
    let post_id = PostId::from(id);

    // Check if the post exists and the caller wrote it
    let existing_post = state.service.get_post(&post_id).await?;
    if existing_post.author_id.0 != user_identity.user_id {
        return Err(ApiError::Forbidden);
    }

    let input = request.into_input(post_id);
    let post = state.service.update_post(input).await?;
    Ok(Response::accepted(post))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Not the post author"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_post(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
) -> Result<Response<()>, ApiError> {
    let post_id = PostId::from(id);

    // Check if the post exists and the caller wrote it
    let existing_post = state.service.get_post(&post_id).await?;
    if existing_post.author_id.0 != user_identity.user_id {
        return Err(ApiError::Forbidden);
    }

    state.service.delete_post(&post_id).await?;
    Ok(Response::deleted(()))
}
