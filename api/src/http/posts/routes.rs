use axum::middleware::from_extractor_with_state;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::posts::handlers::{
        __path_create_post, __path_delete_post, __path_get_post, __path_get_post_comments,
        __path_list_posts, __path_update_post, create_post, delete_post, get_post,
        get_post_comments, list_posts, update_post,
    },
    http::server::{AppState, middleware::auth::{AuthMiddleware, JwtValidator}},
};

/// Listing and reading are public; writes go through the bearer-token check.
pub fn post_routes(validator: JwtValidator) -> OpenApiRouter<AppState> {
    let public = OpenApiRouter::new()
        .routes(routes!(list_posts))
        .routes(routes!(get_post))
        .routes(routes!(get_post_comments));

    let protected = OpenApiRouter::new()
        .routes(routes!(create_post))
        .routes(routes!(update_post))
        .routes(routes!(delete_post))
        .layer(from_extractor_with_state::<AuthMiddleware, JwtValidator>(
            validator,
        ));

    public.merge(protected)
}
