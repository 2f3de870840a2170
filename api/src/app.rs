use axum::Router;
use posts_core::{MediaStoreConfig, create_repositories};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    config::Config,
    http::{
        health::routes::health_routes,
        posts::routes::post_routes,
        server::{ApiError, AppState, middleware::auth::JwtValidator},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts API",
        description = "Social link aggregator: posts, comments and pagination"
    ),
    tags(
        (name = "posts", description = "Post management endpoints")
    )
)]
struct ApiDoc;

/// The assembled HTTP application: routes, documentation and state.
pub struct App {
    router: Router,
    port: u16,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let media_config = MediaStoreConfig {
            upload_url: config.media.upload_url.clone(),
            api_key: config.media.api_key.clone(),
        };

        let repositories = create_repositories(
            &config.database.mongo_uri,
            &config.database.db_name,
            media_config,
        )
        .await
        .map_err(|e| ApiError::Startup(e.to_string()))?;

        let state = AppState::from(repositories);
        let validator = JwtValidator::new(&config.jwt.secret_key);

        let (router, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(post_routes(validator))
            .split_for_parts();

        let router = router
            .merge(health_routes())
            .merge(Scalar::with_url("/docs", api_doc))
            .layer(CorsLayer::permissive())
            .with_state(state);

        Ok(Self {
            router,
            port: config.server.api_port,
        })
    }

    pub async fn start(self) -> Result<(), ApiError> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ApiError::Startup(e.to_string()))?;

        info!("Listening on {}", addr);

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ApiError::Startup(e.to_string()))?;

        Ok(())
    }
}
