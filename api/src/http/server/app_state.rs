use posts_core::{PostsService, application::PostsRepositories};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PostsService,
}

impl AppState {
    /// Create a new AppState with the given service
    pub fn new(service: PostsService) -> Self {
        Self { service }
    }
}

impl From<PostsRepositories> for AppState {
    fn from(repositories: PostsRepositories) -> Self {
        AppState {
            service: repositories.into(),
        }
    }
}
