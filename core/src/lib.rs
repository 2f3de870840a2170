pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{PostsRepositories, PostsService, create_repositories};
pub use domain::common::services::Service;
pub use infrastructure::health::repositories::mongo::MongoHealthRepository;
pub use infrastructure::media::repositories::entities::MediaStoreConfig;
pub use infrastructure::post::repositories::mongo::MongoPostRepository;
