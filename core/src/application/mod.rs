use mongodb::{Client, Database, options::ClientOptions};

use crate::{
    domain::common::{CoreError, services::Service},
    infrastructure::{
        health::repositories::mongo::MongoHealthRepository,
        media::repositories::{entities::MediaStoreConfig, reqwest::ReqwestMediaStore},
        post::repositories::mongo::MongoPostRepository,
        subreddit::repositories::mongo::MongoSubredditRepository,
        user::repositories::mongo::MongoUserRepository,
    },
};

/// Concrete service type with MongoDB repositories and the HTTP media store
pub type PostsService = Service<
    MongoPostRepository,
    MongoSubredditRepository,
    MongoUserRepository,
    ReqwestMediaStore,
    MongoHealthRepository,
>;

#[derive(Clone)]
pub struct PostsRepositories {
    pub post_repository: MongoPostRepository,
    pub subreddit_repository: MongoSubredditRepository,
    pub user_repository: MongoUserRepository,
    pub media_store: ReqwestMediaStore,
    pub health_repository: MongoHealthRepository,
}

pub async fn create_repositories(
    mongo_uri: &str,
    db_name: &str,
    media_config: MediaStoreConfig,
) -> Result<PostsRepositories, CoreError> {
    let options = ClientOptions::parse(mongo_uri)
        .await
        .map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?;
    let client =
        Client::with_options(options).map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?;
    let db: Database = client.database(db_name);

    let post_repository = MongoPostRepository::new(&db);
    let subreddit_repository = MongoSubredditRepository::new(&db);
    let user_repository = MongoUserRepository::new(&db);
    let media_store = ReqwestMediaStore::new(media_config, reqwest::Client::new());
    let health_repository = MongoHealthRepository::new(&db);

    Ok(PostsRepositories {
        post_repository,
        subreddit_repository,
        user_repository,
        media_store,
        health_repository,
    })
}

impl From<PostsRepositories> for PostsService {
    fn from(repositories: PostsRepositories) -> Self {
        Service::new(
            repositories.post_repository,
            repositories.subreddit_repository,
            repositories.user_repository,
            repositories.media_store,
            repositories.health_repository,
        )
    }
}
