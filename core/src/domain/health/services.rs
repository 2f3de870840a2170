use crate::domain::{
    common::{CoreError, services::Service},
    health::port::{HealthRepository, HealthService},
    media::port::MediaStore,
    post::ports::PostRepository,
    subreddit::ports::SubredditRepository,
    user::ports::UserRepository,
};

impl<P, S, U, M, H> HealthService for Service<P, S, U, M, H>
where
    P: PostRepository,
    S: SubredditRepository,
    U: UserRepository,
    M: MediaStore,
    H: HealthRepository,
{
    async fn check_health(&self) -> Result<(), CoreError> {
        self.health_repository
            .ping()
            .await
            .map_err(|_| CoreError::Unhealthy)
    }
}
