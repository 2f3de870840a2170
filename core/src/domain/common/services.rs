use crate::domain::{
    health::port::HealthRepository, media::port::MediaStore, post::ports::PostRepository,
    subreddit::ports::SubredditRepository, user::ports::UserRepository,
};

#[derive(Clone)]
pub struct Service<P, S, U, M, H>
where
    P: PostRepository,
    S: SubredditRepository,
    U: UserRepository,
    M: MediaStore,
    H: HealthRepository,
{
    pub(crate) post_repository: P,
    pub(crate) subreddit_repository: S,
    pub(crate) user_repository: U,
    pub(crate) media_store: M,
    pub(crate) health_repository: H,
}

impl<P, S, U, M, H> Service<P, S, U, M, H>
where
    P: PostRepository,
    S: SubredditRepository,
    U: UserRepository,
    M: MediaStore,
    H: HealthRepository,
{
    pub fn new(
        post_repository: P,
        subreddit_repository: S,
        user_repository: U,
        media_store: M,
        health_repository: H,
    ) -> Self {
        Self {
            post_repository,
            subreddit_repository,
            user_repository,
            media_store,
            health_repository,
        }
    }
}
