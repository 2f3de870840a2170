use std::sync::{Arc, Mutex};

use crate::domain::common::CoreError;
use crate::domain::post::entities::PostId;

use super::entities::{Subreddit, SubredditId};

/// Repository trait for subreddit persistence
pub trait SubredditRepository: Send + Sync {
    /// Find a subreddit by ID
    fn find_by_id(
        &self,
        id: &SubredditId,
    ) -> impl Future<Output = Result<Option<Subreddit>, CoreError>> + Send;

    /// Record a newly created post on the subreddit
    fn attach_post(
        &self,
        id: &SubredditId,
        post_id: &PostId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Remove a deleted post from the subreddit
    fn detach_post(
        &self,
        id: &SubredditId,
        post_id: &PostId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockSubredditRepository {
    subreddits: Arc<Mutex<Vec<Subreddit>>>,
}

impl MockSubredditRepository {
    pub fn new() -> Self {
        Self {
            subreddits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seed(&self, subreddit: Subreddit) {
        self.subreddits.lock().unwrap().push(subreddit);
    }
}

impl SubredditRepository for MockSubredditRepository {
    async fn find_by_id(&self, id: &SubredditId) -> Result<Option<Subreddit>, CoreError> {
        let subreddits = self.subreddits.lock().unwrap();

        let subreddit = subreddits.iter().find(|s| &s.id == id).cloned();

        Ok(subreddit)
    }

    async fn attach_post(&self, id: &SubredditId, post_id: &PostId) -> Result<(), CoreError> {
        let mut subreddits = self.subreddits.lock().unwrap();

        let subreddit = subreddits
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(CoreError::SubredditNotFound { id: *id })?;

        subreddit.posts.push(*post_id);

        Ok(())
    }

    async fn detach_post(&self, id: &SubredditId, post_id: &PostId) -> Result<(), CoreError> {
        let mut subreddits = self.subreddits.lock().unwrap();

        let subreddit = subreddits
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(CoreError::SubredditNotFound { id: *id })?;

        subreddit.posts.retain(|p| p != post_id);

        Ok(())
    }
}
