use std::sync::{Arc, Mutex};

use crate::domain::common::CoreError;
use crate::domain::post::entities::PostId;

use super::entities::{User, UserId};

/// Repository trait for user persistence
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    fn find_by_id(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Record a newly created post on the author and award karma
    fn attach_post(
        &self,
        id: &UserId,
        post_id: &PostId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Remove a deleted post from the author. Karma is kept.
    fn detach_post(
        &self,
        id: &UserId,
        post_id: &PostId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().unwrap();

        let user = users.iter().find(|u| &u.id == id).cloned();

        Ok(user)
    }

    async fn attach_post(&self, id: &UserId, post_id: &PostId) -> Result<(), CoreError> {
        let mut users = self.users.lock().unwrap();

        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(CoreError::UserNotFound { id: *id })?;

        user.posts.push(*post_id);
        user.karma += 1;

        Ok(())
    }

    async fn detach_post(&self, id: &UserId, post_id: &PostId) -> Result<(), CoreError> {
        let mut users = self.users.lock().unwrap();

        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(CoreError::UserNotFound { id: *id })?;

        user.posts.retain(|p| p != post_id);

        Ok(())
    }
}
