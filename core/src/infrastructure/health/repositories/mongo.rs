use bson::doc;
use mongodb::Database;

use crate::domain::{common::CoreError, health::port::HealthRepository};

#[derive(Clone)]
pub struct MongoHealthRepository {
    db: Database,
}

impl MongoHealthRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

impl HealthRepository for MongoHealthRepository {
    async fn ping(&self) -> Result<(), CoreError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?;

        Ok(())
    }
}
