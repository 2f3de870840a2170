use crate::domain::common::CoreError;

pub trait HealthRepository: Send + Sync {
    /// Round-trip to the backing store.
    fn ping(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait HealthService: Send + Sync {
    /// Whether the service can currently reach its backing store.
    fn check_health(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub struct MockHealthRepository;

impl MockHealthRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HealthRepository for MockHealthRepository {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
