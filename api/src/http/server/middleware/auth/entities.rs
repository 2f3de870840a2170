use uuid::Uuid;

/// The authenticated caller, inserted into request extensions once the
/// bearer token has been validated.
#[derive(Clone, Debug)]
pub struct UserIdentity {
    pub user_id: Uuid,
}
