use crowd_auth_core::{LocalUser, UserId, UserStore};

/// Find user use case - plain lookup, never contacts the identity server
pub struct FindUserUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> FindUserUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "FindUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &UserId) -> Option<LocalUser> {
        match self.user_store.find_by_id(id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Could not look up user {}: {}", id, e);
                None
            }
        }
    }
}
