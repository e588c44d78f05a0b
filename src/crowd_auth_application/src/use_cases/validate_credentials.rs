use crowd_auth_core::{
    IdentityProvider, LocalUser, NewLocalUser, Password, RemoteIdentity, UserStore,
    UserStoreError, Username,
};

/// Validate credentials use case - delegates the password check to the
/// identity server and mirrors the vouched-for user locally
pub struct ValidateCredentialsUseCase<I, U>
where
    I: IdentityProvider,
    U: UserStore,
{
    identity_provider: I,
    user_store: U,
}

impl<I, U> ValidateCredentialsUseCase<I, U>
where
    I: IdentityProvider,
    U: UserStore,
{
    pub fn new(identity_provider: I, user_store: U) -> Self {
        Self {
            identity_provider,
            user_store,
        }
    }

    /// Execute the validate credentials use case
    ///
    /// # Arguments
    /// * `username` - Login name, also the local user's unique key
    /// * `password` - Password forwarded to the identity server
    ///
    /// # Returns
    /// The local user (created on first login), or `None` whenever the
    /// identity server did not vouch for the credentials or the store failed.
    /// The reason only shows up in the logs.
    #[tracing::instrument(name = "ValidateCredentialsUseCase::execute", skip(self, password))]
    pub async fn execute(&self, username: Username, password: Password) -> Option<LocalUser> {
        // The provider logs its own failures
        let identity = self
            .identity_provider
            .authenticate(&username, &password)
            .await
            .ok()?;

        if identity.is_empty() {
            tracing::info!("Crowd returned an empty identity for <{}>", username);
            return None;
        }

        match self.find_or_create(username, &identity).await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::error!("Could not load local user: {}", e);
                None
            }
        }
    }

    async fn find_or_create(
        &self,
        username: Username,
        identity: &RemoteIdentity,
    ) -> Result<LocalUser, UserStoreError> {
        if let Some(user) = self.user_store.find_by_username(&username).await? {
            return Ok(user);
        }

        let new_user = NewLocalUser::from_remote(username.clone(), identity);
        match self.user_store.create(new_user).await {
            Ok(user) => {
                tracing::info!("local user created <{}> from Crowd user", user.username);
                Ok(user)
            }
            // Lost a race against a concurrent login for the same user
            Err(UserStoreError::UserAlreadyExists) => self
                .user_store
                .find_by_username(&username)
                .await?
                .ok_or_else(|| {
                    UserStoreError::UnexpectedError(format!(
                        "user <{username}> missing after concurrent create"
                    ))
                }),
            Err(e) => Err(e),
        }
    }
}
