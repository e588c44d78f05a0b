use crowd_auth_adapters::{config::CrowdSettings, identity::CrowdClient};
use crowd_auth_application::{FindUserUseCase, ValidateCredentialsUseCase};
use crowd_auth_core::{IdentityProvider, LocalUser, Password, UserId, UserStore, Username};
use reqwest::Client;
use secrecy::Secret;

/// Authenticates users against the identity server and keeps their local
/// records.
///
/// Neither operation reports why it came back empty: misconfiguration,
/// network trouble and rejected credentials all look the same to the caller
/// and are told apart in the logs only.
pub struct CredentialValidator<I, U>
where
    I: IdentityProvider,
    U: UserStore + Clone,
{
    validate_credentials: ValidateCredentialsUseCase<I, U>,
    find_user: FindUserUseCase<U>,
}

impl<I, U> CredentialValidator<I, U>
where
    I: IdentityProvider,
    U: UserStore + Clone,
{
    /// Create a new CredentialValidator
    ///
    /// # Arguments
    /// * `identity_provider` - Remote service checking the passwords
    /// * `user_store` - Store for local user records (must be Clone)
    pub fn new(identity_provider: I, user_store: U) -> Self {
        Self {
            validate_credentials: ValidateCredentialsUseCase::new(
                identity_provider,
                user_store.clone(),
            ),
            find_user: FindUserUseCase::new(user_store),
        }
    }

    /// Authenticate `username`/`password` remotely and return the matching
    /// local user, creating it on first login.
    pub async fn validate_credentials(&self, username: &str, password: &str) -> Option<LocalUser> {
        let username = match Username::parse(username) {
            Ok(username) => username,
            Err(e) => {
                tracing::info!("Authentication for <{}> refused: {}", username, e);
                return None;
            }
        };
        let password = Password::from(Secret::new(password.to_string()));

        self.validate_credentials.execute(username, password).await
    }

    pub async fn find_user_by_id(&self, id: &UserId) -> Option<LocalUser> {
        self.find_user.execute(id).await
    }
}

impl<U> CredentialValidator<CrowdClient, U>
where
    U: UserStore + Clone,
{
    /// Validator talking to Crowd with the given settings over a fresh HTTP
    /// client.
    pub fn from_settings(settings: &CrowdSettings, user_store: U) -> Self {
        Self::new(CrowdClient::new(settings, Client::new()), user_store)
    }
}
