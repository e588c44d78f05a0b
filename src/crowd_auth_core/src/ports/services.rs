use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, remote_identity::RemoteIdentity, username::Username};

/// Why the identity server did not vouch for a user.
///
/// Only logs get to see which variant occurred; callers of the credential
/// validator just get no user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identity provider is misconfigured: {0}")]
    Misconfigured(String),
    #[error("Error connecting to identity server: {0}")]
    Transport(String),
    #[error("Authentication rejected: {0}")]
    Rejected(String),
    #[error("Malformed identity server response: {0}")]
    MalformedResponse(String),
}

/// Port trait for the remote service owning the user credentials
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<RemoteIdentity, IdentityError>;
}
