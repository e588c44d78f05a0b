use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    local_user::{LocalUser, NewLocalUser},
    user_id::UserId,
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence for local users. Usernames are unique: `create` must fail with
/// `UserAlreadyExists` rather than insert a second record for the same name.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<LocalUser>, UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<LocalUser>, UserStoreError>;
    async fn create(&self, user: NewLocalUser) -> Result<LocalUser, UserStoreError>;
    /// Insert or replace the record with `user.id`.
    async fn save(&self, user: LocalUser) -> Result<(), UserStoreError>;
}
