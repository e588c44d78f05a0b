use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{remote_identity::RemoteIdentity, user_id::UserId, username::Username};

/// Local record mirroring a user the identity server has vouched for.
///
/// Passwords are never stored locally, so `has_usable_password` stays false
/// for every record this crate creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalUser {
    pub id: UserId,
    pub username: Username,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub has_usable_password: bool,
    pub date_joined: DateTime<Utc>,
}

/// A user about to be inserted; the store assigns the id and join date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocalUser {
    pub username: Username,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub has_usable_password: bool,
}

impl NewLocalUser {
    /// Unprivileged user without a local password, with whichever of email,
    /// first name and last name the identity carries.
    pub fn from_remote(username: Username, identity: &RemoteIdentity) -> Self {
        Self {
            username,
            email: identity.email().unwrap_or_default().to_owned(),
            first_name: identity.first_name().unwrap_or_default().to_owned(),
            last_name: identity.last_name().unwrap_or_default().to_owned(),
            is_staff: false,
            is_superuser: false,
            has_usable_password: false,
        }
    }

    pub fn into_local_user(self, id: UserId, date_joined: DateTime<Utc>) -> LocalUser {
        LocalUser {
            id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            has_usable_password: self.has_usable_password,
            date_joined,
        }
    }
}
