pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    local_user::{LocalUser, NewLocalUser},
    password::Password,
    remote_identity::RemoteIdentity,
    user_id::UserId,
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{IdentityError, IdentityProvider},
};
