pub mod local_user;
pub mod password;
pub mod remote_identity;
pub mod user_id;
pub mod username;
