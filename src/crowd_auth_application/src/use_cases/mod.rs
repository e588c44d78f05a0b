pub mod find_user;
pub mod validate_credentials;

pub use find_user::FindUserUseCase;
pub use validate_credentials::ValidateCredentialsUseCase;
