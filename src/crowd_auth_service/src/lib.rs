mod credential_validator;

pub use credential_validator::CredentialValidator;
