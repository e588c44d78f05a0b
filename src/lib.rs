//! # Crowd Auth - Delegated Authentication Library
//!
//! This is a facade crate that re-exports all public APIs from the crowd_auth components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! crowd_auth = { path = "../crowd_auth" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `LocalUser`, `RemoteIdentity`, etc.
//! - **Port traits**: `UserStore`, `IdentityProvider`
//! - **Use cases**: `ValidateCredentialsUseCase`, `FindUserUseCase`
//! - **Adapters**: `CrowdClient`, `HashMapUserStore`, `CrowdSettings`
//! - **Service**: `CredentialValidator` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use crowd_auth_core::*;
}

// Re-export most commonly used core types at the root level
pub use crowd_auth_core::{
    LocalUser, NewLocalUser, Password, RemoteIdentity, UserId, Username, UsernameError,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use crowd_auth_core::{
        IdentityError, IdentityProvider, UserStore, UserStoreError,
    };
}

// Re-export port traits at root level
pub use ports::{IdentityError, IdentityProvider, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use crowd_auth_application::*;
}

pub use crowd_auth_application::{FindUserUseCase, ValidateCredentialsUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Identity server clients
    pub mod identity {
        pub use crowd_auth_adapters::identity::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use crowd_auth_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use crowd_auth_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use crowd_auth_adapters::{
    config::{ConfigError, CrowdConfig, CrowdSettings},
    identity::CrowdClient,
    persistence::HashMapUserStore,
};

// ============================================================================
// Credential Validator (Main Entry Point)
// ============================================================================

/// Main entry point
pub use crowd_auth_service::CredentialValidator;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
