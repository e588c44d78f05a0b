use std::time::Duration;

pub mod env {
    pub const CROWD_AUTH_ENV_PREFIX: &str = "CROWD_AUTH";
    pub const CROWD_AUTH_ENV_SEPARATOR: &str = "__";
    pub const CROWD_AUTH_PASSWORD_ENV_VAR: &str = "CROWD_AUTH_PASSWORD";
}

pub mod setting_names {
    pub const APP_NAME: &str = "app_name";
    pub const APP_PASSWORD: &str = "app_password";
    pub const URL: &str = "url";
    pub const TIMEOUT_IN_MILLIS: &str = "timeout_in_millis";

    pub const REQUIRED: [&str; 3] = [APP_NAME, APP_PASSWORD, URL];
}

/// Settings file, looked up without extension (`.toml`, `.json`, `.yaml`...)
pub const CONFIG_FILE: &str = "config/crowd_auth";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
