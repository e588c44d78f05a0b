use crowd_auth_core::{IdentityError, IdentityProvider, Password, RemoteIdentity, Username};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::{ConfigError, CrowdConfig, CrowdSettings};

/// Identity provider backed by the Crowd REST authentication endpoint.
///
/// The application authenticates itself with HTTP Basic credentials; the end
/// user's password travels in the JSON body.
pub struct CrowdClient {
    http_client: Client,
    config: Result<CrowdConfig, ConfigError>,
}

impl CrowdClient {
    /// Settings are validated once here. An incomplete configuration does not
    /// fail construction: every login attempt is then refused without any
    /// request being sent.
    pub fn new(settings: &CrowdSettings, http_client: Client) -> Self {
        Self {
            http_client,
            config: settings.validate(),
        }
    }

    pub fn from_config(config: CrowdConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config: Ok(config),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for CrowdClient {
    #[tracing::instrument(name = "Authenticating against Crowd", skip_all)]
    async fn authenticate(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<RemoteIdentity, IdentityError> {
        let config = match &self.config {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}", e);
                return Err(IdentityError::Misconfigured(e.to_string()));
            }
        };

        let request_body = AuthenticationRequest {
            value: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(config.url.clone())
            .basic_auth(&config.app_name, Some(config.app_password.expose_secret()))
            .query(&[(USERNAME_PARAM, username.as_str())])
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .timeout(config.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_failure)?;

        if status == StatusCode::OK {
            return match serde_json::from_slice::<RemoteIdentity>(&body) {
                Ok(identity) => {
                    tracing::info!("username <{}> authenticated via Crowd", username);
                    Ok(identity)
                }
                Err(e) => {
                    let reason = parse_failure(&e);
                    tracing::info!("Crowd authentication for <{}> failed: {}", username, reason);
                    Err(IdentityError::MalformedResponse(reason))
                }
            };
        }

        let reason = match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(ErrorResponse {
                message: Value::String(message),
            }) => message,
            Ok(error) => error.message.to_string(),
            Err(e) => parse_failure(&e),
        };
        tracing::info!("Crowd authentication for <{}> failed: {}", username, reason);
        Err(IdentityError::Rejected(reason))
    }
}

fn transport_failure(e: reqwest::Error) -> IdentityError {
    tracing::error!(severity = "critical", "Error connecting to Crowd: {}", e);
    IdentityError::Transport(e.to_string())
}

fn parse_failure(e: &serde_json::Error) -> String {
    format!("Error parsing server response: {e}")
}

const USERNAME_PARAM: &str = "username";
const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(serde::Serialize, Debug)]
struct AuthenticationRequest<'a> {
    value: &'a str,
}

#[derive(serde::Deserialize, Debug)]
struct ErrorResponse {
    message: Value,
}
