use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use crowd_auth_adapters::{
    config::{CrowdSettings, env::CROWD_AUTH_PASSWORD_ENV_VAR},
    identity::CrowdClient,
    persistence::HashMapUserStore,
};
use crowd_auth_service::CredentialValidator;
use reqwest::Client;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Authenticate one user against Crowd and print the resulting local record
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let username = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: crowd-auth <username>"))?;

    // Load configuration, failing fast on anything missing
    let config = CrowdSettings::load()?.validate()?;

    let password = std::env::var(CROWD_AUTH_PASSWORD_ENV_VAR)
        .wrap_err_with(|| format!("{CROWD_AUTH_PASSWORD_ENV_VAR} must hold the password"))?;

    let crowd_client = CrowdClient::from_config(config, Client::new());
    let validator = CredentialValidator::new(crowd_client, HashMapUserStore::new());

    match validator.validate_credentials(&username, &password).await {
        Some(user) => {
            println!("{}", serde_json::to_string_pretty(&user)?);
            Ok(())
        }
        None => bail!("authentication failed for <{username}>"),
    }
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
