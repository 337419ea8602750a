use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::api::{AccessToken, ApiClient, ApiError};
use crate::config::{AuthConfig, ACCESS_TOKEN_ENV};

/// Scopes that include permission to upload.
const UMBRELLA_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/youtube",
    "https://www.googleapis.com/auth/youtube.force-ssl",
];

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("no credentials: set YOUTUBE_ACCESS_TOKEN or pass --token-file")]
    NoCredentials,
    #[error("cannot read token file {}", path.display())]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("token file {} is not valid JSON", path.display())]
    InvalidTokenFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("access token is empty")]
    EmptyToken,
    #[error("token was not granted the {0} scope")]
    ScopeNotGranted(String),
    #[error("error creating YouTube client")]
    Client(#[source] ApiError),
}

/// An OAuth token as cached on disk.
#[derive(Deserialize, Debug)]
struct CachedToken {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

/// Produce a client allowed to perform `scope` operations.
///
/// Credentials are taken from the environment first, then from the configured token file.
pub fn authorized_client(scope: &str, cfg: &AuthConfig) -> Result<ApiClient, AuthError> {
    let from_env = std::env::var(ACCESS_TOKEN_ENV).ok();
    let token = resolve_token(scope, cfg.token_file.as_deref(), from_env)?;
    ApiClient::new(cfg.api_base_url.clone(), token).map_err(AuthError::Client)
}

fn resolve_token(
    scope: &str,
    token_file: Option<&Path>,
    from_env: Option<String>,
) -> Result<AccessToken, AuthError> {
    if let Some(token) = from_env.filter(|t| !t.trim().is_empty()) {
        info!("using access token from {}", ACCESS_TOKEN_ENV);
        return Ok(AccessToken::new(token.trim()));
    }

    let path = token_file.ok_or(AuthError::NoCredentials)?;
    let cached = read_token_file(path)?;
    debug!(
        "loaded {} token from {}",
        cached.token_type.as_deref().unwrap_or("bearer"),
        path.display()
    );

    if cached.access_token.trim().is_empty() {
        return Err(AuthError::EmptyToken);
    }
    if let Some(granted) = &cached.scope {
        if !grants(granted, scope) {
            return Err(AuthError::ScopeNotGranted(scope.to_string()));
        }
    }

    info!("using access token from {}", path.display());
    Ok(AccessToken::new(cached.access_token.trim()))
}

fn read_token_file(path: &Path) -> Result<CachedToken, AuthError> {
    let raw = fs::read_to_string(path).map_err(|source| AuthError::TokenFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AuthError::InvalidTokenFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether a space-separated scope list covers `wanted`.
fn grants(granted: &str, wanted: &str) -> bool {
    granted
        .split_whitespace()
        .any(|s| s == wanted || UMBRELLA_SCOPES.contains(&s))
}
