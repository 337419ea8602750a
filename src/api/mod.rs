mod videos;

use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("upload session response carried no Location header")]
    MissingLocation,
    #[error("upload response carried no video ID")]
    MissingVideoId,
    #[error("could not decode API response")]
    InvalidResponse(#[source] reqwest::Error),
}

/// OAuth bearer token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// An authorized handle on the YouTube Data API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: AccessToken,
}

impl ApiClient {
    /// Build a client that sends `token` as a bearer credential to `base_url`.
    ///
    /// No request timeout is set: video uploads can take arbitrarily long.
    pub fn new(base_url: impl Into<String>, token: AccessToken) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("ytupload/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    reason: Option<String>,
}

/// Pull a human-readable message out of a Google API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let reason = envelope
                .error
                .errors
                .into_iter()
                .find_map(|item| item.reason);
            match reason {
                Some(reason) => format!("{} ({reason})", envelope.error.message),
                None => envelope.error.message,
            }
        }
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Turn a non-2xx response into [`ApiError::Status`].
fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota.","errors":[{"domain":"youtube.quota","reason":"quotaExceeded"}]}}"#;
        assert_eq!(
            error_message(body),
            "The request cannot be completed because you have exceeded your quota. (quotaExceeded)"
        );
    }

    #[test]
    fn test_error_message_without_reason() {
        assert_eq!(
            error_message(r#"{"error":{"code":400,"message":"Bad Request"}}"#),
            "Bad Request"
        );
    }

    #[test]
    fn test_error_message_raw_body() {
        assert_eq!(error_message("  Service Unavailable\n"), "Service Unavailable");
        assert_eq!(error_message(""), "empty response body");
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("ya29.secret");
        assert_eq!(format!("{:?}", token), "AccessToken(<redacted>)");
        assert_eq!(token.secret(), "ya29.secret");
    }
}
