pub mod api;
pub mod auth;
pub mod config;
pub mod metadata;
pub mod upload;

pub use api::{AccessToken, ApiClient, ApiError};
pub use config::{AuthConfig, Cli, UploadConfig};
pub use metadata::{VideoHandle, VideoMetadataRequest};
pub use upload::{run, MediaFile, UploadError, UploadOutcome, VideoService};
