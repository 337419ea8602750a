use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use thiserror::Error;

// Metadata defaults
pub const DEFAULT_TITLE: &str = "Test Title";
pub const DEFAULT_DESCRIPTION: &str = "Test Description";
pub const DEFAULT_CATEGORY: &str = "20"; // Gaming
pub const DEFAULT_PRIVACY: &str = "unlisted";

// Remote API
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";
pub const VIDEOS_UPLOAD_PATH: &str = "/upload/youtube/v3/videos";
pub const THUMBNAILS_SET_PATH: &str = "/upload/youtube/v3/thumbnails/set";
pub const VIDEO_PARTS: &str = "snippet,status,recordingDetails";

// Authorization
pub const UPLOAD_SCOPE: &str = "https://www.googleapis.com/auth/youtube.upload";
pub const ACCESS_TOKEN_ENV: &str = "YOUTUBE_ACCESS_TOKEN";

// Fallback MIME types when the extension is unknown
pub const FALLBACK_VIDEO_MIME: &str = "video/*";
pub const FALLBACK_IMAGE_MIME: &str = "application/octet-stream";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("you must provide a filename of a video file to upload")]
    MissingFilename,
}

/// Upload a video file to YouTube, optionally setting a custom thumbnail.
#[derive(Parser, Debug)]
#[command(name = "ytupload", version, about)]
pub struct Cli {
    /// Name of video file to upload
    #[arg(long, default_value = "")]
    pub filename: String,

    /// Video title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Video description
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Video category
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    pub category: String,

    /// Comma separated list of video keywords
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Video privacy status
    #[arg(long, default_value = DEFAULT_PRIVACY)]
    pub privacy: String,

    /// Date the video was recorded
    #[arg(long = "recorded", default_value = "")]
    pub recorded_date: String,

    /// Thumbnail to set for the video
    #[arg(long, default_value = "")]
    pub thumbnail: String,

    /// Cached OAuth token (JSON with an `access_token` field)
    #[arg(long)]
    pub token_file: Option<PathBuf>,

    #[arg(long, hide = true, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,
}

impl Cli {
    /// Parse process-style arguments, accepting both `--flag` and `-flag` long forms.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Rewrite single-dash long flags (`-filename=clip.mp4`) into the `--filename=clip.mp4`
/// form clap understands. Only names of known long flags are touched, so values such as
/// negative numbers or a lone `-` pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = Cli::command();
    let known: Vec<&str> = cmd.get_arguments().filter_map(|a| a.get_long()).collect();

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if known.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Split a comma-separated keyword list.
///
/// Blank input yields an empty list, never a list holding one empty string.
pub fn parse_keywords(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Immutable settings for a single upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub file_path: PathBuf,
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub keywords: Vec<String>,
    pub privacy_status: String,
    pub recorded_date: Option<String>,
    pub thumbnail_path: Option<PathBuf>,
}

impl UploadConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.filename.trim().is_empty() {
            return Err(ConfigError::MissingFilename);
        }

        Ok(Self {
            file_path: PathBuf::from(&cli.filename),
            title: cli.title.clone(),
            description: cli.description.clone(),
            category_id: cli.category.clone(),
            keywords: parse_keywords(&cli.keywords),
            privacy_status: cli.privacy.clone(),
            recorded_date: non_empty(&cli.recorded_date).map(str::to_string),
            thumbnail_path: non_empty(&cli.thumbnail).map(PathBuf::from),
        })
    }
}

/// Where credentials come from and which host to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub token_file: Option<PathBuf>,
    pub api_base_url: String,
}

impl AuthConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            token_file: cli.token_file.clone(),
            api_base_url: cli.api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_normalized(std::iter::once("ytupload").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_defaults() {
        let cfg = UploadConfig::from_cli(&cli(&["-filename=clip.mp4"])).unwrap();
        assert_eq!(cfg.file_path, PathBuf::from("clip.mp4"));
        assert_eq!(cfg.title, "Test Title");
        assert_eq!(cfg.description, "Test Description");
        assert_eq!(cfg.category_id, "20");
        assert_eq!(cfg.privacy_status, "unlisted");
        assert!(cfg.keywords.is_empty());
        assert_eq!(cfg.recorded_date, None);
        assert_eq!(cfg.thumbnail_path, None);
    }

    #[test]
    fn test_empty_filename_rejected() {
        assert_eq!(
            UploadConfig::from_cli(&cli(&["-filename="])),
            Err(ConfigError::MissingFilename)
        );
        assert_eq!(
            UploadConfig::from_cli(&cli(&[])),
            Err(ConfigError::MissingFilename)
        );
    }

    #[test]
    fn test_all_flags() {
        let cfg = UploadConfig::from_cli(&cli(&[
            "--filename",
            "clip.mp4",
            "-title",
            "My Run",
            "-description=desc",
            "-category=22",
            "-keywords=fun,gaming",
            "-privacy=private",
            "-recorded=2024-05-01T00:00:00Z",
            "-thumbnail=thumb.jpg",
        ]))
        .unwrap();

        assert_eq!(cfg.title, "My Run");
        assert_eq!(cfg.description, "desc");
        assert_eq!(cfg.category_id, "22");
        assert_eq!(cfg.keywords, vec!["fun", "gaming"]);
        assert_eq!(cfg.privacy_status, "private");
        assert_eq!(cfg.recorded_date.as_deref(), Some("2024-05-01T00:00:00Z"));
        assert_eq!(cfg.thumbnail_path, Some(PathBuf::from("thumb.jpg")));
    }

    #[test]
    fn test_normalize_leaves_unknown_args() {
        let args = normalize_args(["ytupload", "-", "-x", "--title=a", "-title=b", "-5"]);
        let args: Vec<_> = args.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(args, ["ytupload", "-", "-x", "--title=a", "--title=b", "-5"]);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_keywords("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_keywords("fun, gaming "), vec!["fun", "gaming"]);
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords("   ").is_empty());
        assert!(parse_keywords(",").is_empty());
    }

    #[test]
    fn test_auth_config_trims_base_url() {
        let auth = AuthConfig::from_cli(&cli(&[
            "-filename=clip.mp4",
            "--api-base-url=http://127.0.0.1:1234/",
            "--token-file=token.json",
        ]));
        assert_eq!(auth.api_base_url, "http://127.0.0.1:1234");
        assert_eq!(auth.token_file, Some(PathBuf::from("token.json")));
    }
}
