mod media;
pub mod thumbnail;
pub mod video;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::api::ApiError;
use crate::config::UploadConfig;
use crate::metadata::{UploadedVideo, VideoHandle, VideoMetadataRequest};

pub use media::MediaFile;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("error opening {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error uploading video")]
    CreateVideo(#[source] ApiError),
    #[error("error setting thumbnail for video {video}")]
    SetThumbnail {
        video: VideoHandle,
        #[source]
        source: ApiError,
    },
}

/// The two remote operations an upload run needs.
///
/// [`ApiClient`](crate::api::ApiClient) talks to YouTube; tests substitute a recorder.
pub trait VideoService {
    /// Register `metadata` and upload `media` as a new video.
    fn insert_video(
        &self,
        metadata: &VideoMetadataRequest,
        media: MediaFile,
    ) -> Result<UploadedVideo, ApiError>;

    /// Replace the thumbnail of an existing video.
    fn set_thumbnail(&self, video: &VideoHandle, media: MediaFile) -> Result<(), ApiError>;
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub video: VideoHandle,
    pub thumbnail_set: bool,
}

/// Upload the video, then its thumbnail if one is configured.
///
/// Progress lines go to `out`. Once the video exists it is never rolled back: a failing
/// thumbnail step returns an error after the video ID has already been written.
pub fn run<S: VideoService, W: Write>(
    cfg: &UploadConfig,
    service: &S,
    out: &mut W,
) -> Result<UploadOutcome> {
    let video = video::upload_video(cfg, service)?;
    writeln!(out, "Upload successful! Video ID: {}", video).context("failed to write output")?;

    let thumbnail_set = match &cfg.thumbnail_path {
        Some(path) => {
            thumbnail::upload_thumbnail(path, &video, service)?;
            writeln!(out, "Thumbnail uploaded!").context("failed to write output")?;
            true
        }
        None => false,
    };

    Ok(UploadOutcome {
        video,
        thumbnail_set,
    })
}
