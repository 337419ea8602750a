use log::{debug, info};

use super::{MediaFile, UploadError, VideoService};
use crate::api::ApiError;
use crate::config::{self, UploadConfig};
use crate::metadata::{VideoHandle, VideoMetadataRequest};

/// Create the video described by `cfg` and return its ID.
///
/// The file is opened before any request is made, so a bad path never reaches the network.
pub fn upload_video<S: VideoService>(
    cfg: &UploadConfig,
    service: &S,
) -> Result<VideoHandle, UploadError> {
    let metadata = VideoMetadataRequest::from_config(cfg);
    let media = MediaFile::open(&cfg.file_path, config::FALLBACK_VIDEO_MIME)?;

    info!(
        "uploading {} ({} bytes) as \"{}\"",
        cfg.file_path.display(),
        media.len(),
        metadata.snippet.title
    );
    let uploaded = service
        .insert_video(&metadata, media)
        .map_err(UploadError::CreateVideo)?;

    if let Some(snippet) = &uploaded.snippet {
        debug!("echoed title: {:?}, tags: {:?}", snippet.title, snippet.tags);
    }
    if let Some(status) = &uploaded.status {
        debug!(
            "echoed privacy: {:?}, upload status: {:?}",
            status.privacy_status, status.upload_status
        );
    }
    if let Some(details) = &uploaded.recording_details {
        debug!("echoed recording date: {}", details.recording_date);
    }

    let id = uploaded
        .id
        .filter(|id| !id.is_empty())
        .ok_or(UploadError::CreateVideo(ApiError::MissingVideoId))?;
    Ok(VideoHandle::new(id))
}
