use std::path::Path;

use log::info;

use super::{MediaFile, UploadError, VideoService};
use crate::config;
use crate::metadata::VideoHandle;

/// Attach the image at `path` to an already created video.
pub fn upload_thumbnail<S: VideoService>(
    path: &Path,
    video: &VideoHandle,
    service: &S,
) -> Result<(), UploadError> {
    let media = MediaFile::open(path, config::FALLBACK_IMAGE_MIME)?;

    info!("Uploading thumbnail '{}'...", path.display());
    service
        .set_thumbnail(video, media)
        .map_err(|source| UploadError::SetThumbnail {
            video: video.clone(),
            source,
        })
}
