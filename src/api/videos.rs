use log::debug;
use reqwest::header::{CONTENT_TYPE, LOCATION};

use super::{check_status, ApiClient, ApiError};
use crate::config;
use crate::metadata::{UploadedVideo, VideoHandle, VideoMetadataRequest};
use crate::upload::{MediaFile, VideoService};

impl VideoService for ApiClient {
    /// Create a video with the resumable upload protocol.
    ///
    /// The first request registers the metadata and returns a session URI in its
    /// `Location` header; the second streams the file to that URI and gets the
    /// video resource back.
    fn insert_video(
        &self,
        metadata: &VideoMetadataRequest,
        media: MediaFile,
    ) -> Result<UploadedVideo, ApiError> {
        debug!(
            "initiating resumable upload of {} ({} bytes, {})",
            media.path().display(),
            media.len(),
            media.content_type()
        );

        let resp = self
            .http
            .post(self.url(config::VIDEOS_UPLOAD_PATH))
            .query(&[("uploadType", "resumable"), ("part", config::VIDEO_PARTS)])
            .bearer_auth(self.token.secret())
            .header("X-Upload-Content-Type", media.content_type())
            .header("X-Upload-Content-Length", media.len().to_string())
            .json(metadata)
            .send()?;
        let resp = check_status(resp)?;

        let session_uri = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or(ApiError::MissingLocation)?;
        debug!("upload session: {}", session_uri);

        let content_type = media.content_type().to_string();
        let resp = self
            .http
            .put(&session_uri)
            .header(CONTENT_TYPE, content_type)
            .body(media.into_body())
            .send()?;
        let resp = check_status(resp)?;

        let video: UploadedVideo = resp.json().map_err(ApiError::InvalidResponse)?;
        if video.id.as_deref().map_or(true, str::is_empty) {
            return Err(ApiError::MissingVideoId);
        }
        Ok(video)
    }

    fn set_thumbnail(&self, video: &VideoHandle, media: MediaFile) -> Result<(), ApiError> {
        debug!(
            "setting thumbnail for {} from {} ({} bytes, {})",
            video,
            media.path().display(),
            media.len(),
            media.content_type()
        );

        let content_type = media.content_type().to_string();
        let resp = self
            .http
            .post(self.url(config::THUMBNAILS_SET_PATH))
            .query(&[("videoId", video.as_str()), ("uploadType", "media")])
            .bearer_auth(self.token.secret())
            .header(CONTENT_TYPE, content_type)
            .body(media.into_body())
            .send()?;
        let resp = check_status(resp)?;

        debug!("thumbnail response: {}", resp.text().unwrap_or_default());
        Ok(())
    }
}
