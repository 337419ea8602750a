use serde::{Deserialize, Serialize};

use crate::config::UploadConfig;

/// Body of the create-video call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadataRequest {
    pub snippet: SnippetRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_details: Option<RecordingDetails>,
    pub status: StatusRequest,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnippetRequest {
    pub title: String,
    pub description: String,
    pub category_id: String,
    /// The API answers 400 Bad Request to an empty tag list, so it is left out entirely.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingDetails {
    #[serde(default)]
    pub recording_date: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub privacy_status: String,
}

impl VideoMetadataRequest {
    pub fn from_config(cfg: &UploadConfig) -> Self {
        Self {
            snippet: SnippetRequest {
                title: cfg.title.clone(),
                description: cfg.description.clone(),
                category_id: cfg.category_id.clone(),
                tags: cfg.keywords.clone(),
            },
            recording_details: cfg.recorded_date.as_ref().map(|date| RecordingDetails {
                recording_date: date.clone(),
            }),
            status: StatusRequest {
                privacy_status: cfg.privacy_status.clone(),
            },
        }
    }
}

/// The video resource echoed back by the service. Only the fields this tool reads.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UploadedVideo {
    pub id: Option<String>,
    pub snippet: Option<SnippetResponse>,
    pub status: Option<StatusResponse>,
    pub recording_details: Option<RecordingDetails>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SnippetResponse {
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub privacy_status: Option<String>,
    pub upload_status: Option<String>,
}

/// Identifier of a video created on the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoHandle(String);

impl VideoHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;

    fn config(keywords: Vec<String>, recorded_date: Option<String>) -> UploadConfig {
        UploadConfig {
            file_path: PathBuf::from("clip.mp4"),
            title: "Test Title".into(),
            description: "Test Description".into(),
            category_id: "20".into(),
            keywords,
            privacy_status: "unlisted".into(),
            recorded_date,
            thumbnail_path: None,
        }
    }

    #[test]
    fn test_tags_omitted_when_empty() {
        let req = VideoMetadataRequest::from_config(&config(Vec::new(), None));
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(
            body,
            json!({
                "snippet": {
                    "title": "Test Title",
                    "description": "Test Description",
                    "categoryId": "20",
                },
                "status": { "privacyStatus": "unlisted" },
            })
        );
    }

    #[test]
    fn test_tags_and_recording_date_included() {
        let req = VideoMetadataRequest::from_config(&config(
            vec!["fun".into(), "gaming".into()],
            Some("2024-05-01T00:00:00Z".into()),
        ));
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body["snippet"]["tags"], json!(["fun", "gaming"]));
        assert_eq!(
            body["recordingDetails"]["recordingDate"],
            json!("2024-05-01T00:00:00Z")
        );
    }

    #[test]
    fn test_uploaded_video_tolerates_partial_body() {
        let video: UploadedVideo = serde_json::from_str(
            r#"{"kind":"youtube#video","id":"abc123","status":{"uploadStatus":"uploaded"}}"#,
        )
        .unwrap();
        assert_eq!(video.id.as_deref(), Some("abc123"));
        assert!(video.snippet.is_none());
        assert_eq!(
            video.status.unwrap().upload_status.as_deref(),
            Some("uploaded")
        );
    }
}
