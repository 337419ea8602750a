use std::fs::File;
use std::path::{Path, PathBuf};

use reqwest::blocking::Body;

use super::UploadError;

/// A local file opened for a single upload call.
///
/// The handle is closed when the `MediaFile` (or the request body it is turned into)
/// is dropped, whichever way the call ends.
#[derive(Debug)]
pub struct MediaFile {
    path: PathBuf,
    file: File,
    len: u64,
    content_type: String,
}

impl MediaFile {
    /// Open `path`, guessing its MIME type from the extension.
    pub fn open(path: &Path, fallback_mime: &str) -> Result<Self, UploadError> {
        let open_err = |source| UploadError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_err)?;
        let len = file.metadata().map_err(open_err)?.len();
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(fallback_mime)
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            file,
            len,
            content_type,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Stream the file as a request body of known length.
    pub fn into_body(self) -> Body {
        Body::sized(self.file, self.len)
    }
}
