//! File parts for multipart uploads.

use std::fmt;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::{Error, Result};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A binary file part for a multipart upload.
///
/// A `FilePart` can only be built from an open regular file (or, with an
/// explicit MIME type, from an in-memory buffer), so endpoints that take
/// one never see raw paths or arbitrary values.
///
/// # Example
///
/// ```no_run
/// use taboola_rs::FilePart;
///
/// # async fn example() -> taboola_rs::Result<()> {
/// let image = FilePart::open("banner.png").await?;
/// assert_eq!(image.mime_type(), "image/png");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FilePart {
    content: Vec<u8>,
    filename: String,
    mime_type: String,
}

impl FilePart {
    /// Open `path` and read it into a file part.
    ///
    /// The MIME type is derived from the file extension.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|e| {
            Error::Validation(format!("cannot open {} as a file: {}", path.display(), e))
        })?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::Validation(format!("{} has no file name", path.display()))
            })?;
        Self::from_file(file, filename).await
    }

    /// Read an already-open file handle into a file part.
    ///
    /// `filename` is sent as the part's file name and drives MIME
    /// detection. Handles that are not regular files (directories,
    /// sockets, ...) are rejected.
    pub async fn from_file(mut file: File, filename: impl Into<String>) -> Result<Self> {
        let filename = filename.into();
        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Err(Error::Validation(format!(
                "{} is not an open regular file",
                filename
            )));
        }

        let mut content = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut content).await?;

        let mime_type = mime_guess::from_path(&filename)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string();

        Ok(Self {
            content,
            filename,
            mime_type,
        })
    }

    /// Build a file part from an in-memory buffer.
    ///
    /// There is no file on disk to inspect, so the MIME type must be
    /// supplied.
    pub fn from_bytes(
        content: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// File name sent with the part.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type sent with the part.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub(crate) fn into_part(self) -> Result<Part> {
        Part::bytes(self.content)
            .file_name(self.filename)
            .mime_str(&self.mime_type)
            .map_err(|e| Error::Validation(format!("invalid MIME type: {}", e)))
    }
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("len", &self.content.len())
            .finish()
    }
}

/// One named part of a [`MultipartPayload`].
#[derive(Debug, Clone)]
pub enum PayloadPart {
    /// JSON metadata, sent as `application/json`
    Json(Value),
    /// Binary file content
    File(FilePart),
}

/// A multipart body: named JSON and file parts, in order.
///
/// The payload is kept in this unencoded form so the transport can
/// rebuild the form for every attempt.
#[derive(Debug, Clone, Default)]
pub struct MultipartPayload {
    parts: Vec<(String, PayloadPart)>,
}

impl MultipartPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a JSON metadata part.
    pub fn json(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parts.push((name.into(), PayloadPart::Json(value.into())));
        self
    }

    /// Add a file part.
    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.parts.push((name.into(), PayloadPart::File(file)));
        self
    }

    /// Names of the parts, in order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    /// Look up a part by name.
    pub fn part(&self, name: &str) -> Option<&PayloadPart> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, part)| part)
    }

    pub(crate) fn to_form(&self) -> Result<Form> {
        let mut form = Form::new();
        for (name, part) in &self.parts {
            let part = match part {
                PayloadPart::Json(value) => Part::text(serde_json::to_string(value)?)
                    .mime_str("application/json")
                    .map_err(|e| Error::Validation(format!("invalid MIME type: {}", e)))?,
                PayloadPart::File(file) => file.clone().into_part()?,
            };
            form = form.part(name.clone(), part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_detects_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        tokio::fs::write(&path, b"not really a video").await.unwrap();

        let part = FilePart::open(&path).await.unwrap();
        assert_eq!(part.filename(), "clip.mp4");
        assert_eq!(part.mime_type(), "video/mp4");
        assert_eq!(part.len(), 18);
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.zzzunknown");
        tokio::fs::write(&path, b"x").await.unwrap();

        let part = FilePart::open(&path).await.unwrap();
        assert_eq!(part.mime_type(), FALLBACK_MIME);
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = FilePart::open(dir.path()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_path_is_rejected() {
        let err = FilePart::open("/definitely/not/here.png").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_payload_parts_keep_order() {
        let payload = MultipartPayload::new()
            .json("new_item", serde_json::json!({"name": "clip"}))
            .file("video_file", FilePart::from_bytes(vec![0], "v.mp4", "video/mp4"));

        let names: Vec<_> = payload.part_names().collect();
        assert_eq!(names, ["new_item", "video_file"]);
        assert!(matches!(payload.part("new_item"), Some(PayloadPart::Json(_))));
        assert!(payload.to_form().is_ok());
    }

    #[test]
    fn test_from_bytes_keeps_explicit_mime() {
        let part = FilePart::from_bytes(vec![1, 2, 3], "pixel", "image/gif");
        assert_eq!(part.mime_type(), "image/gif");
        assert!(!part.is_empty());
        assert!(!format!("{:?}", part).contains("[1, 2, 3]"));
    }
}
