//! Operations service.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{FilePart, MultipartPayload};
use crate::Result;

/// Service for account-independent operations.
///
/// # Example
///
/// ```no_run
/// use taboola_rs::FilePart;
///
/// # async fn example(client: taboola_rs::TaboolaClient) -> taboola_rs::Result<()> {
/// let image = FilePart::open("thumbnail.png").await?;
/// let uploaded = client.operations().upload_image(image).await?;
/// println!("Hosted at {}", uploaded["value"]);
/// # Ok(())
/// # }
/// ```
pub struct OperationsService {
    inner: Arc<ClientInner>,
}

impl OperationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Upload an image to Taboola's CDN, sent as the multipart field `file`.
    pub async fn upload_image(&self, file: FilePart) -> Result<Value> {
        let payload = MultipartPayload::new().file("file", file);
        self.inner
            .post_multipart("operations/upload-image", payload)
            .await
    }

    /// Open `path` and upload it as an image.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation) before
    /// any request is sent if `path` is not a readable regular file.
    pub async fn upload_image_from_path(&self, path: impl AsRef<Path>) -> Result<Value> {
        let file = FilePart::open(path).await?;
        self.upload_image(file).await
    }
}
