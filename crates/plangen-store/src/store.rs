//! Object-store trait and errors

use async_trait::async_trait;

/// Blob storage seam
///
/// Keys are flat strings (`plans/<uuid>.docx`); buckets are fixed per
/// store handle. Retrieval is fully buffered — callers need complete
/// in-memory packages, not streams.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug {
    /// Bucket this handle is bound to
    fn bucket(&self) -> &str;

    /// Fetch an object's bytes, fully buffered
    ///
    /// # Errors
    /// [`StoreError::NotFound`] for a missing key, [`StoreError::Read`]
    /// for transport failures.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Store bytes under a key with the given content type
    ///
    /// # Errors
    /// [`StoreError::Write`] on failure; nothing is retained for the key.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StoreError>;

    /// Issue a time-limited read URL for an existing key
    ///
    /// # Errors
    /// [`StoreError::Presign`] if the URL cannot be issued.
    async fn presign(&self, key: &str, expires_in_secs: u64) -> Result<String, StoreError>;
}

/// Errors from an object store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Key does not exist in the bucket
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    /// Read/transport failure
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },

    /// Write/transport failure
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },

    /// Signed-URL issuance failure
    #[error("failed to presign {key}: {message}")]
    Presign { key: String, message: String },
}

/// Static public URL for a bucket/key pair (public-read bucket policy)
#[must_use]
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}
