//! Rendered-artifact publishing
//!
//! Owns the rendered buffer between render completion and upload; the
//! buffer is dropped after the attempt either way. Every invocation gets a
//! fresh key — plans are user-edited documents, not cacheable artifacts,
//! so identical inputs deliberately produce distinct objects.

use crate::store::{public_url, ObjectStore, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Content type of the published DOCX documents
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Default signed-URL lifetime, in seconds
pub const DEFAULT_SIGNED_EXPIRY_SECS: u64 = 3600;

/// How the retrievable URL is produced after upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlPolicy {
    /// Permanent public URL from bucket + key (public-read bucket policy)
    PublicStatic,
    /// Time-limited signed read URL; expiry enforced by the store, not here
    Signed { expires_in_secs: u64 },
}

impl Default for UrlPolicy {
    /// Signed URLs are the canonical policy
    fn default() -> Self {
        Self::Signed {
            expires_in_secs: DEFAULT_SIGNED_EXPIRY_SECS,
        }
    }
}

/// Retrievable locator for a published document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLocator {
    /// Public or signed URL
    pub url: String,
}

/// A successfully published document
#[derive(Debug, Clone)]
pub struct PublishedArtifact {
    /// Storage key under the configured prefix
    pub key: String,
    /// Locator produced by the configured [`UrlPolicy`]
    pub locator: ArtifactLocator,
}

/// Uploads rendered buffers under unique keys and issues locators
#[derive(Debug, Clone)]
pub struct ArtifactPublisher {
    store: Arc<dyn ObjectStore>,
    prefix: String,
    policy: UrlPolicy,
}

impl ArtifactPublisher {
    /// New publisher over an injected store handle
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, prefix: impl Into<String>, policy: UrlPolicy) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            policy,
        }
    }

    /// Generate a fresh storage key under the configured prefix
    #[must_use]
    pub fn next_key(&self) -> String {
        format!("{}{}.docx", self.prefix, Uuid::new_v4())
    }

    /// Upload a rendered buffer and produce its locator
    ///
    /// Nothing is written on failure paths before the upload itself; an
    /// upload failure leaves no artifact behind under the generated key.
    ///
    /// # Errors
    /// [`StoreError::Write`] from the upload, or [`StoreError::Presign`]
    /// when the signed policy cannot issue a URL.
    pub async fn publish(&self, rendered: Vec<u8>) -> Result<PublishedArtifact, StoreError> {
        let key = self.next_key();
        let size = rendered.len();
        self.store.put(&key, rendered, DOCX_CONTENT_TYPE).await?;
        tracing::info!(key = %key, size, "uploaded rendered document");

        let url = match self.policy {
            UrlPolicy::PublicStatic => public_url(self.store.bucket(), &key),
            UrlPolicy::Signed { expires_in_secs } => {
                self.store.presign(&key, expires_in_secs).await?
            }
        };

        Ok(PublishedArtifact {
            key,
            locator: ArtifactLocator { url },
        })
    }
}
