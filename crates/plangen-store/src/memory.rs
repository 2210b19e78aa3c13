//! In-process object store
//!
//! Backs the local harness and the test suite. Signed URLs follow the
//! S3 query-parameter shape so URL-policy assertions hold against either
//! store.

use crate::store::{public_url, ObjectStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

/// In-memory [`ObjectStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    bucket: String,
    objects: DashMap<String, StoredObject>,
}

impl MemoryStore {
    /// New empty store bound to a bucket name
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: DashMap::new(),
        }
    }

    /// Seed an object, e.g. the deploy-time template package
    pub fn seed(&self, key: impl Into<String>, bytes: Vec<u8>, content_type: impl Into<String>) {
        self.objects.insert(
            key.into(),
            StoredObject {
                bytes,
                content_type: content_type.into(),
            },
        );
    }

    /// Number of stored objects
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Content type recorded for a key, if present
    #[must_use]
    pub fn content_type_of(&self, key: &str) -> Option<String> {
        self.objects.get(key).map(|o| o.content_type.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.objects
            .get(key)
            .map(|o| o.bytes.clone())
            .ok_or_else(|| StoreError::NotFound {
                bucket: self.bucket.clone(),
                key: key.to_string(),
            })
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StoreError> {
        self.objects.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn presign(&self, key: &str, expires_in_secs: u64) -> Result<String, StoreError> {
        if !self.objects.contains_key(key) {
            return Err(StoreError::Presign {
                key: key.to_string(),
                message: "cannot presign a missing object".to_string(),
            });
        }
        let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
        Ok(format!(
            "{}?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Date={stamp}&X-Amz-Expires={expires_in_secs}",
            public_url(&self.bucket, key)
        ))
    }
}
