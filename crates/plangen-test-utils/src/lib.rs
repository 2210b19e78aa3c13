//! Testing utilities for the plangen workspace
//!
//! Shared fixtures, event builders, and failure-injecting doubles.

#![allow(missing_docs)]

use async_trait::async_trait;
use plangen_render::{DocumentRenderer, RenderDiagnostic, RenderError};
use plangen_store::{MemoryStore, ObjectStore, StoreError};
use plangen_template::TemplateData;
use serde_json::{json, Value};
use std::sync::Arc;

/// Bucket name used across fixtures
pub const TEST_BUCKET: &str = "plan-bucket";

/// Template key used across fixtures
pub const TEST_TEMPLATE_KEY: &str = "templates/plan.docx";

/// A minimal template exercising scalars and one grid cell
pub const BASIC_TEMPLATE: &str =
    "Hafta {{hafta_no}} ({{tarih_araligi}}) - {{kurum_adi}}\n\
     Pazartesi/Genel: {{pazartesi.genel}}\n\
     Müzik: {{muzik_listesi}}\n";

/// Typed-arguments event wrapping the given payload
#[must_use]
pub fn typed_event(arguments: Value) -> Value {
    json!({ "arguments": arguments })
}

/// Gateway event with an already-decoded object body
#[must_use]
pub fn gateway_event(body: Value) -> Value {
    json!({ "body": body })
}

/// Gateway event with a JSON-encoded string body
#[must_use]
pub fn gateway_event_encoded(body: &Value) -> Value {
    json!({ "body": body.to_string() })
}

/// The scenario-A payload: one grid note, array music list, encoded subfields
#[must_use]
pub fn scenario_a_payload() -> Value {
    json!({
        "hafta_no": "3",
        "tarih_araligi": "1-7 Eyl",
        "kurum_adi": "X Kurumu",
        "muzik_listesi": ["a", "b"],
        "sections": "{}",
        "fields": "{\"pazartesi\":{\"genel\":\"not\"}}"
    })
}

/// Memory store pre-seeded with [`BASIC_TEMPLATE`] under [`TEST_TEMPLATE_KEY`]
#[must_use]
pub fn seeded_store() -> Arc<MemoryStore> {
    seeded_store_with(BASIC_TEMPLATE.as_bytes())
}

/// Memory store pre-seeded with arbitrary template bytes
#[must_use]
pub fn seeded_store_with(template: &[u8]) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new(TEST_BUCKET));
    store.seed(TEST_TEMPLATE_KEY, template.to_vec(), "application/octet-stream");
    store
}

/// Which store operation a [`FailingStore`] rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Get,
    Put,
    Presign,
}

/// Store double that fails one operation and delegates the rest
#[derive(Debug)]
pub struct FailingStore {
    inner: Arc<MemoryStore>,
    fail_on: FailOn,
}

impl FailingStore {
    #[must_use]
    pub fn new(inner: Arc<MemoryStore>, fail_on: FailOn) -> Self {
        Self { inner, fail_on }
    }

    /// Objects currently held by the delegate store
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.inner.object_count()
    }
}

#[async_trait]
impl ObjectStore for FailingStore {
    fn bucket(&self) -> &str {
        self.inner.bucket()
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        if self.fail_on == FailOn::Get {
            return Err(StoreError::Read {
                key: key.to_string(),
                message: "injected read failure".to_string(),
            });
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StoreError> {
        if self.fail_on == FailOn::Put {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "injected write failure".to_string(),
            });
        }
        self.inner.put(key, bytes, content_type).await
    }

    async fn presign(&self, key: &str, expires_in_secs: u64) -> Result<String, StoreError> {
        if self.fail_on == FailOn::Presign {
            return Err(StoreError::Presign {
                key: key.to_string(),
                message: "injected presign failure".to_string(),
            });
        }
        self.inner.presign(key, expires_in_secs).await
    }
}

/// Renderer double failing with a fixed diagnostic collection
#[derive(Debug)]
pub struct FailingRenderer {
    pub diagnostics: Vec<RenderDiagnostic>,
}

impl FailingRenderer {
    /// Fails with `count` distinct unresolved-tag diagnostics
    #[must_use]
    pub fn with_unresolved(count: usize) -> Self {
        Self {
            diagnostics: (0..count)
                .map(|i| RenderDiagnostic::unresolved(format!("tag_{i}"), i * 10))
                .collect(),
        }
    }
}

impl DocumentRenderer for FailingRenderer {
    fn render(&self, _template: &[u8], _data: &TemplateData) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Diagnostics(self.diagnostics.clone()))
    }
}
