//! Plangen Store
//!
//! Durable-storage seam of the generation pipeline.
//!
//! # Core Concepts
//!
//! - [`ObjectStore`]: get/put/presign trait over blob storage
//! - [`MemoryStore`]: in-process store for the local harness and tests
//! - [`ArtifactPublisher`]: unique-key upload of rendered documents
//! - [`UrlPolicy`]: static public URL vs. time-limited signed URL
//!
//! The store handle is constructed once at bootstrap and passed in; there
//! is no module-level client instance.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod memory;
mod publisher;
mod store;

pub use memory::MemoryStore;
pub use publisher::{
    ArtifactLocator, ArtifactPublisher, PublishedArtifact, UrlPolicy, DEFAULT_SIGNED_EXPIRY_SECS,
    DOCX_CONTENT_TYPE,
};
pub use store::{public_url, ObjectStore, StoreError};
