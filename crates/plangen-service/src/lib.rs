//! Plangen Service
//!
//! The generation pipeline, end to end:
//!
//! ```text
//! event → Invocation (convention detection)
//!       → PlanFields (canonical request)
//!       → TemplateData (flattening)
//!       → DocumentRenderer (render)
//!       → ArtifactPublisher (upload + locator)
//!       → Response (convention-shaped result)
//! ```
//!
//! Each invocation is an independent, stateless execution: no shared
//! mutable state, no internal parallelism, no retries. Collaborator
//! handles (store, renderer) are injected at construction, so the whole
//! pipeline runs against in-process doubles.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod generator;
mod invocation;
mod response;

pub use config::{ConfigError, ServiceConfig};
pub use error::GenerateError;
pub use generator::Generator;
pub use invocation::{Convention, Invocation};
pub use response::{GatewayResponse, Response, CORS_ALLOW_ALL};
