//! The generation pipeline
//!
//! Strictly sequential: each stage consumes the previous stage's output,
//! so there is no speculative fetch/render. The template is fully buffered
//! before rendering — the engine consumes a complete in-memory package.

use crate::config::ServiceConfig;
use crate::error::GenerateError;
use crate::invocation::{Convention, Invocation};
use crate::response::Response;
use plangen_render::DocumentRenderer;
use plangen_store::{ArtifactLocator, ArtifactPublisher, ObjectStore};
use plangen_template::flatten;
use serde_json::Value;
use std::sync::Arc;

/// One-task-per-request document generator
///
/// Holds injected collaborator handles; invocations share nothing mutable,
/// and every invocation owns its own buffer and storage key.
#[derive(Debug, Clone)]
pub struct Generator {
    store: Arc<dyn ObjectStore>,
    renderer: Arc<dyn DocumentRenderer>,
    publisher: ArtifactPublisher,
    template_key: String,
}

impl Generator {
    /// Wire the pipeline from config and collaborator handles
    #[must_use]
    pub fn new(
        config: &ServiceConfig,
        store: Arc<dyn ObjectStore>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        let publisher =
            ArtifactPublisher::new(store.clone(), &config.output_prefix, config.url_policy);
        Self {
            store,
            renderer,
            publisher,
            template_key: config.template_key.clone(),
        }
    }

    /// Handle one invocation, shaping the result per its convention
    ///
    /// Gateway callers always get `Ok` — failures become a 500 envelope.
    ///
    /// # Errors
    /// Typed-convention failures are raised as [`GenerateError`], carrying
    /// the joined caller message.
    pub async fn handle(&self, event: Value) -> Result<Response, GenerateError> {
        let convention = Convention::of(&event);
        tracing::info!(?convention, "incoming invocation");

        match self.run(event).await {
            Ok(locator) => Ok(match convention {
                Convention::Typed => Response::typed_success(&locator),
                Convention::Gateway => Response::gateway_success(&locator),
            }),
            Err(error) => {
                log_failure(&error);
                match convention {
                    Convention::Typed => Err(error),
                    Convention::Gateway => Ok(Response::gateway_failure(&error)),
                }
            }
        }
    }

    /// normalize → flatten → fetch → render → publish
    async fn run(&self, event: Value) -> Result<ArtifactLocator, GenerateError> {
        let plan = Invocation::from_event(event).normalize()?;
        let data = flatten(&plan)?;
        tracing::debug!(variables = data.len(), "flattened template data");

        let template = self
            .store
            .get(&self.template_key)
            .await
            .map_err(GenerateError::TemplateFetch)?;
        tracing::debug!(template_key = %self.template_key, size = template.len(), "fetched template");

        let rendered = self.renderer.render(&template, &data)?;

        let artifact = self
            .publisher
            .publish(rendered)
            .await
            .map_err(GenerateError::Upload)?;
        tracing::info!(key = %artifact.key, "plan document published");
        Ok(artifact.locator)
    }
}

/// Log the full failure detail before the caller sees a reduced message
///
/// Render collections are logged member by member so every offending tag
/// lands in the server-side log.
fn log_failure(error: &GenerateError) {
    if let GenerateError::Render(render) = error {
        for diag in render.diagnostics() {
            tracing::error!(
                id = %diag.id,
                tag = ?diag.tag,
                offset = ?diag.offset,
                explanation = %diag.explanation,
                "render diagnostic"
            );
        }
    }
    tracing::error!(error = %error, "generation failed");
}
