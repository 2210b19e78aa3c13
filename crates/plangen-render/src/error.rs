//! Render error types

use crate::diagnostic::RenderDiagnostic;

/// Errors from a document renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template package itself is unusable
    #[error("template is not renderable: {0}")]
    InvalidTemplate(String),

    /// Template/data mismatch — ordered collection, never just the first
    #[error("{}", join_messages(.0))]
    Diagnostics(Vec<RenderDiagnostic>),

    /// Opaque engine failure (real engines behind the same trait)
    #[error("render engine failure: {0}")]
    Engine(String),
}

impl RenderError {
    /// All member diagnostics, empty for non-collection variants
    #[must_use]
    pub fn diagnostics(&self) -> &[RenderDiagnostic] {
        match self {
            Self::Diagnostics(diags) => diags,
            _ => &[],
        }
    }

    /// Caller-facing message: member messages joined with `"; "`
    #[must_use]
    pub fn joined_message(&self) -> String {
        self.to_string()
    }
}

fn join_messages(diagnostics: &[RenderDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
