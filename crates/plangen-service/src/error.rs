//! Pipeline error taxonomy
//!
//! Every failure aborts the invocation; nothing is retried here. Full
//! diagnostic detail is logged server-side, and a caller-appropriate
//! message is always returned.

use plangen_render::RenderError;
use plangen_store::StoreError;
use plangen_template::FlattenError;

/// Errors across the generation pipeline
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Malformed JSON (or wrong shape) in the inbound body
    #[error("malformed request body: {0}")]
    RequestParse(String),

    /// Malformed JSON in `sections` or `fields`
    #[error("field decode failed: {0}")]
    FieldDecode(#[from] FlattenError),

    /// Template package could not be fetched from the store
    #[error("template fetch failed: {0}")]
    TemplateFetch(#[source] StoreError),

    /// Render failure — possibly a multi-error collection
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Rendered document could not be uploaded
    #[error("upload failed: {0}")]
    Upload(#[source] StoreError),
}

impl GenerateError {
    /// Caller-visible message
    ///
    /// For a render failure with a diagnostic collection this is the
    /// `"; "`-joined concatenation of every member message; otherwise the
    /// single underlying message.
    #[must_use]
    pub fn caller_message(&self) -> String {
        match self {
            Self::Render(err) => err.joined_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plangen_render::RenderDiagnostic;

    #[test]
    fn render_collection_joins_member_messages() {
        let err = GenerateError::Render(RenderError::Diagnostics(vec![
            RenderDiagnostic::unresolved("x", 0),
            RenderDiagnostic::unresolved("y", 5),
        ]));
        assert_eq!(
            err.caller_message(),
            "unresolved placeholder 'x'; unresolved placeholder 'y'"
        );
    }

    #[test]
    fn single_errors_pass_their_message_through() {
        let err = GenerateError::RequestParse("expected value at line 1".into());
        assert_eq!(
            err.caller_message(),
            "malformed request body: expected value at line 1"
        );
    }
}
