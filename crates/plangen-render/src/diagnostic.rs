//! Structured render diagnostics

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One member of a render failure collection
///
/// Mirrors what template engines attach to each error: a stable identifier,
/// a short human message, a longer explanation, the offending placeholder
/// tag, and where in the template it sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDiagnostic {
    /// Stable machine identifier, e.g. `unresolved_tag`
    pub id: String,
    /// Short human message
    pub message: String,
    /// Longer explanation of what went wrong
    pub explanation: String,
    /// The offending placeholder tag, if one was identified
    pub tag: Option<String>,
    /// Byte offset of the placeholder in the template text
    pub offset: Option<usize>,
}

impl RenderDiagnostic {
    /// Diagnostic for a placeholder with no matching template variable
    #[must_use]
    pub fn unresolved(tag: impl Into<String>, offset: usize) -> Self {
        let tag = tag.into();
        Self {
            id: "unresolved_tag".to_string(),
            message: format!("unresolved placeholder '{tag}'"),
            explanation: format!(
                "the template references '{{{{{tag}}}}}' but no variable with that name was supplied"
            ),
            tag: Some(tag),
            offset: Some(offset),
        }
    }

    /// Diagnostic for a `{{` with no closing `}}`
    #[must_use]
    pub fn unterminated(offset: usize) -> Self {
        Self {
            id: "unterminated_tag".to_string(),
            message: "unterminated placeholder".to_string(),
            explanation: "found an opening '{{' with no matching '}}'".to_string(),
            tag: None,
            offset: Some(offset),
        }
    }
}

impl Display for RenderDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
