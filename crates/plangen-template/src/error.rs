//! Error types for template-data derivation

/// Errors while flattening caller fields into template data
///
/// Missing structure never fails (absent days/categories default to empty
/// strings); only malformed JSON in the two optionally-encoded payload
/// fields does.
#[derive(Debug, thiserror::Error)]
pub enum FlattenError {
    /// `sections` arrived as a string but is not valid JSON
    #[error("sections is not valid JSON: {source}")]
    SectionsDecode {
        #[source]
        source: serde_json::Error,
    },

    /// `fields` arrived as a string but is not valid JSON
    #[error("fields is not valid JSON: {source}")]
    FieldsDecode {
        #[source]
        source: serde_json::Error,
    },

    /// `sections` decoded to something other than an object of strings
    #[error("sections must be an object mapping names to strings, got {actual}")]
    SectionsShape { actual: &'static str },

    /// `fields` decoded to something other than a nested day/category object
    #[error("fields must be an object of per-day objects, got {actual}")]
    FieldsShape { actual: &'static str },
}

impl FlattenError {
    /// Which of the two encoded payload fields failed
    #[inline]
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::SectionsDecode { .. } | Self::SectionsShape { .. } => "sections",
            Self::FieldsDecode { .. } | Self::FieldsShape { .. } => "fields",
        }
    }
}
