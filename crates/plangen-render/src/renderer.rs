//! Renderer trait and the shipped placeholder engine

use crate::diagnostic::RenderDiagnostic;
use crate::error::RenderError;
use plangen_template::TemplateData;

/// A document rendering engine
///
/// Consumes a complete in-memory template package and the flat variable
/// namespace, produces the rendered package. Engines must report *every*
/// template/data mismatch, not just the first.
pub trait DocumentRenderer: Send + Sync + std::fmt::Debug {
    /// Render the template with the given variables
    ///
    /// # Errors
    /// - [`RenderError::InvalidTemplate`] if the package is unusable
    /// - [`RenderError::Diagnostics`] with the full mismatch collection
    fn render(&self, template: &[u8], data: &TemplateData) -> Result<Vec<u8>, RenderError>;
}

/// Strict `{{tag}}` substitution over template text
///
/// Stands in for the real DOCX engine behind [`DocumentRenderer`]: same
/// variable namespace, same multi-error reporting. In strict mode every
/// unresolved placeholder becomes a diagnostic and the whole collection is
/// returned; in lenient mode unresolved placeholders render as empty.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    strict: bool,
}

impl PlaceholderRenderer {
    /// Strict renderer: unresolved placeholders fail the render
    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Lenient renderer: unresolved placeholders render as empty strings
    #[inline]
    #[must_use]
    pub const fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        Self::strict()
    }
}

impl DocumentRenderer for PlaceholderRenderer {
    fn render(&self, template: &[u8], data: &TemplateData) -> Result<Vec<u8>, RenderError> {
        let text = std::str::from_utf8(template)
            .map_err(|e| RenderError::InvalidTemplate(format!("template is not UTF-8: {e}")))?;

        let mut out = String::with_capacity(text.len());
        let mut diagnostics = Vec::new();
        let mut rest = text;
        let mut consumed = 0usize;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let tag_start = consumed + open;
            let after_open = &rest[open + 2..];

            let Some(close) = after_open.find("}}") else {
                diagnostics.push(RenderDiagnostic::unterminated(tag_start));
                // Nothing after an unterminated marker can be trusted.
                out.push_str(&rest[open..]);
                rest = "";
                break;
            };

            let tag = after_open[..close].trim();
            match data.get(tag) {
                Some(value) => out.push_str(value),
                None => {
                    if self.strict {
                        diagnostics.push(RenderDiagnostic::unresolved(tag, tag_start));
                    }
                    // Lenient: substitute empty.
                }
            }

            let advance = open + 2 + close + 2;
            consumed += advance;
            rest = &rest[advance..];
        }
        out.push_str(rest);

        if diagnostics.is_empty() {
            Ok(out.into_bytes())
        } else {
            Err(RenderError::Diagnostics(diagnostics))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data(pairs: &[(&str, &str)]) -> TemplateData {
        pairs.iter().copied().collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let data = data(&[("hafta_no", "3"), ("kurum_adi", "X Kurumu")]);
        let rendered = PlaceholderRenderer::strict()
            .render(b"Hafta {{hafta_no}} - {{kurum_adi}}", &data)
            .unwrap();
        assert_eq!(String::from_utf8(rendered).unwrap(), "Hafta 3 - X Kurumu");
    }

    #[test]
    fn trims_whitespace_inside_markers() {
        let data = data(&[("hafta_no", "3")]);
        let rendered = PlaceholderRenderer::strict()
            .render(b"{{ hafta_no }}", &data)
            .unwrap();
        assert_eq!(rendered, b"3");
    }

    #[test]
    fn strict_collects_every_unresolved_tag() {
        let data = data(&[("known", "v")]);
        let err = PlaceholderRenderer::strict()
            .render(b"{{known}} {{missing_a}} {{missing_b}}", &data)
            .unwrap_err();
        let diags = err.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].tag.as_deref(), Some("missing_a"));
        assert_eq!(diags[1].tag.as_deref(), Some("missing_b"));
        assert_eq!(
            err.joined_message(),
            "unresolved placeholder 'missing_a'; unresolved placeholder 'missing_b'"
        );
    }

    #[test]
    fn lenient_renders_unresolved_as_empty() {
        let data = data(&[]);
        let rendered = PlaceholderRenderer::lenient()
            .render(b"[{{missing}}]", &data)
            .unwrap();
        assert_eq!(rendered, b"[]");
    }

    #[test]
    fn unterminated_marker_is_a_diagnostic() {
        let data = data(&[("a", "1")]);
        let err = PlaceholderRenderer::strict()
            .render(b"{{a}} and {{broken", &data)
            .unwrap_err();
        let diags = err.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "unterminated_tag");
        assert_eq!(diags[0].offset, Some(10));
    }

    #[test]
    fn non_utf8_template_is_invalid() {
        let err = PlaceholderRenderer::strict()
            .render(&[0xff, 0xfe, 0x00], &data(&[]))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidTemplate(_)));
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let rendered = PlaceholderRenderer::strict()
            .render("düz metin".as_bytes(), &data(&[]))
            .unwrap();
        assert_eq!(String::from_utf8(rendered).unwrap(), "düz metin");
    }
}
