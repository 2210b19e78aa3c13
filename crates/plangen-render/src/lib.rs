//! Plangen Renderer
//!
//! Contract between the generation pipeline and whatever engine substitutes
//! `{{tag}}` placeholders in a template package.
//!
//! # Core Concepts
//!
//! - [`DocumentRenderer`]: the engine trait — flat data in, rendered bytes out
//! - [`RenderDiagnostic`]: one structured member of a render failure
//! - [`RenderError`]: single engine failure or an ordered multi-error collection
//! - [`PlaceholderRenderer`]: shipped strict/lenient text-substitution engine
//!
//! Real DOCX engines report template/data mismatches as a *collection* of
//! errors, not just the first one; the contract preserves the whole
//! collection so every offending tag survives into logs and caller messages.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod diagnostic;
mod error;
mod renderer;

pub use diagnostic::RenderDiagnostic;
pub use error::RenderError;
pub use renderer::{DocumentRenderer, PlaceholderRenderer};
