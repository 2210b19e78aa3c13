//! Invocation shapes and request normalization
//!
//! Two calling conventions reach the pipeline: a typed-arguments call
//! (AppSync-style, payload under `arguments`, scalars already decoded) and
//! a gateway call (payload under `body`, possibly still a JSON string).
//! The shape is resolved exactly once, at entry, into a tagged union; no
//! ad-hoc shape checks exist deeper in the pipeline.

use crate::error::GenerateError;
use plangen_template::PlanFields;
use serde_json::Value;

/// The calling convention detected at entry
///
/// Decides the response shape as well: typed callers get a JSON string or
/// a raised error, gateway callers always get a status-code envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Typed-arguments invocation (`arguments` present)
    Typed,
    /// Gateway-wrapped invocation (`body`, string or object)
    Gateway,
}

impl Convention {
    /// Detect the convention by presence of the `arguments` property
    #[must_use]
    pub fn of(event: &Value) -> Self {
        if event.get("arguments").is_some() {
            Self::Typed
        } else {
            Self::Gateway
        }
    }
}

/// A raw invocation, resolved into its convention
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Canonical field set passed directly
    Typed {
        arguments: Value,
    },
    /// Body still possibly JSON-encoded
    Gateway {
        body: Option<Value>,
    },
}

impl Invocation {
    /// Split an inbound event by convention
    ///
    /// A typed event never has its `body` looked at, let alone parsed.
    #[must_use]
    pub fn from_event(mut event: Value) -> Self {
        if let Some(arguments) = event.get_mut("arguments").map(Value::take) {
            Self::Typed { arguments }
        } else {
            Self::Gateway {
                body: event.get_mut("body").map(Value::take),
            }
        }
    }

    /// Produce the canonical field set
    ///
    /// `sections` and `fields` may still be JSON-encoded strings at this
    /// stage; they are decoded later, by the flattener, exactly once.
    ///
    /// # Errors
    /// [`GenerateError::RequestParse`] for a body that is malformed JSON
    /// or a payload whose fields have the wrong shape.
    pub fn normalize(self) -> Result<PlanFields, GenerateError> {
        let payload = match self {
            Self::Typed { arguments } => arguments,
            Self::Gateway { body } => match body {
                Some(Value::String(raw)) => serde_json::from_str::<Value>(&raw)
                    .map_err(|e| GenerateError::RequestParse(e.to_string()))?,
                Some(other) => other,
                None => Value::Null,
            },
        };

        if payload.is_null() {
            return Ok(PlanFields::default());
        }
        serde_json::from_value(payload).map_err(|e| GenerateError::RequestParse(e.to_string()))
    }
}
