//! Caller-facing plan fields and the flattening derivation
//!
//! `sections` and `fields` may arrive either JSON-encoded (AppSync AWSJSON
//! carries them as strings) or already decoded; both are decoded exactly
//! once here, and nowhere else in the pipeline.

use crate::data::TemplateData;
use crate::error::FlattenError;
use crate::schedule::{Category, Day};
use serde::Deserialize;
use serde_json::Value;

/// Music list as submitted by the caller
///
/// Either an ordered sequence of titles or a pre-joined display string.
/// By the time template data is built it is always a single
/// comma-space-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MusicList {
    /// Ordered sequence of titles, joined with `", "` at flatten time
    Items(Vec<String>),
    /// Already-joined display string, passed through verbatim
    Joined(String),
}

impl MusicList {
    /// Single display string for the template variable
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Items(items) => items.join(", "),
            Self::Joined(s) => s.clone(),
        }
    }
}

/// The canonical per-invocation field set
///
/// Every field is optional on the wire; flattening substitutes empty
/// strings so the output namespace is always complete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFields {
    /// Week number (wire: `hafta_no`)
    #[serde(default, rename = "hafta_no")]
    pub week_number: Option<String>,

    /// Human-readable date range (wire: `tarih_araligi`)
    #[serde(default, rename = "tarih_araligi")]
    pub date_range: Option<String>,

    /// Institution name (wire: `kurum_adi`)
    #[serde(default, rename = "kurum_adi")]
    pub institution_name: Option<String>,

    /// Music list (wire: `muzik_listesi`), sequence or pre-joined string
    #[serde(default, rename = "muzik_listesi")]
    pub music_list: Option<MusicList>,

    /// Free-form top-level overrides; object or JSON-encoded string
    #[serde(default)]
    pub sections: Option<Value>,

    /// Nested day → category → note structure; object or JSON-encoded string
    #[serde(default)]
    pub fields: Option<Value>,
}

/// Derive the flat template namespace from the caller's field set
///
/// # Output guarantee
/// Exactly 29 baseline keys — all 25 `"<day>.<category>"` grid cells plus
/// `hafta_no`, `tarih_araligi`, `kurum_adi`, `muzik_listesi` — and any
/// extra keys introduced by `sections`. Sections are merged last, so a
/// caller-supplied section wins any key collision with a generated key.
///
/// # Errors
/// Only malformed JSON (or a non-object decode result) in `sections` or
/// `fields`; missing days, categories, and scalars silently default to
/// empty strings.
pub fn flatten(plan: &PlanFields) -> Result<TemplateData, FlattenError> {
    let fields = decode_object(plan.fields.as_ref(), FieldKind::Fields)?;
    let sections = decode_object(plan.sections.as_ref(), FieldKind::Sections)?;

    let mut data = TemplateData::new();

    // Grid cells first: total over the closed day/category sets.
    for day in Day::ALL {
        let per_day = fields
            .as_ref()
            .and_then(|f| f.get(day.as_str()))
            .and_then(Value::as_object);
        for category in Category::ALL {
            let note = per_day
                .and_then(|d| d.get(category.as_str()))
                .map(value_to_text)
                .unwrap_or_default();
            data.set(day.key(category), note);
        }
    }

    // Top-level scalars.
    data.set("hafta_no", plan.week_number.clone().unwrap_or_default());
    data.set("tarih_araligi", plan.date_range.clone().unwrap_or_default());
    data.set("kurum_adi", plan.institution_name.clone().unwrap_or_default());
    data.set(
        "muzik_listesi",
        plan.music_list.as_ref().map(MusicList::joined).unwrap_or_default(),
    );

    // Sections merge last: caller overrides beat generated keys.
    if let Some(sections) = sections {
        for (key, value) in sections {
            data.set(key, value_to_text(&value));
        }
    }

    Ok(data)
}

#[derive(Clone, Copy)]
enum FieldKind {
    Sections,
    Fields,
}

/// Decode an optionally-JSON-encoded object field exactly once
///
/// `None` and `null` mean absent; a string is parsed; anything decoding to
/// a non-object is a shape error.
fn decode_object(
    value: Option<&Value>,
    kind: FieldKind,
) -> Result<Option<serde_json::Map<String, Value>>, FlattenError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    let decoded = match value {
        Value::String(raw) => serde_json::from_str::<Value>(raw).map_err(|source| match kind {
            FieldKind::Sections => FlattenError::SectionsDecode { source },
            FieldKind::Fields => FlattenError::FieldsDecode { source },
        })?,
        other => other.clone(),
    };

    match decoded {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(match kind {
            FieldKind::Sections => FlattenError::SectionsShape {
                actual: json_type_name(&other),
            },
            FieldKind::Fields => FlattenError::FieldsShape {
                actual: json_type_name(&other),
            },
        }),
    }
}

/// Template variables are strings; scalars are displayed, structures blank
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
