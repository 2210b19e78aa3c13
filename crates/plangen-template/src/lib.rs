//! Plangen Template Data
//!
//! Bridges the caller's nested weekly-plan model (days → categories) and the
//! flat variable namespace of the document template.
//!
//! # Core Concepts
//!
//! - [`Day`] / [`Category`]: the closed sets forming the plan grid
//! - [`PlanFields`]: the caller-facing nested/optionally-encoded field set
//! - [`TemplateData`]: flat `key → value` mapping handed to the renderer
//! - [`flatten`]: total derivation — every grid cell is present in the output
//!
//! The flattening exists because the template engine addresses variables by
//! flat dotted names (`pazartesi.genel`), not nested structures.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod data;
mod error;
mod fields;
mod schedule;

pub use data::TemplateData;
pub use error::FlattenError;
pub use fields::{flatten, MusicList, PlanFields};
pub use schedule::{Category, Day, UnknownName};
