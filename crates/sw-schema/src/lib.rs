//! # sw-schema
//!
//! JSON Schema generation, validation, and registry for Sitewise.
//!
//! Exported types are defined in `sw-core` with `#[derive(JsonSchema)]`.
//! This crate collects their schemas into a [`SchemaRegistry`], validates
//! report instances before export, and serves `sitewise schema <name>`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
