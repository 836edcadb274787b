//! # sw-core
//!
//! Core types, ingestion validation, and error types for Sitewise.
//!
//! This crate provides the foundational types shared across all Sitewise crates:
//! - Entity structs for page performance, documents, and every ranked finding
//! - The exported [`entities::Report`] aggregate
//! - Loosely-typed collaborator rows and their validation into typed records
//! - The per-run clock snapshot and search-analytics date windows
//! - Cross-cutting error types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod raw;
pub mod window;

pub use clock::RunClock;
pub use errors::{CoreError, MalformedRecord};
pub use window::{DateRange, ReportWindows};
