//! # sw-analysis
//!
//! The audit pipeline for Sitewise: a single-pass, synchronous batch transform
//! from raw collaborator records to an immutable [`sw_core::entities::Report`].
//!
//! Steps, leaves first:
//! - [`normalize`]: recent and prior search rows into per-page performance
//! - [`store`]: raw content records into a URL-keyed document store
//! - [`decay`]: declining pages joined with stale documents
//! - [`links`]: internal link graph, orphans and hubs
//! - [`page_two`], [`freshness`], [`traffic`]: further opportunity scans
//! - [`rank`]: ordering and top-N truncation
//! - [`aggregate`]: the final report
//!
//! [`pipeline::run_audit`] runs them all. Every step takes its thresholds from
//! an explicit [`AnalysisSettings`] and its notion of "now" from a
//! [`sw_core::RunClock`].

pub mod aggregate;
pub mod decay;
pub mod error;
pub mod freshness;
pub mod links;
pub mod normalize;
pub mod page_two;
pub mod pipeline;
pub mod rank;
pub mod settings;
pub mod store;
pub mod traffic;

pub use error::AnalysisError;
pub use links::LinkGraph;
pub use normalize::{NormalizedMetrics, PerformanceSet, normalize_metrics};
pub use pipeline::{AuditInputs, run_audit};
pub use settings::AnalysisSettings;
pub use store::{DocumentStore, StoreBuild};
