//! Entity structs for all Sitewise domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so every
//! value crossing the system boundary has a lossless JSON projection.

mod decay;
mod document;
mod freshness;
mod links;
mod opportunity;
mod performance;
mod report;

pub use decay::DecayCandidate;
pub use document::Document;
pub use freshness::{FreshnessReport, StaleDocument, YearUpdateCandidate};
pub use links::{HubDocument, LinkGraphSummary, OrphanDocument};
pub use opportunity::{PageTwoOpportunity, TrafficSummary};
pub use performance::{PagePerformance, percent_change};
pub use report::{Report, ReportStats, SkippedStep};
