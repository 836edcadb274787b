//! Central schema registry for every exported Sitewise type.
//!
//! The `SchemaRegistry` builds JSON Schemas from sw-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde::Serialize;
use sw_core::entities::Report;

use crate::error::SchemaError;

/// Name under which the exported report schema is registered.
pub const REPORT: &str = "report";

/// Every JSON Schema a report consumer may need, by name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    /// Build a registry holding the report and every type nested in it.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Report envelope (4) ---
        register!(schemas, REPORT, sw_core::entities::Report);
        register!(schemas, "report_stats", sw_core::entities::ReportStats);
        register!(schemas, "skipped_step", sw_core::entities::SkippedStep);
        register!(schemas, "report_windows", sw_core::window::ReportWindows);

        // --- Inputs (3) ---
        register!(schemas, "document", sw_core::entities::Document);
        register!(schemas, "page_performance", sw_core::entities::PagePerformance);
        register!(schemas, "malformed_record", sw_core::MalformedRecord);

        // --- Findings (9) ---
        register!(schemas, "decay_candidate", sw_core::entities::DecayCandidate);
        register!(schemas, "orphan_document", sw_core::entities::OrphanDocument);
        register!(schemas, "hub_document", sw_core::entities::HubDocument);
        register!(
            schemas,
            "link_graph_summary",
            sw_core::entities::LinkGraphSummary
        );
        register!(
            schemas,
            "page_two_opportunity",
            sw_core::entities::PageTwoOpportunity
        );
        register!(schemas, "traffic_summary", sw_core::entities::TrafficSummary);
        register!(schemas, "freshness_report", sw_core::entities::FreshnessReport);
        register!(schemas, "stale_document", sw_core::entities::StaleDocument);
        register!(
            schemas,
            "year_update_candidate",
            sw_core::entities::YearUpdateCandidate
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Serialize `value` and validate it against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if `value` cannot be serialized,
    /// otherwise as [`SchemaRegistry::validate`].
    pub fn validate_value<T: Serialize>(&self, name: &str, value: &T) -> Result<(), SchemaError> {
        let instance =
            serde_json::to_value(value).map_err(|e| SchemaError::Generation(e.to_string()))?;
        self.validate(name, &instance)
    }

    /// Check a report against the exported report schema.
    ///
    /// # Errors
    ///
    /// As [`SchemaRegistry::validate_value`].
    pub fn validate_report(&self, report: &Report) -> Result<(), SchemaError> {
        self.validate_value(REPORT, report)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
