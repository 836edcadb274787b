//! Search Console search-analytics client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sw_config::SearchConsoleConfig;
use sw_core::DateRange;
use tracing::debug;

use crate::SearchPerformanceSource;
use crate::error::SourceError;
use crate::http::check_response;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    start_date: String,
    end_date: String,
    dimensions: [&'a str; 1],
    row_limit: u32,
    start_row: u64,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    rows: Vec<Value>,
}

/// Queries `searchAnalytics/query` with the page dimension.
pub struct SearchConsoleClient {
    http: reqwest::Client,
    query_url: String,
    access_token: String,
    row_limit: u32,
}

impl SearchConsoleClient {
    /// Build a client from the `search_console` config section.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] if the site or token is missing,
    /// or [`SourceError::Http`] if the HTTP client fails to build.
    pub fn new(config: &SearchConsoleConfig) -> Result<Self, SourceError> {
        config.require()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("sitewise/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            query_url: format!(
                "{}/sites/{}/searchAnalytics/query",
                config.endpoint.trim_end_matches('/'),
                urlencoding::encode(&config.site_url)
            ),
            access_token: config.access_token.clone(),
            row_limit: config.row_limit,
        })
    }
}

#[async_trait]
impl SearchPerformanceSource for SearchConsoleClient {
    fn name(&self) -> &str {
        "search console"
    }

    /// Pages through the range `row_limit` rows at a time until a short page.
    async fn fetch_rows(&self, range: DateRange) -> Result<Vec<Value>, SourceError> {
        let mut rows = Vec::new();
        loop {
            let request = QueryRequest {
                start_date: range.start.to_string(),
                end_date: range.end.to_string(),
                dimensions: ["page"],
                row_limit: self.row_limit,
                start_row: rows.len() as u64,
            };
            let resp = self
                .http
                .post(&self.query_url)
                .bearer_auth(&self.access_token)
                .json(&request)
                .send()
                .await?;
            let page: QueryResponse = check_response(resp).await?.json().await?;

            let received = page.rows.len();
            rows.extend(page.rows);
            debug!(received, total = rows.len(), start = %range.start, end = %range.end, "search analytics page");
            if received < self.row_limit as usize {
                break;
            }
        }
        Ok(rows)
    }
}
