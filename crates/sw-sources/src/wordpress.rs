//! WordPress REST API content client.
//!
//! Walks `/wp-json/wp/v2/posts?status=publish` page by page with basic
//! auth (an application password). Pagination ends on an empty or short
//! page, on the last page announced by `X-WP-TotalPages`, or when WordPress
//! answers 400 `rest_post_invalid_page_number` for a page past the end.

use std::time::Duration;

use async_trait::async_trait;
use scraper::Html;
use serde_json::Value;
use sw_config::WordPressConfig;
use tracing::debug;

use crate::ContentSource;
use crate::error::SourceError;
use crate::http::check_response;

const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";
const PAST_LAST_PAGE: &str = "rest_post_invalid_page_number";

/// Fetches every published post.
pub struct WordPressClient {
    http: reqwest::Client,
    posts_url: String,
    username: String,
    app_password: String,
    per_page: u32,
    request_delay: Duration,
}

enum Page {
    Posts { posts: Vec<Value>, total_pages: Option<u32> },
    PastEnd,
}

impl WordPressClient {
    /// Build a client from the `wordpress` config section.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotConfigured`] if the site or credentials are
    /// missing, or [`SourceError::Http`] if the HTTP client fails to build.
    pub fn new(config: &WordPressConfig) -> Result<Self, SourceError> {
        config.require()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("sitewise/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            posts_url: format!(
                "{}/wp-json/wp/v2/posts",
                config.base_url.trim_end_matches('/')
            ),
            username: config.username.clone(),
            app_password: config.app_password.clone(),
            per_page: config.per_page,
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    async fn fetch_page(&self, page: u32) -> Result<Page, SourceError> {
        let url = format!(
            "{}?per_page={}&page={page}&status=publish",
            self.posts_url, self.per_page
        );
        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.app_password))
            .send()
            .await?;

        if resp.status() == 400 {
            let body = resp.text().await.unwrap_or_default();
            if body.contains(PAST_LAST_PAGE) {
                return Ok(Page::PastEnd);
            }
            return Err(SourceError::Api {
                status: 400,
                message: body,
            });
        }

        let resp = check_response(resp).await?;
        let total_pages = resp
            .headers()
            .get(TOTAL_PAGES_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let posts = match resp.json::<Value>().await? {
            Value::Array(posts) => posts,
            other => {
                return Err(SourceError::Parse(format!(
                    "expected a list of posts, got {}",
                    kind_of(&other)
                )));
            }
        };
        Ok(Page::Posts { posts, total_pages })
    }
}

#[async_trait]
impl ContentSource for WordPressClient {
    fn name(&self) -> &str {
        "wordpress"
    }

    async fn fetch_documents(&self) -> Result<Vec<Value>, SourceError> {
        let mut documents = Vec::new();
        let mut page = 1;
        loop {
            let Page::Posts { posts, total_pages } = self.fetch_page(page).await? else {
                debug!(page, "past the last page");
                break;
            };
            let received = posts.len();
            documents.extend(posts.into_iter().map(decode_title));
            debug!(page, received, total = documents.len(), "fetched posts");

            let last_page = total_pages.is_some_and(|total| page >= total);
            if received == 0 || received < self.per_page as usize || last_page {
                break;
            }
            page += 1;
            tokio::time::sleep(self.request_delay).await;
        }
        Ok(documents)
    }
}

/// Replace the rendered HTML title with its plain text.
fn decode_title(mut post: Value) -> Value {
    if let Some(rendered) = post.pointer_mut("/title/rendered") {
        if let Some(text) = rendered.as_str().map(html_to_text) {
            *rendered = Value::String(text);
        }
    }
    post
}

/// Strip tags and decode entities.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
