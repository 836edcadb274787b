//! Shared HTTP response helpers for collaborator clients.
//!
//! Centralizes status-code checks (401/403 → [`SourceError::Auth`], 429 rate
//! limiting with `Retry-After` parsing, non-success → [`SourceError::Api`])
//! so individual clients stay focused on request construction and response
//! mapping.

use crate::error::SourceError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 / 403** → [`SourceError::Auth`] with the response body.
/// - **429 Too Many Requests** → [`SourceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`SourceError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    let status = resp.status();
    if status == 429 {
        return Err(SourceError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 401 || status == 403 {
        return Err(SourceError::Auth {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(SourceError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response(429)).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_auth_failures() {
        for status in [401, 403] {
            let err = check_response(mock_response(status)).await.unwrap_err();
            assert!(
                matches!(err, SourceError::Auth { status: s, .. } if s == status),
                "{err}"
            );
        }
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(500)).await.unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200)).await.is_ok());
    }
}
