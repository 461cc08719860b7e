//! Shared Financial Modeling Prep API client.
//!
//! One `reqwest::Client` is built at startup and shared (via `Arc`) by every
//! tool invocation, so concurrent calls reuse pooled connections. The single
//! non-trivial behavior lives here: `fetch` wraps an HTTP GET in a fixed-delay
//! retry loop and converts terminal failures into a soft error value instead
//! of propagating them.

use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::error::Result;

/// Base address of the Financial Modeling Prep REST API.
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Fixed delay between retry attempts. Constant: no backoff, no jitter.
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Client-wide request timeout, applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the FMP API.
///
/// Holds the API key and base address; cheap to share and safe for concurrent
/// use. Lives for the process lifetime with no explicit teardown.
#[derive(Debug, Clone)]
pub struct FmpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FmpClient {
    /// Retry count used by all tools: up to `DEFAULT_RETRIES + 1` attempts.
    pub const DEFAULT_RETRIES: u32 = 2;

    /// Create a client against the production FMP API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, FMP_BASE_URL)
    }

    /// Create a client against an alternate base address.
    ///
    /// Used by tests to point the client at a mock upstream.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Build the full request URL for an endpoint.
    ///
    /// The endpoint may already carry its own query string; the API key is
    /// appended with `&` in that case and `?` otherwise.
    fn url_for(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}/{}{}apikey={}",
            self.base_url, endpoint, separator, self.api_key
        )
    }

    /// Fetch an endpoint, retrying on any HTTP-level failure.
    ///
    /// Performs up to `retries + 1` GET attempts with a fixed delay between
    /// them. Network errors, non-2xx statuses, and body decode failures all
    /// count as transient. The terminal failure is returned as
    /// `{"error": <message>}` rather than an `Err` - callers branch on the
    /// `error` key, and the host dispatcher never sees a hard failure.
    ///
    /// On success the parsed JSON body is returned verbatim, with no schema
    /// validation.
    pub async fn fetch(&self, endpoint: &str, retries: u32) -> Value {
        let url = self.url_for(endpoint);
        let mut attempt = 0;

        loop {
            match self.try_get(&url).await {
                Ok(body) => {
                    debug!(endpoint, attempt = attempt + 1, "FMP request succeeded");
                    return body;
                }
                Err(e) if attempt < retries => {
                    warn!(
                        endpoint,
                        attempt = attempt + 1,
                        error = %e,
                        "FMP request failed, retrying"
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(endpoint, error = %e, "FMP request failed, returning error value");
                    return json!({ "error": e.to_string() });
                }
            }
        }
    }

    /// One GET attempt: send, check status, parse JSON.
    async fn try_get(&self, url: &str) -> std::result::Result<Value, reqwest::Error> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        response.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> FmpClient {
        FmpClient::with_base_url("test-key", base_url).unwrap()
    }

    #[test]
    fn test_url_without_query_gets_question_mark() {
        let client = test_client("https://example.com/api/v3");
        let url = client.url_for("profile/AAPL");
        assert_eq!(url, "https://example.com/api/v3/profile/AAPL?apikey=test-key");
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn test_url_with_query_gets_ampersand() {
        let client = test_client("https://example.com/api/v3");
        let url = client.url_for("income-statement/AAPL?period=annual&limit=4");
        assert_eq!(
            url,
            "https://example.com/api/v3/income-statement/AAPL?period=annual&limit=4&apikey=test-key"
        );
        // Existing parameters survive; the key is appended, not substituted.
        assert!(url.contains("period=annual"));
        assert!(url.contains("limit=4"));
        assert_eq!(url.matches("apikey").count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_success_passes_body_through() {
        let server = MockServer::start().await;
        let payload = serde_json::json!([{ "symbol": "AAPL", "companyName": "Apple Inc." }]);

        Mock::given(method("GET"))
            .and(path("/profile/AAPL"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.fetch("profile/AAPL", 0).await;
        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn test_fetch_recovers_within_retry_budget() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({ "ok": true });

        // First two attempts fail, third succeeds.
        Mock::given(method("GET"))
            .and(path("/ratios/MSFT"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ratios/MSFT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.fetch("ratios/MSFT", 2).await;
        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn test_fetch_exhausted_returns_soft_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ratios/MSFT"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.fetch("ratios/MSFT", 2).await;

        let message = result
            .get("error")
            .and_then(|v| v.as_str())
            .expect("expected an error value");
        assert!(!message.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_network_failure_returns_soft_error() {
        // Nothing listens here; every attempt is a connection error.
        let client = test_client("http://127.0.0.1:1");
        let result = client.fetch("profile/AAPL", 0).await;
        assert!(result.get("error").is_some());
    }

    #[tokio::test]
    async fn test_retry_delay_is_constant() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let start = Instant::now();
        let result = client.fetch("profile/AAPL", 2).await;
        let elapsed = start.elapsed();

        assert!(result.get("error").is_some());
        // Two inter-attempt waits of RETRY_DELAY each; an exponential policy
        // (1s + 2s) would push past three seconds.
        assert!(elapsed >= RETRY_DELAY * 2, "delay not honored: {:?}", elapsed);
        assert!(elapsed < RETRY_DELAY * 3, "delay grew between attempts: {:?}", elapsed);
    }
}
