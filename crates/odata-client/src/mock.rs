//! # Mock Request Client
//!
//! [`MockRequestClient`] implements [`RequestClient`] entirely in memory so
//! code built on top of a client can be tested without a server.
//!
//! Expectations are matched by method, URL and (optionally) `$filter`, not by
//! arrival order, because callers are free to issue requests concurrently.
//! Every received request is recorded for later assertions.
//!
//! ```rust
//! use odata_client::mock::MockRequestClient;
//! use odata_client::{Request, RequestClient};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockRequestClient::new();
//! mock.expect_get("http://host/A_ProfitCenter")
//!     .with_filter("ProfitCenter eq 'YB200'")
//!     .return_body(200, r#"{"d":{"results":[]}}"#);
//!
//! let request = Request::get("http://host/A_ProfitCenter")
//!     .with_query("$filter", "ProfitCenter eq 'YB200'");
//! let response = mock.send(request).await.unwrap();
//! assert!(response.is_success());
//!
//! mock.verify();
//! # }
//! ```

use crate::client::RequestClient;
use crate::error::ClientError;
use crate::message::{Method, Request, Response};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

enum Reply {
    Ok(Response),
    Err(String),
}

struct Expectation {
    method: Method,
    url: String,
    filter: Option<String>,
    reply: Reply,
}

impl Expectation {
    fn matches(&self, request: &Request) -> bool {
        self.method == request.method
            && self.url == request.url
            && self
                .filter
                .as_deref()
                .map_or(true, |filter| request.filter() == Some(filter))
    }
}

#[derive(Default)]
struct State {
    expectations: Vec<Expectation>,
    received: Vec<Request>,
    unexpected: Vec<Request>,
}

/// An in-memory [`RequestClient`] with expectation tracking.
///
/// Clones share state, so a clone can be handed to the code under test while
/// the original is kept for [`verify`](Self::verify).
#[derive(Clone, Default)]
pub struct MockRequestClient {
    state: Arc<Mutex<State>>,
}

impl MockRequestClient {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle sharing this mock's expectations.
    pub fn client(&self) -> MockRequestClient {
        self.clone()
    }

    /// Expects a GET to `url`.
    pub fn expect_get(&self, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method: Method::GET,
            url: url.into(),
            filter: None,
            state: self.state.clone(),
        }
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().received.clone()
    }

    /// Number of requests received for `url`.
    pub fn request_count(&self, url: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .received
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests received: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<_> = state.expectations.iter().map(|e| &e.url).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }
}

#[async_trait]
impl RequestClient for MockRequestClient {
    async fn send(&self, request: Request) -> Result<Response, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.received.push(request.clone());

        let position = state.expectations.iter().position(|e| e.matches(&request));
        match position {
            Some(index) => match state.expectations.remove(index).reply {
                Reply::Ok(response) => Ok(response),
                Reply::Err(message) => Err(ClientError::transport(message)),
            },
            None => {
                let message = format!("unexpected request: {} {}", request.method, request.url);
                state.unexpected.push(request);
                Err(ClientError::transport(message))
            }
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    filter: Option<String>,
    state: Arc<Mutex<State>>,
}

impl ExpectationBuilder {
    /// Only match requests carrying exactly this `$filter`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Replies with the given response.
    pub fn return_ok(self, response: Response) {
        self.push(Reply::Ok(response));
    }

    /// Replies with a status and a textual body.
    pub fn return_body(self, status: u16, body: &str) {
        self.push(Reply::Ok(Response::new(status, body.as_bytes())));
    }

    /// Replies `200 OK` with the given JSON document.
    pub fn return_json(self, body: serde_json::Value) {
        self.push(Reply::Ok(Response::new(200, body.to_string())));
    }

    /// Fails the request with a transport error.
    pub fn return_err(self, message: impl Into<String>) {
        self.push(Reply::Err(message.into()));
    }

    fn push(self, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push(Expectation {
            method: self.method,
            url: self.url,
            filter: self.filter,
            reply,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_matches_by_url_and_filter() {
        let mock = MockRequestClient::new();
        mock.expect_get("http://host/B").return_body(500, "boom");
        mock.expect_get("http://host/A")
            .with_filter("X eq '1'")
            .return_json(json!({"d": {"results": []}}));

        let client = mock.client();
        let a = client
            .send(Request::get("http://host/A").with_query("$filter", "X eq '1'"))
            .await
            .unwrap();
        assert_eq!(a.status, 200);

        let b = client.send(Request::get("http://host/B")).await.unwrap();
        assert!(!b.is_success());
        assert_eq!(b.text(), "boom");

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_returns_transport_error() {
        let mock = MockRequestClient::new();
        mock.expect_get("http://host/A").return_err("connection refused");

        let result = mock.send(Request::get("http://host/A")).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn test_mock_rejects_unexpected_request() {
        let mock = MockRequestClient::new();
        let result = mock.send(Request::get("http://host/Nope")).await;
        assert!(result.is_err());
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_mock_reports_unmet_expectations() {
        let mock = MockRequestClient::new();
        mock.expect_get("http://host/A").return_body(200, "{}");
        mock.verify();
    }
}
