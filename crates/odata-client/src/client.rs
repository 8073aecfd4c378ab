//! # Request Clients
//!
//! [`RequestClient`] is the seam between the code that decides *what* to
//! fetch and the code that performs the network call. Production code uses
//! [`HttpRequestClient`]; tests use [`MockRequestClient`](crate::mock::MockRequestClient).
//!
//! Authentication and session headers are the client's concern: callers hand
//! over a bare [`Request`] and never see credentials.

use crate::error::ClientError;
use crate::message::{Request, Response};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;
use tracing::{debug, instrument};

/// Query parameter SAP gateways use to select the logical client.
///
/// Callers add it to entity-set queries themselves; navigation links returned
/// by the service already carry it.
pub const SAP_CLIENT_PARAM: &str = "sap-client";

/// Header carrying the API key on SAP API Business Hub sandboxes.
pub const API_KEY_HEADER: &str = "apikey";

/// Performs a single request and returns the fully-read response.
///
/// Implementations must be safe to share between concurrently running tasks.
#[async_trait]
pub trait RequestClient: Send + Sync + 'static {
    async fn send(&self, request: Request) -> Result<Response, ClientError>;
}

/// Username/password pair for HTTP basic authentication.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// Settings applied to every request sent by an [`HttpRequestClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            credentials: None,
            api_key: None,
        }
    }
}

/// [`RequestClient`] backed by `reqwest`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpRequestClient {
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

impl HttpRequestClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key)
                .map_err(|e| ClientError::InvalidConfig(format!("api key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            credentials: config.credentials,
        })
    }
}

#[async_trait]
impl RequestClient for HttpRequestClient {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: Request) -> Result<Response, ClientError> {
        // The URL is sent as given; only `request.query` is appended.
        let mut builder = self.http.request(request.method.clone(), request.url.as_str());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.username, credentials.password.as_ref());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        debug!(query = ?request.query, "Sending request");
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "Received response");

        Ok(Response::new(status, body))
    }
}
