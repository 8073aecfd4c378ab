//! # Request & Response
//!
//! Plain values exchanged with a [`RequestClient`](crate::RequestClient).
//! A [`Request`] carries everything needed to perform one call; a
//! [`Response`] carries the status and the fully-read body.

use crate::query::{Filter, FILTER_PARAM};
use std::collections::BTreeMap;

pub use reqwest::Method;

/// A single outgoing call.
///
/// Query parameters are kept in a sorted map so the rendered query string is
/// stable, which keeps logs and test assertions deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub query: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl Request {
    /// A GET with no query parameters, used for navigation links.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    /// Adds (or replaces) a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets the `$filter` parameter.
    pub fn with_filter(self, filter: &Filter) -> Self {
        self.with_query(FILTER_PARAM, filter.to_string())
    }

    /// Returns the `$filter` parameter, if any.
    pub fn filter(&self) -> Option<&str> {
        self.query.get(FILTER_PARAM).map(String::as_str)
    }
}

/// The outcome of a call that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded. Used for error details.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
