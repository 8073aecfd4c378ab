//! # OData Client
//!
//! Building blocks for reading entity sets from an OData v2 service.
//!
//! The crate separates three concerns so that code *using* a service can be
//! written and tested without the network:
//!
//! 1. **Transport** ([`RequestClient`]) - performs one call and hands back the
//!    status and body. [`HttpRequestClient`] does it over `reqwest`;
//!    [`mock::MockRequestClient`] does it in memory.
//! 2. **Query** ([`Filter`]) - renders `$filter` expressions such as
//!    `ControllingArea eq '1000' and ProfitCenter eq 'YB200'`.
//! 3. **Decoding** ([`parse_results`]) - unwraps the `{"d": {"results": [...]}}`
//!    envelope into typed records.
//!
//! ## Example
//!
//! ```rust
//! use odata_client::{parse_results, Filter, Request};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Row { profit_center: String }
//!
//! let filter = Filter::eq("ControllingArea", "1000").and_eq("ProfitCenter", "YB200");
//! let request = Request::get("https://host/API_PROFITCENTER_SRV/A_ProfitCenter")
//!     .with_filter(&filter);
//! assert_eq!(
//!     request.filter(),
//!     Some("ControllingArea eq '1000' and ProfitCenter eq 'YB200'")
//! );
//!
//! let rows: Vec<Row> = parse_results(br#"{"d":{"results":[{"ProfitCenter":"YB200"}]}}"#).unwrap();
//! assert_eq!(rows[0].profit_center, "YB200");
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;

// Re-export core types for convenience
pub use client::{ClientConfig, Credentials, HttpRequestClient, RequestClient, SAP_CLIENT_PARAM};
pub use envelope::{error_detail, parse_results};
pub use error::{ClientError, ParseError};
pub use message::{Method, Request, Response};
pub use query::{Filter, FILTER_PARAM};
