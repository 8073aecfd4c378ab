//! # Profit Center Reads
//!
//! Reads Profit Center master data from an SAP S/4HANA OData service
//! (`API_PROFITCENTER_SRV`) and logs what comes back.
//!
//! ## Module Tour
//!
//! ### 1. The Orchestrator ([`caller`])
//! [`ProfitCenterCaller`](caller::ProfitCenterCaller) turns a set of requested
//! resources into concurrent reads, one Tokio task per resource, and waits for
//! all of them. The header read follows the header's navigation links.
//! Failures are logged and stay inside the task that hit them.
//!
//! ### 2. The Data ([`model`])
//! Lookup keys, the records the service returns, and
//! [`RequestedResourceSet`](model::RequestedResourceSet).
//!
//! ### 3. The Runtime ([`runtime`])
//! Command line / environment configuration, the input descriptor, and
//! tracing setup.
//!
//! Transport, `$filter` rendering and envelope decoding live in the
//! `odata_client` crate.
//!
//! ## Running
//!
//! ```bash
//! SAP_API_KEY=... RUST_LOG=info cargo run -- --input inputs/sdc_profit_center_sample.json
//! ```

pub mod caller;
pub mod model;
pub mod runtime;
