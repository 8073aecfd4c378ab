//! Runtime setup for a single invocation.
//!
//! - [`Config`] - command line / environment settings
//! - [`read_descriptor`] - the JSON file naming the profit center to read
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod input;
pub mod logging;

pub use config::*;
pub use input::*;
pub use logging::*;
