//! Error types for profit center fetches.

use odata_client::{ClientError, ParseError};
use thiserror::Error;

/// Errors that can end a single fetch.
///
/// `Transport` and `Status` mean the service could not be read; `Parse` means
/// it answered with something that is not the expected record shape.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("API request error: {0}")]
    Transport(#[from] ClientError),

    /// The service answered with a non-success status.
    #[error("API request error: status {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response body did not decode into the expected records.
    #[error("convert error: {0}")]
    Parse(#[from] ParseError),

    /// The header query matched no profit center.
    #[error("no header record for controlling area {controlling_area}, profit center {profit_center}")]
    EmptyHeader {
        controlling_area: String,
        profit_center: String,
    },

    /// The header record carries no link to follow.
    #[error("header record has no {0} link")]
    MissingNavigation(&'static str),
}
