//! Per-call outcomes of a fetch run.

use super::error::FetchError;
use crate::model::Resource;
use std::fmt;

/// A navigation link followed from a header record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    CompanyCodeAssignment,
    Text,
}

impl Navigation {
    /// Property name of the link on the header record.
    pub fn property(&self) -> &'static str {
        match self {
            Navigation::CompanyCodeAssignment => "to_CompanyCode",
            Navigation::Text => "to_Text",
        }
    }
}

/// One step of a fetch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// A filtered read of a resource's entity set.
    Query(Resource),
    /// A read of a link taken from the header record.
    Follow(Navigation),
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Query(resource) => write!(f, "{}", resource),
            Call::Follow(navigation) => write!(f, "Header.{}", navigation.property()),
        }
    }
}

/// What happened to one step: the number of records fetched, or the error.
#[derive(Debug)]
pub struct CallOutcome {
    pub call: Call,
    pub result: Result<usize, FetchError>,
}

impl CallOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything that happened during one `fetch_all`, in completion order.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub outcomes: Vec<CallOutcome>,
}

impl FetchReport {
    /// The outcome of `call`, if that step ran.
    pub fn outcome(&self, call: Call) -> Option<&CallOutcome> {
        self.outcomes.iter().find(|o| o.call == call)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CallOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}
