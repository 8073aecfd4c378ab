//! Pure data structures: lookup keys, records returned by the service, and
//! the set of resources a run asks for.

pub mod keys;
pub mod records;
pub mod resource;

pub use keys::*;
pub use records::*;
pub use resource::*;
