//! Directory walking and corpus-wide aggregation.

pub mod aggregate;
pub mod counter;
pub mod walker;

pub use aggregate::*;
pub use counter::Counter;
pub use walker::{FailureKind, JsonDirectory, ParseOutcome};
