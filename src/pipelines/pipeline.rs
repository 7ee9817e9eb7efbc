//! Pipeline trait.
use crate::error::Error;

/// A corpus-wide operation, run once per invocation.
///
/// Generic over the value returned by a successful run,
/// so that pipelines can hand back a report.
pub trait Pipeline<T> {
    /// Version of the pipeline, logged at startup.
    fn version() -> &'static str
    where
        Self: Sized;

    fn run(&self) -> Result<T, Error>;
}
