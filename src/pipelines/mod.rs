//! Pipelines.
//!
//! Various pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod augment;
pub mod check;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod summary;

pub use augment::AugmentPipeline;
pub use check::Check;
pub use pipeline::Pipeline;
pub use summary::{Report, RunSummary};
