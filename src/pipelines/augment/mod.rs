//! Augmentation pipeline and its batching.
pub mod batch;
#[allow(clippy::module_inception)]
mod pipeline;

pub use batch::{Batch, OUTPUT_PREFIX};
pub use pipeline::{AugmentPipeline, DEFAULT_BATCH_SIZE, DEFAULT_EXTENSION};
