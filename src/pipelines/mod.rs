//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! and the [Deutschkurs] pipeline which drives a whole run.
mod deutschkurs;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use deutschkurs::{Deutschkurs, RunReport};
pub use pipeline::Pipeline;
