//! Lecture mirroring: target enumeration and the sequential run loop.
//!
//! [`build_targets`] derives the full list of (remote URL, local path)
//! pairs from a [`crate::config::MirrorConfig`]; [`mirror_lectures`] walks
//! that list in order, skipping files already on disk, probing remote
//! availability, and streaming whatever is present. Every target yields a
//! [`FileOutcome`] in the returned [`MirrorReport`], so a run's result is
//! assertable without parsing console output.

mod error;
mod plan;
mod report;
mod runner;

pub use error::MirrorError;
pub use plan::{Target, build_targets, lecture_targets};
pub use report::{FileOutcome, MirrorReport, TargetOutcome};
pub use runner::mirror_lectures;
