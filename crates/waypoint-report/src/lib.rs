//! Waypoint report
//!
//! The markdown surface of the pipeline: the single-line status banner at
//! the top of every section body, and the synthesized "Outcomes & Learning"
//! report comparing a baseline snapshot against the latest one.

pub mod banner;
pub mod outcomes;

pub use banner::{apply_banner, render_banner, strip_banner};
pub use outcomes::render_outcomes;
