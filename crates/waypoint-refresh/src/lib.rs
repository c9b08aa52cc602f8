//! Waypoint refresh
//!
//! The versioner at the center of the pipeline. A refresh:
//! 1. Loads a roadmap's sections and its ticket pack
//! 2. Aggregates ticket completion per system
//! 3. Inserts a new roadmap row under a bumped version tag
//! 4. Re-projects every section's status and copies it across
//! 5. Appends an outcomes section when enough measurements exist
//! 6. Records an audit event for tenants with an agent configuration
//!
//! Collaborators are injected as store traits; see [`service::RefreshService`].

pub mod config;
pub mod error;
pub mod service;

pub use config::RefreshConfig;
pub use error::RefreshError;
pub use service::{RefreshOutcome, RefreshService};
