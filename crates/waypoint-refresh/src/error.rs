//! Error types for the refresh service
//!
//! Exactly two failure kinds surface from a refresh: a hard not-found
//! precondition (no ticket pack, no roadmap row) and a pass-through of
//! whatever the persistence layer raised. Both are fatal to the current
//! invocation; there is no retry and no compensation for partially
//! written state.

use waypoint_domain::{RoadmapId, TenantId};
use waypoint_store::StoreError;

/// Refresh failure
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// No ticket pack exists for the tenant/roadmap pair
    #[error("no ticket pack for tenant {tenant_id} and roadmap {roadmap_id}")]
    PackNotFound {
        /// Tenant the refresh ran for
        tenant_id: TenantId,
        /// Roadmap the pack was expected to track
        roadmap_id: RoadmapId,
    },

    /// The source roadmap row does not exist
    #[error("roadmap not found: {0}")]
    RoadmapNotFound(RoadmapId),

    /// Persistence layer failure, passed through unchanged
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl RefreshError {
    /// Whether this is a missing-precondition failure rather than a
    /// backend one
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PackNotFound { .. } | Self::RoadmapNotFound(_)
        )
    }
}
