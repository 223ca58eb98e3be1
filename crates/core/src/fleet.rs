//! Read-only views of the fleet entities consumed by the dashboard.
//!
//! The `db` crate maps query rows into these values. Nothing here is
//! ever written back.

use crate::load::LoadFactors;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Clusters and nodes
// ---------------------------------------------------------------------------

/// A cluster as seen by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterInfo {
    pub id: DbId,
    /// Display name. Unique across clusters, but grouping uses `id`.
    pub name: String,
}

/// A node with its owning cluster already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSample {
    pub id: DbId,
    pub cluster_id: DbId,
    /// Owning cluster's name, resolved together with the node.
    pub cluster_name: String,
    pub slug: String,
    pub domain: String,
    pub maintenance: bool,
    pub has_errors: bool,
    pub attendees: i32,
    pub meetings: i32,
    pub cpu_load: i32,
    /// Load weights of the owning cluster.
    pub load_factors: LoadFactors,
}

impl NodeSample {
    /// Computed load, derived from the node's counters and its cluster's
    /// weights on every call.
    pub fn load(&self) -> f64 {
        self.load_factors
            .weigh(self.attendees, self.meetings, self.cpu_load)
    }

    /// Display status, resolved by [`NodeStatus::resolve`].
    pub fn status(&self) -> NodeStatus {
        NodeStatus::resolve(self.maintenance, self.has_errors)
    }

    /// Neither in maintenance nor reporting errors.
    pub fn is_active(&self) -> bool {
        !self.maintenance && !self.has_errors
    }
}

/// Display status of a node in the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Maintenance,
    Error,
    Online,
}

impl NodeStatus {
    /// Maintenance wins over errors; a node with neither flag is online.
    pub fn resolve(maintenance: bool, has_errors: bool) -> Self {
        if maintenance {
            NodeStatus::Maintenance
        } else if has_errors {
            NodeStatus::Error
        } else {
            NodeStatus::Online
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NodeStatus::Maintenance => "Maintenance",
            NodeStatus::Error => "Error",
            NodeStatus::Online => "Online",
        }
    }

    /// Colour tag understood by the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            NodeStatus::Maintenance => "orange",
            NodeStatus::Error => "red",
            NodeStatus::Online => "green",
        }
    }
}

// ---------------------------------------------------------------------------
// Tenants and meetings
// ---------------------------------------------------------------------------

/// Per-tenant usage reached through the tenant's secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantUsage {
    pub tenant_id: DbId,
    pub slug: String,
    /// Distinct meetings across all of the tenant's secrets.
    pub active_meetings: i64,
    /// Attendee sum over those meetings; 0 when there are none.
    pub active_attendees: i64,
}

/// Fleet-wide meeting aggregate. Sums are already coalesced to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeetingTotals {
    pub meetings: i64,
    pub attendees: i64,
    pub videos: i64,
    pub voice: i64,
}
