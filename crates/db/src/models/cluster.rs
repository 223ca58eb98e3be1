//! Cluster entity model.

use fleetpulse_core::fleet::ClusterInfo;
use fleetpulse_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `clusters` table.
#[derive(Debug, Clone, FromRow)]
pub struct Cluster {
    pub id: DbId,
    pub name: String,
    pub load_a_factor: f64,
    pub load_m_factor: f64,
    pub load_cpu_factor: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Cluster> for ClusterInfo {
    fn from(c: Cluster) -> Self {
        ClusterInfo {
            id: c.id,
            name: c.name,
        }
    }
}
