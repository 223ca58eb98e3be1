//! Node entity model.

use fleetpulse_core::error::CoreError;
use fleetpulse_core::fleet::NodeSample;
use fleetpulse_core::load::LoadFactors;
use fleetpulse_core::types::DbId;
use sqlx::FromRow;

/// A `nodes` row joined with its owning cluster's name and load factors.
///
/// The join is a LEFT JOIN so that a node whose cluster cannot be resolved
/// surfaces as NULL cluster columns instead of silently disappearing.
#[derive(Debug, Clone, FromRow)]
pub struct NodeWithCluster {
    pub id: DbId,
    pub cluster_id: DbId,
    pub slug: String,
    pub domain: String,
    pub maintenance: bool,
    pub has_errors: bool,
    pub attendees: i32,
    pub meetings: i32,
    pub cpu_load: i32,
    pub cluster_name: Option<String>,
    pub load_a_factor: Option<f64>,
    pub load_m_factor: Option<f64>,
    pub load_cpu_factor: Option<f64>,
}

impl NodeWithCluster {
    /// Convert into the aggregator's view, failing if the cluster was not
    /// resolved by the join.
    pub fn into_sample(self) -> Result<NodeSample, CoreError> {
        let (Some(cluster_name), Some(attendee), Some(meeting), Some(cpu)) = (
            self.cluster_name,
            self.load_a_factor,
            self.load_m_factor,
            self.load_cpu_factor,
        ) else {
            return Err(CoreError::Integrity {
                entity: "node",
                id: self.id,
                detail: format!("owning cluster {} could not be resolved", self.cluster_id),
            });
        };

        Ok(NodeSample {
            id: self.id,
            cluster_id: self.cluster_id,
            cluster_name,
            slug: self.slug,
            domain: self.domain,
            maintenance: self.maintenance,
            has_errors: self.has_errors,
            attendees: self.attendees,
            meetings: self.meetings,
            cpu_load: self.cpu_load,
            load_factors: LoadFactors::new(attendee, meeting, cpu),
        })
    }
}
