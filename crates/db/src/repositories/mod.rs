//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods.
//! They take `&mut PgConnection` rather than the pool so that a caller
//! can run several reads inside one transaction.

pub mod cluster_repo;
pub mod dashboard_repo;
pub mod meeting_repo;
pub mod node_repo;
pub mod record_set_repo;
pub mod tenant_repo;

pub use cluster_repo::ClusterRepo;
pub use dashboard_repo::{DashboardRepo, SnapshotReadError};
pub use meeting_repo::MeetingRepo;
pub use node_repo::NodeRepo;
pub use record_set_repo::RecordSetRepo;
pub use tenant_repo::TenantRepo;
