//! Reads everything the fleet dashboard snapshot needs.

use fleetpulse_core::error::CoreError;
use fleetpulse_core::fleet::NodeSample;
use fleetpulse_core::snapshot::{SnapshotInput, TOP_TENANT_LIMIT};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::repositories::{ClusterRepo, MeetingRepo, NodeRepo, RecordSetRepo, TenantRepo};

/// Failure while loading the snapshot input. Either is fatal; no partial
/// input is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotReadError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Integrity(#[from] CoreError),
}

pub struct DashboardRepo;

impl DashboardRepo {
    /// Open a read-only `REPEATABLE READ` transaction so that all snapshot
    /// reads see the same point in time.
    pub async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }

    /// Run the five dashboard reads on `conn`.
    ///
    /// Outside a transaction each read sees its own snapshot of the data.
    pub async fn read_snapshot_input(
        conn: &mut PgConnection,
    ) -> Result<SnapshotInput, SnapshotReadError> {
        let clusters = ClusterRepo::list(&mut *conn).await?;

        let nodes = NodeRepo::list_with_cluster(&mut *conn)
            .await?
            .into_iter()
            .map(|row| row.into_sample())
            .collect::<Result<Vec<NodeSample>, CoreError>>()?;

        let total_tenants = TenantRepo::count(&mut *conn).await?;
        let tenant_usage = TenantRepo::top_active(&mut *conn, TOP_TENANT_LIMIT as i64)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let meetings = MeetingRepo::totals(&mut *conn).await?.into();
        let recordings_processing = RecordSetRepo::count_processing(&mut *conn).await?;

        tracing::debug!(
            clusters = clusters.len(),
            nodes = nodes.len(),
            total_tenants,
            recordings_processing,
            "Dashboard snapshot input loaded",
        );

        Ok(SnapshotInput {
            clusters: clusters.into_iter().map(Into::into).collect(),
            nodes,
            total_tenants,
            tenant_usage,
            meetings,
            recordings_processing,
        })
    }
}
