//! Handler for the fleet dashboard snapshot.
//!
//! Loads the fleet collections, reduces them with
//! [`build_snapshot`] and returns the result. Nothing is cached; every
//! request recomputes from the database.

use axum::extract::State;
use axum::Json;
use fleetpulse_core::snapshot::{build_snapshot, DashboardSnapshot, SnapshotInput};
use fleetpulse_db::repositories::{DashboardRepo, SnapshotReadError};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// Returns KPI cards, the node table, the per-cluster load chart and the
/// top tenants. Any query failure, or a node whose cluster cannot be
/// resolved, fails the whole request.
pub async fn fleet_snapshot(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSnapshot>>> {
    let input = read_input(&state).await?;
    let snapshot = build_snapshot(input);

    let totals = &snapshot.totals;
    tracing::debug!(
        nodes = totals.total_nodes,
        active_nodes = totals.active_nodes,
        error_nodes = totals.error_nodes,
        meetings = totals.total_meetings,
        attendees = totals.total_attendees,
        voice = totals.total_voice,
        "Dashboard snapshot built",
    );

    Ok(Json(DataResponse { data: snapshot }))
}

async fn read_input(state: &AppState) -> Result<SnapshotInput, SnapshotReadError> {
    if state.config.dashboard_consistent_reads {
        let mut tx = DashboardRepo::begin_snapshot(&state.pool).await?;
        let input = DashboardRepo::read_snapshot_input(&mut tx).await?;
        tx.commit().await?;
        Ok(input)
    } else {
        let mut conn = state.pool.acquire().await?;
        DashboardRepo::read_snapshot_input(&mut conn).await
    }
}
