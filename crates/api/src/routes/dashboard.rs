//! Route definitions for the fleet dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/dashboard`.
///
/// ```text
/// GET  /   -> fleet_snapshot
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::fleet_snapshot))
}
