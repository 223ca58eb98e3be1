pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /dashboard                                        fleet snapshot (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Fleet dashboard snapshot.
        .nest("/dashboard", dashboard::router())
}
