//! Tenant usage model.

use fleetpulse_core::fleet::TenantUsage;
use fleetpulse_core::types::DbId;
use sqlx::FromRow;

/// Per-tenant meeting aggregate reached through `secrets`.
#[derive(Debug, Clone, FromRow)]
pub struct TenantUsageRow {
    pub tenant_id: DbId,
    pub slug: String,
    pub active_meetings: i64,
    /// `SUM` over an empty group is NULL.
    pub active_attendees: Option<i64>,
}

impl From<TenantUsageRow> for TenantUsage {
    fn from(row: TenantUsageRow) -> Self {
        TenantUsage {
            tenant_id: row.tenant_id,
            slug: row.slug,
            active_meetings: row.active_meetings,
            active_attendees: row.active_attendees.unwrap_or(0),
        }
    }
}
