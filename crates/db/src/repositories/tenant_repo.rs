//! Repository for tenant usage queries (`tenants` -> `secrets` -> `meetings`).

use sqlx::PgConnection;

use crate::models::tenant::TenantUsageRow;

pub struct TenantRepo;

impl TenantRepo {
    /// Total number of tenants, active or not.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tenants")
            .fetch_one(conn)
            .await
    }

    /// Tenants with at least one meeting, ranked by attendee sum.
    ///
    /// Equal sums are ordered by slug, compared bytewise. At most `limit`
    /// rows are returned.
    pub async fn top_active(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<TenantUsageRow>, sqlx::Error> {
        sqlx::query_as::<_, TenantUsageRow>(
            "SELECT t.id AS tenant_id, t.slug, \
                    COUNT(DISTINCT m.id) AS active_meetings, \
                    SUM(m.attendees) AS active_attendees \
             FROM tenants t \
             LEFT JOIN secrets s ON s.tenant_id = t.id \
             LEFT JOIN meetings m ON m.secret_id = s.id \
             GROUP BY t.id, t.slug \
             HAVING COUNT(DISTINCT m.id) > 0 \
             ORDER BY active_attendees DESC NULLS LAST, t.slug COLLATE \"C\" ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(conn)
        .await
    }
}
