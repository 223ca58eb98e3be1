//! Repository for the `record_sets` table.

use sqlx::PgConnection;

use crate::models::status::{RecordSetStatus, StatusId};

pub struct RecordSetRepo;

impl RecordSetRepo {
    /// Number of recordings still being processed (uploaded or rendered).
    pub async fn count_processing(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let ids: Vec<StatusId> = RecordSetStatus::PROCESSING.iter().map(|s| s.id()).collect();
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM record_sets WHERE status_id = ANY($1)")
            .bind(ids)
            .fetch_one(conn)
            .await
    }
}
