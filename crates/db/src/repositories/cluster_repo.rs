//! Repository for the `clusters` table.

use sqlx::PgConnection;

use crate::models::cluster::Cluster;

/// Column list for `clusters` queries.
const COLUMNS: &str =
    "id, name, load_a_factor, load_m_factor, load_cpu_factor, created_at, updated_at";

pub struct ClusterRepo;

impl ClusterRepo {
    /// All clusters, in creation order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Cluster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clusters ORDER BY id ASC");
        sqlx::query_as::<_, Cluster>(&query).fetch_all(conn).await
    }
}
