//! Repository for the `nodes` table.

use sqlx::PgConnection;

use crate::models::node::NodeWithCluster;

pub struct NodeRepo;

impl NodeRepo {
    /// All nodes with their cluster's name and load factors, in creation
    /// order.
    pub async fn list_with_cluster(
        conn: &mut PgConnection,
    ) -> Result<Vec<NodeWithCluster>, sqlx::Error> {
        sqlx::query_as::<_, NodeWithCluster>(
            "SELECT n.id, n.cluster_id, n.slug, n.domain, n.maintenance, n.has_errors, \
                    n.attendees, n.meetings, n.cpu_load, \
                    c.name AS cluster_name, c.load_a_factor, c.load_m_factor, c.load_cpu_factor \
             FROM nodes n \
             LEFT JOIN clusters c ON c.id = n.cluster_id \
             ORDER BY n.id ASC",
        )
        .fetch_all(conn)
        .await
    }
}
