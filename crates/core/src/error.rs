use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Stored data breaks a relational invariant the aggregation relies on
    /// (e.g. a node whose owning cluster cannot be resolved).
    #[error("Data integrity violation: {entity} with id {id}: {detail}")]
    Integrity {
        entity: &'static str,
        id: DbId,
        detail: String,
    },
}
