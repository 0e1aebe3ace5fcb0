use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A partial update named none of the record's mutable fields.
    #[error("No updatable fields supplied")]
    NoUpdatableFields,

    /// A persisted row could not be turned back into a valid record.
    #[error("Corrupt row: {0}")]
    Deserialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
