use async_trait::async_trait;
use member_directory_api::{AuditContext, QueryResult};
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple entities in a batch
///
/// There is no dirty checking: callers pass the full desired state of each
/// entity and implementations write it out explicitly, re-stamping the
/// modification audit columns from the given context.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait UpdateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Update multiple items
    ///
    /// # Arguments
    /// * `items` - A vector of entities carrying their full desired state
    /// * `audit` - The audit context stamped into the modified rows
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The updated entities as persisted
    /// * `Err` - An error if the statement could not be executed
    async fn update_batch(&self, items: Vec<T>, audit: &AuditContext) -> QueryResult<Vec<T>>;
}
