use async_trait::async_trait;
use member_directory_api::QueryResult;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for deleting multiple entities by their IDs
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait DeleteBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Delete multiple entities by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the entities to delete
    ///
    /// # Returns
    /// * `Ok(u64)` - The number of rows actually deleted
    /// * `Err` - An error if the statement could not be executed
    async fn delete_batch(&self, ids: &[Uuid]) -> QueryResult<u64>;
}
