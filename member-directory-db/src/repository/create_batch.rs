use async_trait::async_trait;
use member_directory_api::{AuditContext, QueryResult};
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// Writes are explicit: the caller supplies an [`AuditContext`] naming the
/// acting person and the change timestamp, and implementations stamp it
/// into the entities' audit columns. There is no ambient current-user
/// provider.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, MemberModel> for MemberRepositoryImpl {
///     async fn create_batch(&self, items: Vec<MemberModel>, audit: &AuditContext) -> QueryResult<Vec<MemberModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Save multiple items
    ///
    /// # Arguments
    /// * `items` - A vector of entities to create
    /// * `audit` - The audit context stamped into the created rows
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created entities as persisted
    /// * `Err` - An error if the statement could not be executed
    async fn create_batch(&self, items: Vec<T>, audit: &AuditContext) -> QueryResult<Vec<T>>;
}
