use member_directory_api::{AuditContext, QueryResult};
use tracing::debug;

use super::repo_impl::MemberRepositoryImpl;

impl MemberRepositoryImpl {
    /// Set-based update: increment the age of every member at or above
    /// `min_age`, re-stamping the modification audit columns.
    ///
    /// Returns the number of rows changed. Callers holding loaded
    /// `MemberModel` values must reload them afterwards; nothing tracks
    /// their staleness.
    pub async fn bulk_age_plus(&self, min_age: i32, audit: &AuditContext) -> QueryResult<u64> {
        debug!(min_age, actor = %audit.actor_id, "bulk incrementing member ages");

        let result = sqlx::query(
            r#"
            UPDATE member
            SET age = age + 1, updated_at = $2, updated_by = $3
            WHERE age >= $1
            "#,
        )
        .bind(min_age)
        .bind(audit.at)
        .bind(audit.actor_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
