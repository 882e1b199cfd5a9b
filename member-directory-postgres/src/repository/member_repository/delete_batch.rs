use async_trait::async_trait;
use member_directory_api::QueryResult;
use member_directory_db::models::member::MemberModel;
use member_directory_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::MemberRepositoryImpl;

impl MemberRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &MemberRepositoryImpl,
        ids: &[Uuid],
    ) -> QueryResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(r#"DELETE FROM member WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl DeleteBatch<Postgres, MemberModel> for MemberRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> QueryResult<u64> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use member_directory_api::AuditContext;
    use member_directory_db::repository::create_batch::CreateBatch;
    use member_directory_db::repository::delete_batch::DeleteBatch;
    use member_directory_db::repository::find_by_id::FindById;
    use uuid::Uuid;

    use super::super::test_utils::test_utils::{create_test_member, unique_age};
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_delete_batch_reports_affected_rows() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let audit = AuditContext::new(Uuid::new_v4());
        let age = unique_age();
        let saved = member_repo
            .create_batch(
                vec![
                    create_test_member("member1", age, None),
                    create_test_member("member2", age, None),
                ],
                &audit,
            )
            .await?;

        let ids: Vec<Uuid> = saved.iter().map(|m| m.id).collect();
        let deleted = member_repo.delete_batch(&ids).await?;
        assert_eq!(deleted, 2);

        assert!(member_repo.find_by_id(ids[0]).await?.is_none());

        // Deleting already-removed rows affects nothing
        let deleted = member_repo.delete_batch(&ids).await?;
        assert_eq!(deleted, 0);

        Ok(())
    }
}
