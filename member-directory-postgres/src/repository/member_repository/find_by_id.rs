use async_trait::async_trait;
use member_directory_api::QueryResult;
use member_directory_db::models::member::MemberModel;
use member_directory_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::MemberRepositoryImpl;
use crate::utils::TryFromRow;

impl MemberRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &MemberRepositoryImpl,
        id: Uuid,
    ) -> QueryResult<Option<MemberModel>> {
        let row = sqlx::query(r#"SELECT * FROM member WHERE id = $1"#)
            .bind(id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(MemberModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, MemberModel> for MemberRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> QueryResult<Option<MemberModel>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use member_directory_api::AuditContext;
    use member_directory_db::repository::create_batch::CreateBatch;
    use member_directory_db::repository::find_by_id::FindById;
    use uuid::Uuid;

    use super::super::test_utils::test_utils::{create_test_member, unique_age};
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let audit = AuditContext::new(Uuid::new_v4());
        let saved = member_repo
            .create_batch(vec![create_test_member("member1", unique_age(), None)], &audit)
            .await?;

        let loaded = member_repo.find_by_id(saved[0].id).await?;
        assert_eq!(loaded.as_ref().map(|m| m.username.as_str()), Some("member1"));

        let missing = member_repo.find_by_id(Uuid::new_v4()).await?;
        assert!(missing.is_none());

        Ok(())
    }
}
