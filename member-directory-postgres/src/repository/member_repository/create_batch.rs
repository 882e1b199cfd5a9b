use async_trait::async_trait;
use member_directory_api::{AuditContext, QueryResult};
use member_directory_db::models::member::MemberModel;
use member_directory_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;

use super::repo_impl::MemberRepositoryImpl;

impl MemberRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &MemberRepositoryImpl,
        items: Vec<MemberModel>,
        audit: &AuditContext,
    ) -> QueryResult<Vec<MemberModel>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // The whole batch commits or rolls back as one; dropping the
        // transaction on the error path undoes any rows already inserted
        let mut tx = repo.pool.begin().await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for mut item in items {
            // Audit columns come from the explicit context, not the caller's copy
            item.created_at = audit.at;
            item.created_by = audit.actor_id;
            item.touch(audit);

            sqlx::query(
                r#"
                INSERT INTO member (id, username, age, team_id, created_at, created_by, updated_at, updated_by)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(item.id)
            .bind(&item.username)
            .bind(item.age)
            .bind(item.team_id)
            .bind(item.created_at)
            .bind(item.created_by)
            .bind(item.updated_at)
            .bind(item.updated_by)
            .execute(&mut *tx)
            .await?;

            saved_items.push(item);
        }

        tx.commit().await?;

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, MemberModel> for MemberRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<MemberModel>,
        audit: &AuditContext,
    ) -> QueryResult<Vec<MemberModel>> {
        Self::create_batch_impl(self, items, audit).await
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
    async fn test_create_batch_stamps_audit_columns() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let actor_id = Uuid::new_v4();
        let audit = AuditContext::new(actor_id);
        let age = unique_age();

        let members = vec![
            create_test_member("member1", age, None),
            create_test_member("member2", age, None),
        ];
        let saved = member_repo.create_batch(members, &audit).await?;
        assert_eq!(saved.len(), 2);

        let loaded = member_repo.find_by_id(saved[0].id).await?.unwrap();
        assert_eq!(loaded.created_by, actor_id);
        assert_eq!(loaded.updated_by, actor_id);
        assert_eq!(loaded.username, "member1");

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_create_batch_rolls_back_on_failed_item() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let audit = AuditContext::new(Uuid::new_v4());
        let age = unique_age();
        let first = create_test_member("member1", age, None);
        let first_id = first.id;
        let mut second = create_test_member("member2", age, None);
        // Reusing the first id violates the primary key on the second insert
        second.id = first_id;

        let result = member_repo.create_batch(vec![first, second], &audit).await;
        assert!(result.is_err());

        // The whole batch rolled back, including the insert that succeeded
        assert!(member_repo.find_by_id(first_id).await?.is_none());

        Ok(())
    }
}
