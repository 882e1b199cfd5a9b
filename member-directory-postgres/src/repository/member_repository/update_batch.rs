use async_trait::async_trait;
use member_directory_api::{AuditContext, QueryResult};
use member_directory_db::models::member::MemberModel;
use member_directory_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;

use super::repo_impl::MemberRepositoryImpl;

impl MemberRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &MemberRepositoryImpl,
        items: Vec<MemberModel>,
        audit: &AuditContext,
    ) -> QueryResult<Vec<MemberModel>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // One transaction for the whole batch; a failed item rolls back the rest
        let mut tx = repo.pool.begin().await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for mut item in items {
            item.touch(audit);

            sqlx::query(
                r#"
                UPDATE member
                SET username = $2, age = $3, team_id = $4, updated_at = $5, updated_by = $6
                WHERE id = $1
                "#,
            )
            .bind(item.id)
            .bind(&item.username)
            .bind(item.age)
            .bind(item.team_id)
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
impl UpdateBatch<Postgres, MemberModel> for MemberRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<MemberModel>,
        audit: &AuditContext,
    ) -> QueryResult<Vec<MemberModel>> {
        Self::update_batch_impl(self, items, audit).await
    }
}
