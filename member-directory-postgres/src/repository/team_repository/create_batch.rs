use async_trait::async_trait;
use member_directory_api::{AuditContext, QueryResult};
use member_directory_db::models::team::TeamModel;
use member_directory_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;

use super::repo_impl::TeamRepositoryImpl;

impl TeamRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &TeamRepositoryImpl,
        items: Vec<TeamModel>,
        audit: &AuditContext,
    ) -> QueryResult<Vec<TeamModel>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // One transaction for the whole batch; a failed item rolls back the rest
        let mut tx = repo.pool.begin().await?;

        let mut saved_items = Vec::with_capacity(items.len());
        for mut item in items {
            item.created_at = audit.at;
            item.created_by = audit.actor_id;
            item.updated_at = audit.at;
            item.updated_by = audit.actor_id;

            sqlx::query(
                r#"
                INSERT INTO team (id, name, created_at, created_by, updated_at, updated_by)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.id)
            .bind(&item.name)
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
impl CreateBatch<Postgres, TeamModel> for TeamRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<TeamModel>,
        audit: &AuditContext,
    ) -> QueryResult<Vec<TeamModel>> {
        Self::create_batch_impl(self, items, audit).await
    }
}
