use async_trait::async_trait;
use member_directory_api::QueryResult;
use member_directory_db::models::team::TeamModel;
use member_directory_db::repository::find_by_id::FindById;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::TeamRepositoryImpl;
use crate::utils::TryFromRow;

impl TeamRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &TeamRepositoryImpl,
        id: Uuid,
    ) -> QueryResult<Option<TeamModel>> {
        let row = sqlx::query(r#"SELECT * FROM team WHERE id = $1"#)
            .bind(id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(TeamModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, TeamModel> for TeamRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> QueryResult<Option<TeamModel>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use member_directory_api::AuditContext;
    use member_directory_db::models::team::TeamModel;
    use member_directory_db::repository::create_batch::CreateBatch;
    use member_directory_db::repository::find_by_id::FindById;
    use serial_test::serial;
    use uuid::Uuid;

    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_create_and_find_team() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let team_repo = &ctx.repos.team_repository;

        let audit = AuditContext::new(Uuid::new_v4());
        let name = format!("team-{}", Uuid::new_v4());
        let saved = team_repo
            .create_batch(vec![TeamModel::new(&name, &audit)], &audit)
            .await?;

        let loaded = team_repo.find_by_id(saved[0].id).await?;
        assert_eq!(loaded.map(|t| t.name), Some(name));

        Ok(())
    }
}
