use member_directory_api::QueryResult;
use member_directory_db::models::member::MemberModel;

use super::repo_impl::MemberRepositoryImpl;
use crate::utils::TryFromRow;

impl MemberRepositoryImpl {
    /// Find all members with the given username
    pub async fn find_by_username(&self, username: &str) -> QueryResult<Vec<MemberModel>> {
        let rows = sqlx::query(r#"SELECT * FROM member WHERE username = $1"#)
            .bind(username)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(MemberModel::try_from_row).collect()
    }
}
