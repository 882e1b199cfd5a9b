use member_directory_api::QueryResult;
use member_directory_db::models::member::MemberModel;

use super::repo_impl::MemberRepositoryImpl;
use crate::utils::TryFromRow;

impl MemberRepositoryImpl {
    /// Find members with the given username whose age is strictly greater
    /// than `min_age`
    pub async fn find_by_username_and_min_age(
        &self,
        username: &str,
        min_age: i32,
    ) -> QueryResult<Vec<MemberModel>> {
        let rows = sqlx::query(r#"SELECT * FROM member WHERE username = $1 AND age > $2"#)
            .bind(username)
            .bind(min_age)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(MemberModel::try_from_row).collect()
    }
}
