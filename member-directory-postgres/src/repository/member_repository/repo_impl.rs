use std::sync::Arc;

use member_directory_api::QueryResult;
use member_directory_db::models::member::{MemberModel, MemberView};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::utils::TryFromRow;

pub struct MemberRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl MemberRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for MemberModel {
    fn try_from_row(row: &PgRow) -> QueryResult<Self> {
        Ok(MemberModel {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            age: row.try_get("age")?,
            team_id: row.try_get("team_id")?,
            created_at: row.try_get("created_at")?,
            created_by: row.try_get("created_by")?,
            updated_at: row.try_get("updated_at")?,
            updated_by: row.try_get("updated_by")?,
        })
    }
}

impl TryFromRow<PgRow> for MemberView {
    fn try_from_row(row: &PgRow) -> QueryResult<Self> {
        Ok(MemberView {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            team_name: row.try_get("team_name")?,
        })
    }
}
