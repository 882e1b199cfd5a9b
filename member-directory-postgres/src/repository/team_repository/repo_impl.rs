use std::sync::Arc;

use member_directory_api::QueryResult;
use member_directory_db::models::team::TeamModel;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::utils::TryFromRow;

pub struct TeamRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl TeamRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for TeamModel {
    fn try_from_row(row: &PgRow) -> QueryResult<Self> {
        Ok(TeamModel {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
            created_by: row.try_get("created_by")?,
            updated_at: row.try_get("updated_at")?,
            updated_by: row.try_get("updated_by")?,
        })
    }
}
