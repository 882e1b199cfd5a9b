use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::member_repository::MemberRepositoryImpl;
use crate::repository::team_repository::TeamRepositoryImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create all repositories sharing the connection pool
    pub fn create_repositories(&self) -> DirectoryRepositories {
        DirectoryRepositories {
            member_repository: Arc::new(MemberRepositoryImpl::new(self.pool.clone())),
            team_repository: Arc::new(TeamRepositoryImpl::new(self.pool.clone())),
        }
    }
}

pub struct DirectoryRepositories {
    pub member_repository: Arc<MemberRepositoryImpl>,
    pub team_repository: Arc<TeamRepositoryImpl>,
}
