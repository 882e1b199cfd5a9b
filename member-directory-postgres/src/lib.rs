pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::member_repository::MemberRepositoryImpl;
pub use repository::team_repository::TeamRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
