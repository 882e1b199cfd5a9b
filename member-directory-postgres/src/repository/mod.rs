pub mod member_repository;
pub mod team_repository;
