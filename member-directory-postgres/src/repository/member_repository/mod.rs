pub mod repo_impl;

pub mod create_batch;
pub mod update_batch;
pub mod delete_batch;
pub mod find_by_id;
pub mod find_by_username;
pub mod find_by_username_and_min_age;
pub mod page_by_age;
pub mod member_views;
pub mod bulk_age_plus;

#[cfg(test)]
pub mod test_utils;

pub use member_views::{AllMemberViews, AllMembersCount};
pub use page_by_age::MembersByAge;
pub use repo_impl::MemberRepositoryImpl;
