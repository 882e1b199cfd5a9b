use async_trait::async_trait;
use member_directory_api::QueryResult;
use member_directory_db::models::member::{MemberModel, MEMBER_SORTABLE_FIELDS};
use member_directory_db::repository::page::{Page, Slice};
use member_directory_db::repository::paged_query;
use member_directory_db::repository::pagination::{PageRequest, Sort};
use member_directory_db::repository::query_executor::{ContentQueryExecutor, CountQueryExecutor};
use tracing::debug;

use super::repo_impl::MemberRepositoryImpl;
use crate::utils::{order_by_clause, TryFromRow};

/// Filter descriptor: members of exactly the given age
pub struct MembersByAge {
    pub age: i32,
}

#[async_trait]
impl ContentQueryExecutor<MembersByAge, MemberModel> for MemberRepositoryImpl {
    async fn fetch_content(
        &self,
        filter: &MembersByAge,
        limit: usize,
        offset: u64,
        sort: &Sort,
    ) -> QueryResult<Vec<MemberModel>> {
        // Validated again here so the raw SQL path can never interpolate
        // an unchecked field name
        MEMBER_SORTABLE_FIELDS.validate(sort)?;

        let query = format!(
            "SELECT * FROM member WHERE age = $1{} LIMIT $2 OFFSET $3",
            order_by_clause(sort)
        );
        debug!(age = filter.age, limit, offset, "fetching member page content");

        let rows = sqlx::query(&query)
            .bind(filter.age)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(MemberModel::try_from_row).collect()
    }
}

#[async_trait]
impl CountQueryExecutor<MembersByAge> for MemberRepositoryImpl {
    async fn count(&self, filter: &MembersByAge) -> QueryResult<u64> {
        debug!(age = filter.age, "counting members");
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM member WHERE age = $1"#)
            .bind(filter.age)
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(total as u64)
    }
}

impl MemberRepositoryImpl {
    /// Page of members with the given age; one content query plus one
    /// count query
    pub async fn page_by_age(&self, age: i32, request: &PageRequest) -> QueryResult<Page<MemberModel>> {
        paged_query::execute_page(
            self,
            self,
            &MembersByAge { age },
            request,
            &MEMBER_SORTABLE_FIELDS,
        )
        .await
    }

    /// Slice of members with the given age; no count query, suited to
    /// infinite-scroll style listings
    pub async fn slice_by_age(&self, age: i32, request: &PageRequest) -> QueryResult<Slice<MemberModel>> {
        paged_query::execute_slice(self, &MembersByAge { age }, request, &MEMBER_SORTABLE_FIELDS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use member_directory_api::{AuditContext, QueryError};
    use member_directory_db::repository::create_batch::CreateBatch;
    use member_directory_db::repository::pagination::{PageRequest, Sort};
    use uuid::Uuid;

    use super::super::test_utils::test_utils::{create_test_member, unique_age};
    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_page_by_age_username_desc() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let audit = AuditContext::new(Uuid::new_v4());
        let age = unique_age();
        let members = (1..=5)
            .map(|i| create_test_member(&format!("member{i}"), age, None))
            .collect();
        member_repo.create_batch(members, &audit).await?;

        let request = PageRequest::of(0, 3)?.with_sort(Sort::desc("username"));
        let page = member_repo.page_by_age(age, &request).await?;

        let usernames: Vec<&str> = page.content.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(usernames, vec!["member5", "member4", "member3"]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_next());
        assert!(page.is_first());

        let request = PageRequest::of(1, 3)?.with_sort(Sort::desc("username"));
        let page = member_repo.page_by_age(age, &request).await?;
        let usernames: Vec<&str> = page.content.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(usernames, vec!["member2", "member1"]);
        assert!(!page.has_next());

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_slice_by_age_over_fetches_one_row() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let audit = AuditContext::new(Uuid::new_v4());
        let age = unique_age();
        let members = (1..=5)
            .map(|i| create_test_member(&format!("member{i}"), age, None))
            .collect();
        member_repo.create_batch(members, &audit).await?;

        let request = PageRequest::of(0, 3)?.with_sort(Sort::asc("username"));
        let slice = member_repo.slice_by_age(age, &request).await?;
        assert_eq!(slice.content.len(), 3);
        assert!(slice.has_next);

        let request = PageRequest::of(1, 3)?.with_sort(Sort::asc("username"));
        let slice = member_repo.slice_by_age(age, &request).await?;
        assert_eq!(slice.content.len(), 2);
        assert!(!slice.has_next);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_unknown_sort_field_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let member_repo = &ctx.repos.member_repository;

        let request = PageRequest::of(0, 3)?.with_sort(Sort::asc("nonexistentColumn"));
        let err = member_repo.page_by_age(unique_age(), &request).await.unwrap_err();
        assert!(matches!(err, QueryError::InvalidSortField(_)));

        Ok(())
    }
}
