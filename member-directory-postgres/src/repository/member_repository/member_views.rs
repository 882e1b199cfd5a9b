use async_trait::async_trait;
use member_directory_api::QueryResult;
use member_directory_db::models::member::{MemberView, MEMBER_VIEW_SORTABLE_FIELDS};
use member_directory_db::repository::page::Page;
use member_directory_db::repository::paged_query;
use member_directory_db::repository::pagination::{PageRequest, Sort};
use member_directory_db::repository::query_executor::{ContentQueryExecutor, CountQueryExecutor};
use tracing::debug;

use super::repo_impl::MemberRepositoryImpl;
use crate::utils::{order_by_clause, TryFromRow};

/// Filter descriptor: every member, projected with its team name
pub struct AllMemberViews;

/// Decoupled count descriptor for the view listing.
///
/// The content query joins `team` only for the display column; counting
/// over the bare `member` table gives the same total without the join.
pub struct AllMembersCount;

#[async_trait]
impl ContentQueryExecutor<AllMemberViews, MemberView> for MemberRepositoryImpl {
    async fn fetch_content(
        &self,
        _filter: &AllMemberViews,
        limit: usize,
        offset: u64,
        sort: &Sort,
    ) -> QueryResult<Vec<MemberView>> {
        MEMBER_VIEW_SORTABLE_FIELDS.validate(sort)?;

        let query = format!(
            "SELECT m.id, m.username, t.name AS team_name \
             FROM member m LEFT JOIN team t ON t.id = m.team_id{} \
             LIMIT $1 OFFSET $2",
            order_by_clause(sort)
        );
        debug!(limit, offset, "fetching member view page content");

        let rows = sqlx::query(&query)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(MemberView::try_from_row).collect()
    }
}

#[async_trait]
impl CountQueryExecutor<AllMembersCount> for MemberRepositoryImpl {
    async fn count(&self, _filter: &AllMembersCount) -> QueryResult<u64> {
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM member"#)
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(total as u64)
    }
}

impl MemberRepositoryImpl {
    /// Page of member views with the team name resolved eagerly.
    ///
    /// Counts through [`AllMembersCount`] instead of deriving a count from
    /// the joined content query.
    pub async fn page_member_views(&self, request: &PageRequest) -> QueryResult<Page<MemberView>> {
        paged_query::execute_page_with_count_filter(
            self,
            self,
            &AllMemberViews,
            &AllMembersCount,
            request,
            &MEMBER_VIEW_SORTABLE_FIELDS,
        )
        .await
    }
}
