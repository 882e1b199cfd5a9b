use async_trait::async_trait;
use member_directory_api::QueryResult;

use crate::repository::pagination::Sort;

/// Contract for executing a bounded, ordered content query.
///
/// `F` is an opaque filter descriptor owned by the storage layer — this
/// component never constructs queries against a concrete schema itself.
/// Implementations apply the sort keys in sequence to their ORDER BY
/// equivalent and fail with `InvalidSortField` on keys the store does not
/// recognize, or `Storage` on connectivity/query failure.
///
/// # Type Parameters
/// * `F` - The filter descriptor type understood by the storage layer
/// * `T` - The item type produced by the query
#[async_trait]
pub trait ContentQueryExecutor<F, T>: Send + Sync {
    /// Execute the content query for `filter`, returning at most `limit`
    /// rows after skipping `offset`, ordered by `sort`
    async fn fetch_content(
        &self,
        filter: &F,
        limit: usize,
        offset: u64,
        sort: &Sort,
    ) -> QueryResult<Vec<T>>;
}

/// Contract for executing a count query over the same filter predicate,
/// without limit, offset or sort.
///
/// # Type Parameters
/// * `F` - The filter descriptor type understood by the storage layer
#[async_trait]
pub trait CountQueryExecutor<F>: Send + Sync {
    /// Count all rows matching `filter`
    async fn count(&self, filter: &F) -> QueryResult<u64>;
}
