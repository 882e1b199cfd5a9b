//! Paged query execution over the executor contracts.
//!
//! A `Page` costs one content query plus one count query; a `Slice` costs
//! a single content query over-fetching one row. Sort fields are validated
//! before anything reaches the storage layer.
//!
//! The two `Page` queries are independent reads: under concurrent writes
//! the content and the total may reflect different snapshots unless the
//! storage collaborator provides a consistent one across both. Callers
//! cancel by dropping the future; executors that observe a caller-side
//! abort report `QueryError::Cancelled`, and no partial result is ever
//! returned.

use member_directory_api::QueryResult;

use crate::repository::page::{Page, Slice};
use crate::repository::pagination::{PageRequest, SortableFields};
use crate::repository::query_executor::{ContentQueryExecutor, CountQueryExecutor};

/// Execute a content query and a count query over the same filter and
/// assemble a [`Page`].
///
/// The count query runs without limit, offset or sort — sorting is
/// irrelevant to counting. When the count reports zero matching rows the
/// page is empty with zero total pages.
pub async fn execute_page<F, T>(
    content: &impl ContentQueryExecutor<F, T>,
    count: &impl CountQueryExecutor<F>,
    filter: &F,
    request: &PageRequest,
    sortable: &SortableFields,
) -> QueryResult<Page<T>> {
    sortable.validate(request.sort())?;

    let rows = content
        .fetch_content(filter, request.page_size(), request.offset(), request.sort())
        .await?;
    let total = count.count(filter).await?;

    Ok(assemble_page(rows, total, request))
}

/// Like [`execute_page`], but counting with a separately-optimized
/// descriptor instead of deriving the count from the content query.
///
/// A content query may carry joins needed only for display columns; the
/// override lets the caller count over a simplified predicate (possibly a
/// different descriptor type entirely).
pub async fn execute_page_with_count_filter<F, C, T>(
    content: &impl ContentQueryExecutor<F, T>,
    count: &impl CountQueryExecutor<C>,
    filter: &F,
    count_filter: &C,
    request: &PageRequest,
    sortable: &SortableFields,
) -> QueryResult<Page<T>> {
    sortable.validate(request.sort())?;

    let rows = content
        .fetch_content(filter, request.page_size(), request.offset(), request.sort())
        .await?;
    let total = count.count(count_filter).await?;

    Ok(assemble_page(rows, total, request))
}

/// Execute a content query only and assemble a [`Slice`].
///
/// Fetches `page_size + 1` rows; the overflow row, if present, becomes the
/// `has_next` flag and is discarded. No count query is issued — that is
/// the point of a slice.
pub async fn execute_slice<F, T>(
    content: &impl ContentQueryExecutor<F, T>,
    filter: &F,
    request: &PageRequest,
    sortable: &SortableFields,
) -> QueryResult<Slice<T>> {
    sortable.validate(request.sort())?;

    let mut rows = content
        .fetch_content(
            filter,
            request.page_size() + 1,
            request.offset(),
            request.sort(),
        )
        .await?;

    let has_next = rows.len() > request.page_size();
    rows.truncate(request.page_size());

    Ok(Slice::new(
        rows,
        request.page_number(),
        request.page_size(),
        has_next,
    ))
}

fn assemble_page<T>(rows: Vec<T>, total: u64, request: &PageRequest) -> Page<T> {
    if total == 0 {
        // The count owns the emptiness invariant for the page
        return Page::empty(request.page_number(), request.page_size());
    }
    Page::new(rows, request.page_number(), request.page_size(), total)
}
