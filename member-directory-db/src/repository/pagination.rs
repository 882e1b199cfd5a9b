use member_directory_api::{QueryError, QueryResult};
use serde::{Deserialize, Serialize};

/// Direction of a single sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A single `(field, direction)` sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// An ordered sequence of sort keys; sequence order determines tie-break
/// precedence. The empty sequence means natural (store-defined) order.
///
/// # Example
/// ```
/// use member_directory_db::repository::pagination::Sort;
///
/// let sort = Sort::desc("username").and(Sort::asc("age"));
/// assert_eq!(sort.orders().len(), 2);
/// assert_eq!(sort.orders()[0].field, "username");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    orders: Vec<SortOrder>,
}

impl Sort {
    /// The natural, unspecified order
    pub fn unsorted() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn by(orders: Vec<SortOrder>) -> Self {
        Self { orders }
    }

    /// Single ascending key
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            orders: vec![SortOrder::asc(field)],
        }
    }

    /// Single descending key
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            orders: vec![SortOrder::desc(field)],
        }
    }

    /// Concatenate two sorts; keys of `self` take precedence over `other`'s
    pub fn and(mut self, other: Sort) -> Self {
        self.orders.extend(other.orders);
        self
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Offset-paging request: zero-based page number, page size and sort order.
///
/// Constructed by the caller per request and never mutated; `with_sort`
/// returns an updated copy.
///
/// # Example
/// ```
/// use member_directory_db::repository::pagination::{PageRequest, Sort};
///
/// let request = PageRequest::of(1, 20).unwrap().with_sort(Sort::desc("username"));
/// assert_eq!(request.offset(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
    sort: Sort,
}

impl PageRequest {
    /// Create a request for the given zero-based page.
    ///
    /// Fails with `InvalidArgument` when `page_size` is zero. A negative
    /// page number is unrepresentable; the type carries that half of the
    /// invariant.
    pub fn of(page_number: usize, page_size: usize) -> QueryResult<Self> {
        if page_size < 1 {
            return Err(QueryError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            page_number,
            page_size,
            sort: Sort::unsorted(),
        })
    }

    /// Request for the first page
    pub fn first(page_size: usize) -> QueryResult<Self> {
        Self::of(0, page_size)
    }

    /// Attach a sort order, returning the updated request
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Number of rows to skip before this page
    pub fn offset(&self) -> u64 {
        self.page_number as u64 * self.page_size as u64
    }
}

/// The set of field names a schema accepts as sort keys.
///
/// Every requested sort field is checked against this set before a query
/// is issued; unknown fields fail fast with `InvalidSortField` instead of
/// being silently dropped or passed through to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableFields {
    fields: &'static [&'static str],
}

impl SortableFields {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    /// Check every key of `sort` against the allowed set
    pub fn validate(&self, sort: &Sort) -> QueryResult<()> {
        for order in sort.orders() {
            if !self.contains(&order.field) {
                return Err(QueryError::InvalidSortField(order.field.clone()));
            }
        }
        Ok(())
    }
}
