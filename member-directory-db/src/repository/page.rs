use serde::{Deserialize, Serialize};

/// A bounded result slice plus total-count-derived metadata.
///
/// Assembled from one content query and one count query; see
/// [`crate::repository::paged_query`] for the execution algorithm.
///
/// # Example
/// ```
/// use member_directory_db::repository::page::Page;
///
/// let page = Page::new(vec![1, 2, 3], 0, 3, 5);
/// assert_eq!(page.total_pages(), 2);
/// assert!(page.has_next());
/// assert!(page.is_first());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, at most `page_size` of them
    pub content: Vec<T>,
    /// Zero-based page number echoed from the request
    pub page_number: usize,
    /// Page size echoed from the request
    pub page_size: usize,
    /// Total number of matching items across all pages
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page_number: usize, page_size: usize, total_elements: u64) -> Self {
        Self {
            content,
            page_number,
            page_size,
            total_elements,
        }
    }

    /// An empty page for a result set with no matching rows
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self::new(Vec::new(), page_number, page_size, 0)
    }

    /// Total number of pages; zero when there are no matching items
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.page_size as u64)
    }

    pub fn is_first(&self) -> bool {
        self.page_number == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        (self.page_number as u64) + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }

    /// Transform every item in order, preserving all paging metadata
    pub fn map<U, F>(self, transform: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(transform).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }

    /// Fallible transform; the first item error fails the whole page and
    /// no partial result is produced
    pub fn try_map<U, E, F>(self, transform: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let content = self
            .content
            .into_iter()
            .map(transform)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Page {
            content,
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        })
    }
}

/// A bounded result slice with only a next-page-exists flag.
///
/// Cheaper than [`Page`]: no count query is ever issued, the flag comes
/// from over-fetching a single extra row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice<T> {
    /// The items on this slice, at most `page_size` of them
    pub content: Vec<T>,
    /// Zero-based page number echoed from the request
    pub page_number: usize,
    /// Page size echoed from the request
    pub page_size: usize,
    /// Whether at least one more row exists past this slice
    pub has_next: bool,
}

impl<T> Slice<T> {
    pub fn new(content: Vec<T>, page_number: usize, page_size: usize, has_next: bool) -> Self {
        Self {
            content,
            page_number,
            page_size,
            has_next,
        }
    }

    pub fn is_first(&self) -> bool {
        self.page_number == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }

    /// Transform every item in order, preserving metadata and `has_next`
    pub fn map<U, F>(self, transform: F) -> Slice<U>
    where
        F: FnMut(T) -> U,
    {
        Slice {
            content: self.content.into_iter().map(transform).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            has_next: self.has_next,
        }
    }

    /// Fallible transform with the same all-or-nothing semantics as
    /// [`Page::try_map`]
    pub fn try_map<U, E, F>(self, transform: F) -> Result<Slice<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let content = self
            .content
            .into_iter()
            .map(transform)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Slice {
            content,
            page_number: self.page_number,
            page_size: self.page_size,
            has_next: self.has_next,
        })
    }
}
