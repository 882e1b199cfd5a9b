pub mod pagination;
pub mod page;
pub mod query_executor;
pub mod paged_query;
pub mod find_by_id;
pub mod create_batch;
pub mod update_batch;
pub mod delete_batch;

// Re-exports
pub use pagination::*;
pub use page::*;
pub use query_executor::*;
pub use paged_query::*;
pub use find_by_id::*;
pub use create_batch::*;
pub use update_batch::*;
pub use delete_batch::*;
