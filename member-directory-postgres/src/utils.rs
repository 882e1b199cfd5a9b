use member_directory_api::QueryResult;
use member_directory_db::repository::pagination::{Sort, SortDirection};

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> QueryResult<Self>;
}

/// Render a sort into an ORDER BY clause.
///
/// Field names are interpolated verbatim, so the sort MUST have been
/// validated against the target schema's `SortableFields` first; every
/// query path here does so, including the raw SQL ones.
pub fn order_by_clause(sort: &Sort) -> String {
    if sort.is_unsorted() {
        return String::new();
    }
    let keys: Vec<String> = sort
        .orders()
        .iter()
        .map(|order| {
            let direction = match order.direction {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            format!("{} {}", order.field, direction)
        })
        .collect();
    format!(" ORDER BY {}", keys.join(", "))
}
