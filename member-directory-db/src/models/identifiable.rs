use uuid::Uuid;

/// Trait for directory entities addressed by a UUID primary key.
///
/// The generic repository traits are bounded on this so an operation like
/// `FindById` works uniformly across members, teams and projections.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}
