use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Explicit audit context passed into every write operation.
///
/// Carries the acting person and the moment of the change. There is no
/// ambient "current user" provider; callers must state who is writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditContext {
    /// The person performing the write
    pub actor_id: Uuid,
    /// When the write happened
    pub at: DateTime<Utc>,
}

impl AuditContext {
    /// Create a context for the given actor, stamped with the current time
    pub fn new(actor_id: Uuid) -> Self {
        Self {
            actor_id,
            at: Utc::now(),
        }
    }

    /// Create a context with an explicit timestamp (useful for replay and tests)
    pub fn with_timestamp(actor_id: Uuid, at: DateTime<Utc>) -> Self {
        Self { actor_id, at }
    }
}
