use chrono::{DateTime, Utc};
use member_directory_api::AuditContext;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// A team that members may belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TeamModel {
    pub id: Uuid,

    pub name: String,

    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Uuid,
}

impl TeamModel {
    /// Create a new team, stamping the audit columns from the given context
    pub fn new(name: &str, audit: &AuditContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: audit.at,
            created_by: audit.actor_id,
            updated_at: audit.at,
            updated_by: audit.actor_id,
        }
    }
}

impl Identifiable for TeamModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
