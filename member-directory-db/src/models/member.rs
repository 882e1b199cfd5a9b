use chrono::{DateTime, Utc};
use member_directory_api::AuditContext;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::SortableFields;

/// Sort keys accepted for member listings; everything else is rejected
/// before a query is issued.
pub const MEMBER_SORTABLE_FIELDS: SortableFields =
    SortableFields::new(&["username", "age", "created_at", "updated_at"]);

/// Sort keys accepted for the member/team view listing.
pub const MEMBER_VIEW_SORTABLE_FIELDS: SortableFields =
    SortableFields::new(&["username", "team_name"]);

/// A member of the directory.
///
/// Fully materialized — there is no deferred fetching of the team behind
/// a proxy. `team_id` is resolved to a team name only by queries that
/// produce a [`MemberView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MemberModel {
    pub id: Uuid,

    pub username: String,
    pub age: i32,
    pub team_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Uuid,
}

impl MemberModel {
    /// Create a new member, stamping the audit columns from the given context
    pub fn new(username: &str, age: i32, team_id: Option<Uuid>, audit: &AuditContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            age,
            team_id,
            created_at: audit.at,
            created_by: audit.actor_id,
            updated_at: audit.at,
            updated_by: audit.actor_id,
        }
    }

    /// Re-stamp the modification audit columns from the given context
    pub fn touch(&mut self, audit: &AuditContext) {
        self.updated_at = audit.at;
        self.updated_by = audit.actor_id;
    }
}

impl Identifiable for MemberModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Eager view-model projection of a member with its team name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MemberView {
    pub id: Uuid,
    pub username: String,
    pub team_name: Option<String>,
}

impl From<MemberModel> for MemberView {
    fn from(member: MemberModel) -> Self {
        MemberView {
            id: member.id,
            username: member.username,
            team_name: None,
        }
    }
}

impl Identifiable for MemberView {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
