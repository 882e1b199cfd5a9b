#[cfg(test)]
pub mod test_utils {
    use member_directory_api::AuditContext;
    use member_directory_db::models::member::MemberModel;
    use uuid::Uuid;

    pub fn create_test_member(username: &str, age: i32, team_id: Option<Uuid>) -> MemberModel {
        let audit = AuditContext::new(Uuid::new_v4());
        MemberModel::new(username, age, team_id, &audit)
    }

    /// A per-test age value; there is no transaction rollback, so tests
    /// keep their data disjoint by carving out an age nobody else uses.
    pub fn unique_age() -> i32 {
        (Uuid::new_v4().as_u128() % 1_000_000) as i32 + 1_000
    }
}
