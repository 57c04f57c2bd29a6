use serde::Deserialize;

/// Full user record, fetched only when an email is needed. Asana hides
/// the address for users outside the caller's organization.
#[derive(Debug, Deserialize, Clone)]
pub struct User {
    pub gid: String,
    pub name: String,
    pub email: Option<String>,
}

/// Compact user reference as embedded in tasks and stories.
#[derive(Debug, Deserialize, Clone)]
pub struct UserRef {
    pub gid: String,
    pub name: String,
}
