use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Task {
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
    pub modified_at: String,
    pub completed_at: Option<String>,
    pub completed: bool,
    pub assignee: Option<super::UserRef>,
}
