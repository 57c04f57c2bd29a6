use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Workspace {
    pub gid: String,
    pub name: String,
}
