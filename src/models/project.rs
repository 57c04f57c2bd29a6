use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    pub gid: String,
    pub name: String,
}
