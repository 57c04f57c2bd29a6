use serde::Deserialize;

/// One entry in a task's activity feed, oldest first. The first story
/// is the task's creation event; entries with `type == "comment"` are
/// the ones exported as comments.
#[derive(Debug, Deserialize, Clone)]
pub struct Story {
    #[serde(rename = "type")]
    pub story_type: String,
    #[serde(default)]
    pub text: String,
    pub created_at: String,
    pub created_by: Option<super::UserRef>,
}

impl Story {
    pub fn is_comment(&self) -> bool {
        self.story_type == "comment"
    }
}
