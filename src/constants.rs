pub const ASANA_API_URL: &str = "https://app.asana.com/api/1.0";
pub const CONFIG_FILE: &str = ".asana-export-config.json";

// Identity written for an author with no mapped login, no configured
// default, and no visible email on their account.
pub const PLACEHOLDER_USER: &str = "ghost";

// Common opt_fields selections
pub const TASK_FIELDS: &str =
    "name,notes,created_at,modified_at,completed,completed_at,assignee.name";

pub const STORY_FIELDS: &str = "type,text,created_at,created_by.name";
