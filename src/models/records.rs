use serde::{Deserialize, Serialize};

use super::Task;

/// One issue in GitHub's bulk-import shape. Field names and null
/// handling are significant: the import consumer matches them exactly.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IssueRecord {
    pub number: u32,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub user: Option<String>,
    pub assignee: Option<String>,
    pub milestone: Option<String>,
    pub labels: Vec<String>,
    pub state: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentRecord {
    pub user: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl IssueRecord {
    /// Map a source task onto an issue. `closed_at` mirrors the
    /// source's `completed_at` verbatim, even for open tasks.
    pub fn from_task(
        task: &Task,
        number: u32,
        user: Option<String>,
        assignee: Option<String>,
        milestone: Option<String>,
        labels: Vec<String>,
    ) -> Self {
        let state = if task.completed { "closed" } else { "open" };

        IssueRecord {
            number,
            title: task.name.clone(),
            body: task.notes.clone(),
            created_at: task.created_at.clone(),
            updated_at: task.modified_at.clone(),
            closed_at: task.completed_at.clone(),
            user,
            assignee,
            milestone,
            labels,
            state: state.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;

    fn sample_task(completed: bool) -> Task {
        Task {
            gid: "101".to_string(),
            name: "Add feature".to_string(),
            notes: "longer description".to_string(),
            created_at: "2023-12-01T10:00:00.000Z".to_string(),
            modified_at: "2024-01-02T09:30:00.000Z".to_string(),
            completed_at: completed.then(|| "2024-01-01".to_string()),
            completed,
            assignee: Some(UserRef {
                gid: "7".to_string(),
                name: "Bob".to_string(),
            }),
        }
    }

    #[test]
    fn test_open_task_maps_to_open_state() {
        let issue = IssueRecord::from_task(&sample_task(false), 1, None, None, None, vec![]);

        assert_eq!(issue.number, 1);
        assert_eq!(issue.title, "Add feature");
        assert_eq!(issue.body, "longer description");
        assert_eq!(issue.state, "open");
        assert_eq!(issue.closed_at, None);
    }

    #[test]
    fn test_completed_task_maps_to_closed_state() {
        let issue = IssueRecord::from_task(&sample_task(true), 2, None, None, None, vec![]);

        assert_eq!(issue.state, "closed");
        assert_eq!(issue.closed_at, Some("2024-01-01".to_string()));
    }

    #[test]
    fn test_closed_at_mirrors_completed_at_even_when_open() {
        // An open task can still carry a completed_at timestamp (it
        // was completed once and reopened); the field is not cleared.
        let mut task = sample_task(false);
        task.completed_at = Some("2023-06-01".to_string());

        let issue = IssueRecord::from_task(&task, 1, None, None, None, vec![]);
        assert_eq!(issue.state, "open");
        assert_eq!(issue.closed_at, Some("2023-06-01".to_string()));
    }

    #[test]
    fn test_issue_serializes_with_import_field_names() {
        let issue = IssueRecord::from_task(
            &sample_task(false),
            5,
            Some("alice".to_string()),
            Some("bob".to_string()),
            Some("v1.0".to_string()),
            vec!["imported".to_string()],
        );

        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["number"], 5);
        assert_eq!(value["user"], "alice");
        assert_eq!(value["assignee"], "bob");
        assert_eq!(value["milestone"], "v1.0");
        assert_eq!(value["labels"], serde_json::json!(["imported"]));
        assert!(value["closed_at"].is_null());
    }

    #[test]
    fn test_comment_updated_at_serializes_as_null() {
        let comment = CommentRecord {
            user: "bob".to_string(),
            body: "looks good".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: None,
        };

        let value = serde_json::to_value(&comment).unwrap();
        assert!(value["updated_at"].is_null());
        assert_eq!(value["body"], "looks good");
    }
}
