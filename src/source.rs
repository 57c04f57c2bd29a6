use async_trait::async_trait;

use crate::error::ExportResult;
use crate::models::{Project, Story, Task, Workspace};

/// The remote operations the exporter needs from a task-tracking
/// service. `AsanaClient` is the real implementation; tests drive the
/// exporter with an in-memory one.
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn list_workspaces(&self) -> ExportResult<Vec<Workspace>>;

    async fn list_projects(&self, workspace_gid: &str) -> ExportResult<Vec<Project>>;

    /// Tasks of a project, in the order the service returns them
    /// (newest first). When `include_completed` is false the filtering
    /// happens server-side.
    async fn list_tasks(&self, project_gid: &str, include_completed: bool)
        -> ExportResult<Vec<Task>>;

    async fn get_task(&self, task_gid: &str) -> ExportResult<Task>;

    /// A task's activity feed, oldest first.
    async fn list_stories(&self, task_gid: &str) -> ExportResult<Vec<Story>>;

    /// Email address of a user, if their account exposes one.
    async fn user_email(&self, user_gid: &str) -> ExportResult<Option<String>>;
}
