use std::fs;
use std::path::PathBuf;

use crate::constants::PLACEHOLDER_USER;
use crate::error::{ExportError, ExportResult};
use crate::export::identity::IdentityResolver;
use crate::export::options::ExportOptions;
use crate::export::reporter::Reporter;
use crate::export_error;
use crate::models::{CommentRecord, IssueRecord, Task};
use crate::source::TaskSource;

/// Single-pass exporter: resolve workspace and project by name, fetch
/// the project's tasks, and write one issue file and one comments file
/// per task, numbered from `start_number` with the oldest task first.
///
/// A failed fetch or write aborts the run; files already written stay
/// in place, and re-running reuses the same numbers.
pub struct Exporter<'a> {
    source: &'a dyn TaskSource,
    options: ExportOptions,
    resolver: IdentityResolver,
    reporter: Box<dyn Reporter>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub exported: usize,
    pub first_number: u32,
    pub output_dir: PathBuf,
}

impl<'a> Exporter<'a> {
    pub fn new(
        source: &'a dyn TaskSource,
        options: ExportOptions,
        resolver: IdentityResolver,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Exporter {
            source,
            options,
            resolver,
            reporter,
        }
    }

    pub async fn run(
        &mut self,
        workspace_name: &str,
        project_name: &str,
    ) -> ExportResult<ExportSummary> {
        // Fail on an unwritable output location before any remote call.
        fs::create_dir_all(&self.options.output_dir)?;

        self.reporter.progress("Looking through workspaces");
        let workspace_gid = self.resolve_workspace(workspace_name).await?;
        self.reporter
            .progress(&format!("Workspace {} found", workspace_name));

        self.reporter.progress("Looking through projects");
        let project_gid = self.resolve_project(&workspace_gid, project_name).await?;
        self.reporter
            .progress(&format!("Project {} found", project_name));

        self.reporter.progress("Getting list of tasks");
        let tasks = self
            .source
            .list_tasks(&project_gid, self.options.include_completed)
            .await?;
        self.reporter.progress(&format!("Got {} tasks", tasks.len()));

        self.reporter.progress("Going through tasks");
        let mut number = self.options.start_number;
        // The source returns tasks newest first; iterate in reverse so
        // the oldest task receives the lowest issue number.
        for task in tasks.iter().rev() {
            self.export_task(task, number).await?;
            number += 1;
        }
        self.reporter.progress("Writing finished");

        Ok(ExportSummary {
            exported: tasks.len(),
            first_number: self.options.start_number,
            output_dir: self.options.output_dir.clone(),
        })
    }

    pub async fn resolve_workspace(&self, name: &str) -> ExportResult<String> {
        let workspaces = self.source.list_workspaces().await?;
        workspaces
            .into_iter()
            .find(|workspace| workspace.name == name)
            .map(|workspace| workspace.gid)
            .ok_or_else(|| export_error!(NotFound, "Workspace '{}'", name))
    }

    pub async fn resolve_project(&self, workspace_gid: &str, name: &str) -> ExportResult<String> {
        let projects = self.source.list_projects(workspace_gid).await?;
        projects
            .into_iter()
            .find(|project| project.name == name)
            .map(|project| project.gid)
            .ok_or_else(|| export_error!(NotFound, "Project '{}'", name))
    }

    async fn export_task(&mut self, task: &Task, number: u32) -> ExportResult<()> {
        self.reporter
            .progress(&format!("Writing task '{}'", task.name));

        let stories = self.source.list_stories(&task.gid).await?;

        // The first story is the creation event and names the author.
        // A feed without one leaves the author unresolved rather than
        // failing the run.
        let user = match stories.first().and_then(|story| story.created_by.as_ref()) {
            Some(creator) => Some(self.resolver.resolve_author(creator, self.source).await?),
            None => {
                self.reporter.warn(&format!(
                    "Task '{}' has no creation story; leaving author unset",
                    task.name
                ));
                None
            }
        };

        let assignee = task
            .assignee
            .as_ref()
            .map(|assignee| self.resolver.resolve_assignee(assignee));

        let issue = IssueRecord::from_task(
            task,
            number,
            user,
            assignee,
            self.options.milestone.clone(),
            self.options.labels.clone(),
        );
        let issue_path = self.options.output_dir.join(format!("{}.json", number));
        fs::write(&issue_path, serde_json::to_string(&issue)?)?;

        let mut comments: Vec<CommentRecord> = Vec::new();
        for story in stories.iter().skip(1) {
            if !story.is_comment() {
                continue;
            }
            let author = match story.created_by.as_ref() {
                Some(author) => self.resolver.resolve_author(author, self.source).await?,
                None => PLACEHOLDER_USER.to_string(),
            };
            self.reporter
                .progress(&format!("Adding comment by {}", author));
            comments.push(CommentRecord {
                user: author,
                body: story.text.clone(),
                created_at: story.created_at.clone(),
                updated_at: None,
            });
        }

        let comments_path = self
            .options
            .output_dir
            .join(format!("{}.comments.json", number));
        fs::write(&comments_path, serde_json::to_string(&comments)?)?;

        Ok(())
    }
}
