use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use crate::constants::{ASANA_API_URL, STORY_FIELDS, TASK_FIELDS};
use crate::error::{ExportError, ExportResult};
use crate::models::*;
use crate::source::TaskSource;

pub struct AsanaClient {
    client: reqwest::Client,
}

impl AsanaClient {
    pub fn new(api_token: &str) -> ExportResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_token))
                .map_err(|_| ExportError::InvalidInput("Invalid API token format".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ExportResult<T> {
        let url = format!("{}/{}", ASANA_API_URL, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Asana reports failures as an errors array in the body
            let body = response.text().await?;
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body) {
                if let Some(errors) = envelope.errors {
                    let messages: Vec<String> =
                        errors.into_iter().map(|e| e.message).collect();
                    return Err(ExportError::ApiError(messages.join(", ")));
                }
            }
            return Err(ExportError::ApiError(format!("HTTP error: {}", status)));
        }

        let envelope: ApiResponse<T> = response.json().await?;

        if let Some(errors) = envelope.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(ExportError::ApiError(messages.join(", ")));
        }

        envelope
            .data
            .ok_or_else(|| ExportError::ApiError("No data returned by the API".to_string()))
    }
}

#[async_trait]
impl TaskSource for AsanaClient {
    async fn list_workspaces(&self) -> ExportResult<Vec<Workspace>> {
        self.get("workspaces", &[]).await
    }

    async fn list_projects(&self, workspace_gid: &str) -> ExportResult<Vec<Project>> {
        let path = format!("workspaces/{}/projects", workspace_gid);
        self.get(&path, &[("archived", "false")]).await
    }

    async fn list_tasks(
        &self,
        project_gid: &str,
        include_completed: bool,
    ) -> ExportResult<Vec<Task>> {
        let path = format!("projects/{}/tasks", project_gid);
        let mut query = vec![("opt_fields", TASK_FIELDS)];
        if !include_completed {
            // Scope the fetch server-side; a project's full history
            // can be much larger than its open tasks.
            query.push(("completed_since", "now"));
        }
        self.get(&path, &query).await
    }

    async fn get_task(&self, task_gid: &str) -> ExportResult<Task> {
        let path = format!("tasks/{}", task_gid);
        self.get(&path, &[("opt_fields", TASK_FIELDS)]).await
    }

    async fn list_stories(&self, task_gid: &str) -> ExportResult<Vec<Story>> {
        let path = format!("tasks/{}/stories", task_gid);
        self.get(&path, &[("opt_fields", STORY_FIELDS)]).await
    }

    async fn user_email(&self, user_gid: &str) -> ExportResult<Option<String>> {
        let path = format!("users/{}", user_gid);
        let user: User = self.get(&path, &[("opt_fields", "name,email")]).await?;
        Ok(user.email)
    }
}
