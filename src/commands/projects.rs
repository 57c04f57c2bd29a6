use clap::ArgMatches;
use colored::*;

use crate::client::AsanaClient;
use crate::config::get_api_token;
use crate::error::{ExportError, ExportResult};
use crate::export_error;
use crate::source::TaskSource;

pub async fn handle_projects(matches: &ArgMatches) -> ExportResult<()> {
    let api_token = get_api_token()?;
    let client = AsanaClient::new(&api_token)?;

    let workspace_name = matches
        .get_one::<String>("workspace")
        .ok_or_else(|| ExportError::InvalidInput("Workspace name is required".to_string()))?;

    let workspaces = client.list_workspaces().await?;
    let workspace = workspaces
        .into_iter()
        .find(|workspace| workspace.name == *workspace_name)
        .ok_or_else(|| export_error!(NotFound, "Workspace '{}'", workspace_name))?;

    let projects = client.list_projects(&workspace.gid).await?;

    if projects.is_empty() {
        println!("No projects found in workspace {}.", workspace_name);
    } else {
        println!("Found {} projects:", projects.len());
        for project in projects {
            println!("  {}", project.name.bright_cyan());
        }
    }

    Ok(())
}
