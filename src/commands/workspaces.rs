use clap::ArgMatches;
use colored::*;

use crate::client::AsanaClient;
use crate::config::get_api_token;
use crate::error::ExportResult;
use crate::source::TaskSource;

pub async fn handle_workspaces(_matches: &ArgMatches) -> ExportResult<()> {
    let api_token = get_api_token()?;
    let client = AsanaClient::new(&api_token)?;

    let workspaces = client.list_workspaces().await?;

    if workspaces.is_empty() {
        println!("No workspaces found.");
    } else {
        println!("Found {} workspaces:", workspaces.len());
        for workspace in workspaces {
            println!("  {}", workspace.name.bright_cyan());
        }
    }

    Ok(())
}
