use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::load_config;
use crate::error::ExportResult;
use crate::source::TaskSource;

pub async fn handle_auth(matches: &ArgMatches) -> ExportResult<()> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut context = CliContext::new();
        context.set_api_token(token.clone())?;
        println!("API token saved successfully!");

        // Test the token
        let client = context.verified_client()?;
        match client.list_workspaces().await {
            Ok(workspaces) => {
                println!("✅ Connected: {} workspace(s) visible", workspaces.len())
            }
            Err(e) => println!("❌ Failed to authenticate: {}", e),
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.api_token {
            Some(token) => println!("API token: {}", mask_token(&token)),
            None => println!("No API token configured"),
        }
    } else {
        println!("Usage: asana-export auth --token <TOKEN> or asana-export auth --show");
    }
    Ok(())
}

fn mask_token(token: &str) -> String {
    if token.len() > 12 {
        format!("{}...{}", &token[..8], &token[token.len() - 4..])
    } else {
        "****".to_string()
    }
}
