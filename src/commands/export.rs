use std::fs;
use std::path::Path;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::ExportResult;
use crate::export::{
    ConsoleReporter, ExportOptions, Exporter, IdentityMap, IdentityResolver, NullReporter,
    Reporter,
};
use crate::source::TaskSource;

pub async fn handle_export(matches: &ArgMatches) -> ExportResult<()> {
    let output_root = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let output_dir = Path::new(output_root).join("issues");

    let reporter: Box<dyn Reporter> = if matches.get_flag("quiet") {
        Box::new(NullReporter)
    } else {
        Box::new(ConsoleReporter)
    };

    if matches.get_flag("clean") {
        if output_dir.exists() {
            fs::remove_dir_all(&output_dir)?;
            reporter.progress(&format!("Directory \"{}\" cleaned", output_dir.display()));
        } else {
            reporter.progress(&format!(
                "Directory \"{}\" not cleaned as it does not exist",
                output_dir.display()
            ));
        }
        // Clean-only invocation: nothing to export.
        if matches.get_one::<String>("workspace").is_none()
            && matches.get_one::<String>("project").is_none()
        {
            return Ok(());
        }
    }

    let mut context = CliContext::load()?;
    let client = context.verified_client()?;

    // Discovery mode: list what is available and stop without output.
    let Some(workspace_name) = matches.get_one::<String>("workspace") else {
        let workspaces = client.list_workspaces().await?;
        println!("Available workspaces:");
        for workspace in workspaces {
            println!("{}", workspace.name);
        }
        return Ok(());
    };

    let options = ExportOptions {
        output_dir,
        start_number: matches.get_one::<u32>("number").copied().unwrap_or(1),
        include_completed: matches.get_flag("completed"),
        milestone: matches.get_one::<String>("milestone").cloned(),
        labels: matches
            .get_many::<String>("label")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    };

    let map = match matches.get_one::<String>("users") {
        Some(path) => {
            reporter.progress(&format!("Reading user map from {}", path));
            IdentityMap::load(Path::new(path))?
        }
        None => IdentityMap::empty(),
    };
    let default_user = matches.get_one::<String>("default-user").cloned();
    let resolver = IdentityResolver::new(map, default_user);

    let mut exporter = Exporter::new(&*client, options, resolver, reporter);

    let Some(project_name) = matches.get_one::<String>("project") else {
        let workspace_gid = exporter.resolve_workspace(workspace_name).await?;
        let projects = client.list_projects(&workspace_gid).await?;
        println!("Available projects:");
        for project in projects {
            println!("{}", project.name);
        }
        return Ok(());
    };

    let summary = exporter.run(workspace_name, project_name).await?;
    println!(
        "Exported {} issues (starting at #{}) to {}",
        summary.exported,
        summary.first_number,
        summary.output_dir.display()
    );

    Ok(())
}
