use std::process;

use clap::{value_parser, Arg, ArgAction, Command};

use asana_export::commands::{handle_auth, handle_export, handle_projects, handle_workspaces};
use asana_export::logging;

#[tokio::main]
async fn main() {
    let _ = logging::init_logging();

    let app = Command::new("asana-export")
        .about("Export Asana projects to GitHub bulk-import JSON files")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the Asana personal access token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your Asana personal access token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured token (masked)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("workspaces").about("List available workspaces"))
        .subcommand(
            Command::new("projects")
                .about("List projects in a workspace")
                .arg(
                    Arg::new("workspace")
                        .short('w')
                        .long("workspace")
                        .value_name("NAME")
                        .help("Workspace to list projects of")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export a project's tasks as per-issue JSON files")
                .arg(
                    Arg::new("workspace")
                        .short('w')
                        .long("workspace")
                        .value_name("NAME")
                        .help("Workspace name (omit to list available workspaces)"),
                )
                .arg(
                    Arg::new("project")
                        .short('p')
                        .long("project")
                        .value_name("NAME")
                        .help("Project name (omit to list available projects)"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("DIR")
                        .help("Directory the issues/ output directory is created in (default .)"),
                )
                .arg(
                    Arg::new("number")
                        .short('n')
                        .long("number")
                        .value_name("N")
                        .value_parser(value_parser!(u32))
                        .help("Number the first exported issue gets (default 1)"),
                )
                .arg(
                    Arg::new("completed")
                        .short('c')
                        .long("completed")
                        .help("Include completed tasks")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("users")
                        .short('u')
                        .long("users")
                        .value_name("FILE")
                        .help("JSON file mapping Asana display names to import logins"),
                )
                .arg(
                    Arg::new("default-user")
                        .long("default-user")
                        .value_name("NAME")
                        .help("Login used for authors missing from the user map"),
                )
                .arg(
                    Arg::new("milestone")
                        .short('m')
                        .long("milestone")
                        .value_name("NAME")
                        .help("Milestone applied to every exported issue"),
                )
                .arg(
                    Arg::new("label")
                        .short('l')
                        .long("label")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Label applied to every exported issue (repeatable)"),
                )
                .arg(
                    Arg::new("clean")
                        .long("clean")
                        .help("Remove a previous issues/ directory before exporting")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Suppress progress output")
                        .action(ArgAction::SetTrue),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("workspaces", sub_matches)) => handle_workspaces(sub_matches).await,
        Some(("projects", sub_matches)) => handle_projects(sub_matches).await,
        Some(("export", sub_matches)) => handle_export(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'asana-export --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        logging::log_error(&e.to_string());
        eprintln!("Error: {}", e);
        if let Some(log_file) = logging::get_log_file_path() {
            eprintln!("Details logged to {}", log_file.display());
        }
        process::exit(1);
    }
}
