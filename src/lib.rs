// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod source;

// Re-export commonly used items
pub use client::AsanaClient;
pub use config::{get_api_token, load_config, save_config, Config};
pub use error::{ExportError, ExportResult};
pub use export::{ExportOptions, Exporter};
pub use models::*;
pub use source::TaskSource;
