pub mod auth;
pub mod export;
pub mod projects;
pub mod workspaces;

pub use auth::handle_auth;
pub use export::handle_export;
pub use projects::handle_projects;
pub use workspaces::handle_workspaces;
