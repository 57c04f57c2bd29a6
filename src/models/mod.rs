pub mod api;
pub mod project;
pub mod records;
pub mod story;
pub mod task;
pub mod user;
pub mod workspace;

// Re-export commonly used types
pub use api::{ApiError, ApiResponse};
pub use project::Project;
pub use records::{CommentRecord, IssueRecord};
pub use story::Story;
pub use task::Task;
pub use user::{User, UserRef};
pub use workspace::Workspace;
