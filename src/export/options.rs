use std::path::PathBuf;

/// Options for a single export run. `milestone` and `labels` are
/// applied uniformly to every exported issue.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory the per-task JSON files are written into.
    pub output_dir: PathBuf,
    /// First issue number; incremented once per task.
    pub start_number: u32,
    /// Include completed tasks in the export.
    pub include_completed: bool,
    pub milestone: Option<String>,
    pub labels: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            output_dir: PathBuf::from("issues"),
            start_number: 1,
            include_completed: false,
            milestone: None,
            labels: Vec::new(),
        }
    }
}
