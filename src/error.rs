use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("API token not found. Please run 'asana-export auth' to configure.")]
    ApiTokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ExportResult<T>;
    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ExportResult<T> {
        self.map_err(|e| ExportError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ExportError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ExportResult<T> {
        self.ok_or_else(|| ExportError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ExportError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! export_error {
    ($error_type:ident, $msg:expr) => {
        ExportError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        ExportError::$error_type(format!($fmt, $($arg)*))
    };
}
