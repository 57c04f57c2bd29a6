use serde::Deserialize;

/// Envelope every Asana REST response arrives in: a `data` payload on
/// success, an `errors` array otherwise.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<ApiError>>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}
