//! Dashboard Errors
//!
//! Internal error type. Widgets turn these into defaults at their boundary;
//! nothing reaches the user.

use thiserror::Error;

/// Common result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DashboardError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
