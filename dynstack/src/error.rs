//! Stack error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("visibility mask has {mask} entries for {items} items")]
    MaskLengthMismatch { items: usize, mask: usize },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
