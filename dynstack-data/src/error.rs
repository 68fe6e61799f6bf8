//! Data error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown tap action: {0}")]
    UnknownTapAction(String),
}
