// error.rs - Construction errors

use thiserror::Error;

/// Rejected configuration values. Policy rejections at runtime (editing while
/// running, starting twice) are plain `bool` results and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,
    #[error("grid height must be positive")]
    ZeroHeight,
    #[error("cell size must be positive")]
    ZeroCellSize,
}
