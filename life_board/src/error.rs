// error.rs - Startup failures

use life_engine::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid board configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start the timer runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
