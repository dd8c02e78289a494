// config.rs - Board configuration defaults

use life_engine::ConfigError;
use life_engine::clock::DEFAULT_INTERVAL_MS;

pub const GRID_WIDTH: usize = 60;   // Cells per row
pub const GRID_HEIGHT: usize = 40;  // Rows
pub const CELL_SIZE: usize = 14;    // Pixels per cell side

// Room for the heading, controls and statistics around the board
const PANEL_MARGIN: [f32; 2] = [32.0, 190.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub interval_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(())
    }

    /// Drawable surface size in pixels, `[width, height]`.
    pub fn surface_size(&self) -> [usize; 2] {
        [self.width * self.cell_size, self.height * self.cell_size]
    }

    pub fn window_size(&self) -> [f32; 2] {
        let [w, h] = self.surface_size();
        [w as f32 + PANEL_MARGIN[0], h as f32 + PANEL_MARGIN[1]]
    }
}
