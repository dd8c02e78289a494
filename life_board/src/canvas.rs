// canvas.rs - Pixel surface the board is painted on

use egui::{Color32, ColorImage};
use life_engine::{Cell, Grid};

pub const LIVE_COLOR: Color32 = Color32::BLACK;
pub const DEAD_COLOR: Color32 = Color32::WHITE;
pub const LINE_COLOR: Color32 = Color32::from_rgb(173, 216, 230); // lightblue
pub const LINE_WIDTH: usize = 2;

// Kept as a texture rather than repainted per frame so the engine's
// per-cell change notifications only touch the pixels of that cell.

/// RGBA image sized `cols * cell_size` by `rows * cell_size`. Lines are
/// centred on cell boundaries, so each cell carries half of the line width
/// along its own edges.
pub struct Canvas {
    cols: usize,
    rows: usize,
    cell_size: usize,
    image: ColorImage,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize, cell_size: usize) -> Self {
        let image = ColorImage::new([cols * cell_size, rows * cell_size], DEAD_COLOR);
        Self { cols, rows, cell_size, image }
    }

    #[inline]
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// `[width, height]` in pixels.
    #[inline]
    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    #[inline]
    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color32 {
        self.image[(x, y)]
    }

    /// Blank white surface with the grid ruled in.
    pub fn clear(&mut self) {
        let [width, height] = self.size();
        self.fill_rect(0, 0, width, height, DEAD_COLOR);

        let half = LINE_WIDTH / 2;
        for i in 0..=self.cols {
            let x = (i * self.cell_size).saturating_sub(half);
            self.fill_rect(x, 0, LINE_WIDTH, height, LINE_COLOR);
        }
        for i in 0..=self.rows {
            let y = (i * self.cell_size).saturating_sub(half);
            self.fill_rect(0, y, width, LINE_WIDTH, LINE_COLOR);
        }
    }

    pub fn draw_cell(&mut self, cell: &Cell) {
        let size = self.cell_size;
        let (x, y) = (cell.col() * size, cell.row() * size);
        let fill = if cell.is_alive() { LIVE_COLOR } else { DEAD_COLOR };
        self.fill_rect(x, y, size, size, fill);

        let band = (LINE_WIDTH / 2).min(size);
        self.fill_rect(x, y, size, band, LINE_COLOR);
        self.fill_rect(x, y + size - band, size, band, LINE_COLOR);
        self.fill_rect(x, y, band, size, LINE_COLOR);
        self.fill_rect(x + size - band, y, band, size, LINE_COLOR);
    }

    pub fn redraw(&mut self, grid: &Grid) {
        self.clear();
        for cell in grid.cells() {
            self.draw_cell(cell);
        }
    }

    // Clipped to the surface.
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color32) {
        let [width, height] = self.size();
        let (x, y) = (x.min(width), y.min(height));
        let x_end = (x + w).min(width);
        let y_end = (y + h).min(height);
        for py in y..y_end {
            let row = py * width;
            self.image.pixels[row + x..row + x_end].fill(color);
        }
    }
}
