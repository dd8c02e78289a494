// board.rs - Renders engine notifications and maps pointer positions to cells

use egui::{Context, TextureHandle, TextureOptions, Vec2};
use life_engine::{BoardObserver, Cell, Grid};

use crate::canvas::Canvas;
use crate::config::BoardConfig;

pub struct Board {
    cols: usize,
    rows: usize,
    canvas: Canvas,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        let mut canvas = Canvas::new(config.width, config.height, config.cell_size);
        canvas.clear();
        Self {
            cols: config.width,
            rows: config.height,
            canvas,
            texture: None,
            dirty: false,
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Surface size in UI points.
    pub fn size(&self) -> Vec2 {
        let [w, h] = self.canvas.size();
        Vec2::new(w as f32, h as f32)
    }

    /// Cell under a pointer offset measured from the surface's top-left
    /// corner, or `None` when the offset falls outside the board.
    pub fn cell_at(&self, offset: Vec2) -> Option<(usize, usize)> {
        if !(offset.x >= 0.0 && offset.y >= 0.0) {
            return None;
        }
        let size = self.canvas.cell_size();
        let col = offset.x as usize / size;
        let row = offset.y as usize / size;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// GPU texture for the surface, re-uploaded only after something changed.
    pub fn texture(&mut self, ctx: &Context) -> &TextureHandle {
        let canvas = &self.canvas;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("life_board", canvas.image().clone(), TextureOptions::NEAREST)
        });
        if std::mem::take(&mut self.dirty) {
            texture.set(canvas.image().clone(), TextureOptions::NEAREST);
        }
        texture
    }
}

impl BoardObserver for Board {
    fn on_cell_changed(&mut self, cell: &Cell) {
        self.canvas.draw_cell(cell);
        self.dirty = true;
    }

    fn on_full_redraw_requested(&mut self, grid: &Grid) {
        self.canvas.redraw(grid);
        self.dirty = true;
    }
}
