// main.rs - Conway's Game of Life on an interactive board

use eframe::egui;
use life_engine::Game;
use tokio::runtime::Runtime;

mod board;   // Engine observer + pointer mapping
mod canvas;  // Pixel surface
mod config;  // Defaults and validation
mod error;   // Startup errors
mod ui;      // eframe::App impl

use board::Board;
use config::BoardConfig;
use error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = BoardConfig::default();
    config.validate()?;

    let runtime = Runtime::new()?;
    let game = Game::new(config.width, config.height, config.interval_ms, runtime.handle().clone())?;
    log::info!(
        "Board {}x{} cells, {} px per cell, {} ms per generation",
        config.width,
        config.height,
        config.cell_size,
        game.interval_ms()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, config, game, runtime))),
    )?;
    Ok(())
}

pub struct LifeApp {
    pub game: Game,
    pub board: Board,
    // Hosts the clock's timer task; dropped after `game`.
    _runtime: Runtime,
}

impl LifeApp {
    fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig, mut game: Game, runtime: Runtime) -> Self {
        let ctx = cc.egui_ctx.clone();
        game.clock_mut().set_waker(move || ctx.request_repaint());

        Self {
            game,
            board: Board::new(&config),
            _runtime: runtime,
        }
    }
}
