// game.rs - Simulation engine and its Idle/Running lifecycle

use rand::Rng;
use tokio::runtime::Handle;

use crate::cell::Cell;
use crate::clock::SimulationClock;
use crate::error::ConfigError;
use crate::grid::{Grid, NeighborCounts};
use crate::rules;

/// Receives redraw notifications from the engine.
pub trait BoardObserver {
    /// A single cell changed state.
    fn on_cell_changed(&mut self, cell: &Cell);
    /// The whole grid should be repainted.
    fn on_full_redraw_requested(&mut self, grid: &Grid);
}

/// For callers that don't render anything.
impl BoardObserver for () {
    fn on_cell_changed(&mut self, _cell: &Cell) {}
    fn on_full_redraw_requested(&mut self, _grid: &Grid) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Idle,
    Running,
}

pub struct Game {
    grid: Grid,
    counts: NeighborCounts,
    clock: SimulationClock,
    generation: u64,
}

impl Game {
    pub fn new(
        width: usize,
        height: usize,
        interval_ms: u64,
        runtime: Handle,
    ) -> Result<Self, ConfigError> {
        let grid = Grid::new(width, height)?;
        let counts = NeighborCounts::for_grid(&grid);
        Ok(Self {
            grid,
            counts,
            clock: SimulationClock::new(runtime, interval_ms),
            generation: 0,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn state(&self) -> SimulationState {
        if self.clock.is_active() {
            SimulationState::Running
        } else {
            SimulationState::Idle
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state() == SimulationState::Running
    }

    #[inline]
    pub fn interval_ms(&self) -> u64 {
        self.clock.interval_ms()
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    /// Advances one generation. All neighbor counts are taken before any
    /// cell changes; the observer hears about each cell that flipped.
    pub fn step(&mut self, observer: &mut impl BoardObserver) {
        self.counts.recompute(&self.grid);

        for cell in self.grid.cells_mut() {
            let count = self.counts.get(cell.row(), cell.col());
            let next = rules::next_state(cell.is_alive(), count);
            if next != cell.is_alive() {
                cell.set_alive(next);
                observer.on_cell_changed(cell);
            }
        }
        self.generation += 1;
    }

    /// Runs at most one `step` if the clock ticked since the last call.
    /// Ticks missed while nobody called this are dropped, not replayed.
    pub fn advance(&mut self, observer: &mut impl BoardObserver) -> bool {
        let ticks = self.clock.take_ticks();
        if ticks == 0 || !self.is_running() {
            return false;
        }
        if ticks > 1 {
            log::debug!("dropping {} missed ticks", ticks - 1);
        }
        self.step(observer);
        true
    }

    /// Starts the clock. Fails if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            log::debug!("start ignored: already running");
            return false;
        }
        log::info!("Game started");
        self.clock.arm();
        true
    }

    /// Stops the clock. Fails if already idle.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            log::debug!("pause ignored: already idle");
            return false;
        }
        log::info!("Game paused");
        self.clock.disarm();
        true
    }

    /// Stops the clock, kills every cell and asks for a blank board.
    pub fn reset(&mut self, observer: &mut impl BoardObserver) {
        log::info!("Game reset");
        self.clock.disarm();
        self.clear();
        observer.on_full_redraw_requested(&self.grid);
    }

    /// Kills every cell. No redraw is requested.
    pub fn clear(&mut self) {
        self.grid.fill(false);
        self.generation = 0;
    }

    /// Clamped to the clock's bounds; re-arms the timer if running.
    pub fn set_interval(&mut self, ms: u64) -> u64 {
        self.clock.set_interval(ms)
    }

    pub fn randomize(&mut self, observer: &mut impl BoardObserver) -> bool {
        self.randomize_with(&mut rand::rng(), observer)
    }

    /// Sets each cell alive with probability one half. Refused while running.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        observer: &mut impl BoardObserver,
    ) -> bool {
        if self.is_running() {
            log::debug!("randomize ignored: simulation running");
            return false;
        }
        for cell in self.grid.cells_mut() {
            cell.set_alive(rng.random_bool(0.5));
        }
        self.generation = 0;
        log::info!("Grid randomized: {} live cells", self.grid.live_count());
        observer.on_full_redraw_requested(&self.grid);
        true
    }

    /// Flips one cell. Refused while running. Panics on out-of-range indices.
    pub fn toggle(&mut self, row: usize, col: usize, observer: &mut impl BoardObserver) -> bool {
        if self.is_running() {
            log::debug!("toggle ({row}, {col}) ignored: simulation running");
            return false;
        }
        let cell = self.grid.cell_mut(row, col);
        cell.toggle();
        observer.on_cell_changed(cell);
        true
    }

    /// Brings one cell to life if it is dead. Refused while running; a cell
    /// that is already alive is left alone and reported as `false`.
    pub fn set_alive(&mut self, row: usize, col: usize, observer: &mut impl BoardObserver) -> bool {
        if self.is_running() {
            log::debug!("paint ({row}, {col}) ignored: simulation running");
            return false;
        }
        let cell = self.grid.cell_mut(row, col);
        if cell.is_alive() {
            return false;
        }
        cell.set_alive(true);
        observer.on_cell_changed(cell);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        changed: Vec<(usize, usize, bool)>,
        full_redraws: usize,
    }

    impl BoardObserver for Recorder {
        fn on_cell_changed(&mut self, cell: &Cell) {
            self.changed.push((cell.row(), cell.col(), cell.is_alive()));
        }
        fn on_full_redraw_requested(&mut self, _grid: &Grid) {
            self.full_redraws += 1;
        }
    }

    #[tokio::test]
    async fn step_reports_only_flipped_cells() {
        let mut game = Game::new(3, 3, 200, Handle::current()).unwrap();
        for col in 0..3 {
            assert!(game.toggle(1, col, &mut ()));
        }

        let mut recorder = Recorder::default();
        game.step(&mut recorder);

        recorder.changed.sort();
        assert_eq!(
            recorder.changed,
            vec![(0, 1, true), (1, 0, false), (1, 2, false), (2, 1, true)]
        );
        assert_eq!(game.generation(), 1);
    }

    #[tokio::test]
    async fn toggle_and_paint_notify_observer() {
        let mut game = Game::new(4, 4, 200, Handle::current()).unwrap();
        let mut recorder = Recorder::default();

        assert!(game.toggle(2, 3, &mut recorder));
        assert!(!game.set_alive(2, 3, &mut recorder));
        assert!(game.set_alive(0, 0, &mut recorder));
        assert!(game.toggle(2, 3, &mut recorder));

        assert_eq!(recorder.changed, vec![(2, 3, true), (0, 0, true), (2, 3, false)]);
    }

    #[tokio::test]
    async fn clear_does_not_request_redraw_but_reset_does() {
        let mut game = Game::new(4, 4, 200, Handle::current()).unwrap();
        let mut recorder = Recorder::default();
        game.toggle(1, 1, &mut ());

        game.clear();
        assert_eq!(recorder.full_redraws, 0);
        assert_eq!(game.grid().live_count(), 0);

        game.reset(&mut recorder);
        assert_eq!(recorder.full_redraws, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn advance_steps_once_per_tick_while_running() {
        let mut game = Game::new(3, 3, 100, Handle::current()).unwrap();
        for col in 0..3 {
            game.toggle(1, col, &mut ());
        }
        assert!(game.start());
        assert!(!game.advance(&mut ()));

        // Ticks land at t=100 and t=200.
        tokio::time::sleep(std::time::Duration::from_millis(110)).await;
        assert!(game.advance(&mut ()));
        assert_eq!(game.generation(), 1);
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(game.advance(&mut ()));
        assert_eq!(game.generation(), 2);
        // A blinker is back in its starting phase after two generations.
        assert!((0..3).all(|col| game.grid().is_alive(1, col)));
    }

    #[tokio::test(start_paused = true)]
    async fn backlog_of_ticks_runs_a_single_generation() {
        let mut game = Game::new(3, 3, 50, Handle::current()).unwrap();
        assert!(game.start());
        tokio::time::sleep(std::time::Duration::from_millis(60_010)).await;

        assert!(game.advance(&mut ()));
        assert_eq!(game.generation(), 1);
        assert!(!game.advance(&mut ()));
    }
}
