use crate::board::{next_generation, Board};
use crate::stepper::{Generation, Stepper};
use crate::{Options, Ticker};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// What the game is doing; menu items derive their enabled state from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    /// Fresh or reset board, never played since.
    #[default]
    Editing,
    Running,
    Stopped,
}

impl GameState {
    pub fn can_play(&self) -> bool {
        !self.is_running()
    }

    pub fn can_stop(&self) -> bool {
        self.is_running()
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Running => "Running",
            Self::Stopped => "Stopped",
        }
    }
}

/// Input to the game, one variant per kind of UI event.
///
/// Pointer positions are in pixels relative to the top-left of the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Resized { width: u32, height: u32 },
    PointerPressed { x: i32, y: i32 },
    PointerDragged { x: i32, y: i32 },
    PointerReleased { x: i32, y: i32 },
    /// Clear the board and fill it randomly with the given percentage,
    /// clamped to 100.
    Autofill(u8),
    SetMovesPerSecond(u32),
    Play,
    Stop,
    Reset,
    /// A move is due.
    Tick,
    GenerationReady(Generation),
}

pub struct Game {
    board: Board,
    options: Options,
    state: GameState,
    generation: u64, // Number of moves since the last reset.
    epoch: u64,      // Bumped by every edit; older step results are stale.
    in_flight: Option<u64>, // Epoch of the step the stepper is working on.
    pointer_down: bool,     // A stroke started on the canvas and has not ended.
    ticker: Ticker,
    stepper: Option<Stepper>,
}

impl Game {
    /// Game computing its moves on a background thread.
    ///
    /// `on_ready` runs on that thread each time a move is computed.
    pub fn new(board: Board, on_ready: impl Fn() + Send + 'static) -> Self {
        let stepper = Stepper::spawn(on_ready)
            .map_err(|err| warn!("stepping on the UI thread: {err}"))
            .ok();
        Self::with_stepper(board, stepper)
    }

    /// Game computing each move synchronously when it is due.
    pub fn without_stepper(board: Board) -> Self {
        Self::with_stepper(board, None)
    }

    fn with_stepper(board: Board, stepper: Option<Stepper>) -> Self {
        let options = Options::default();
        Self {
            board,
            options,
            state: GameState::Editing,
            generation: 0,
            epoch: 0,
            in_flight: None,
            pointer_down: false,
            ticker: Ticker::new(options.tick_interval(), Instant::now()),
            stepper,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Observed moves per second while running.
    pub fn move_rate(&self) -> f64 {
        self.ticker.rate()
    }

    pub fn take_redraw(&mut self) -> bool {
        self.board.take_redraw()
    }

    pub fn handle(&mut self, event: Event) {
        trace!(?event, "handling event");
        match event {
            Event::Resized { width, height } => {
                self.board.resize(width, height);
            }
            Event::PointerPressed { .. } => {
                self.pointer_down = true;
            }
            Event::PointerDragged { x, y } => {
                if self.pointer_down {
                    self.paint(x, y);
                }
            }
            Event::PointerReleased { x, y } => {
                self.paint(x, y);
                self.pointer_down = false;
            }
            Event::Autofill(percent) => {
                let percent = self.options.set_autofill_percent(percent);
                self.board.clear();
                let added = self.board.random_fill(percent);
                self.generation = 0;
                self.invalidate();
                info!(percent, added, "board autofilled");
            }
            Event::SetMovesPerSecond(moves) => {
                if let Err(err) = self.options.set_moves_per_second(moves) {
                    warn!("keeping {} moves per second: {err}", self.options.moves_per_second());
                    return;
                }
                self.ticker.set_interval(self.options.tick_interval());
                debug!(moves, "speed changed");
            }
            Event::Play => {
                if !self.state.can_play() {
                    return;
                }
                self.state = GameState::Running;
                self.ticker.restart(Instant::now());
                info!(generation = self.generation, "game started");
            }
            Event::Stop => {
                if !self.state.can_stop() {
                    return;
                }
                self.state = GameState::Stopped;
                self.invalidate();
                info!(generation = self.generation, "game stopped");
            }
            Event::Reset => {
                self.board.clear();
                self.state = GameState::Editing;
                self.generation = 0;
                self.invalidate();
                info!("board reset");
            }
            Event::Tick => self.request_step(),
            Event::GenerationReady(generation) => self.apply(generation),
        }
    }

    /// Fires a tick when one is due and applies finished generations.
    pub fn update(&mut self, now: Instant) {
        self.drain_stepper();
        if self.state.is_running() && self.ticker.is_due(now) {
            self.handle(Event::Tick);
        }
    }

    /// Time until the next move, `None` while not running.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.state
            .is_running()
            .then(|| self.ticker.until_next(now))
    }

    /// Blocks until the pending move is computed and applies it.
    ///
    /// Returns `false` if nothing arrived within `timeout`.
    pub fn wait_for_generation(&mut self, timeout: Duration) -> bool {
        let Some(stepper) = &self.stepper else {
            return false;
        };
        match stepper.recv_timeout(timeout) {
            Ok(Some(generation)) => {
                self.handle(Event::GenerationReady(generation));
                true
            }
            Ok(None) => false,
            Err(err) => {
                self.drop_stepper(err);
                false
            }
        }
    }

    fn paint(&mut self, x: i32, y: i32) {
        if let Some(cell) = self.board.add_at_pixel(x, y) {
            trace!(x = cell.x, y = cell.y, "cell painted");
            self.invalidate();
        }
    }

    /// Makes any step computed from the current board stale.
    fn invalidate(&mut self) {
        self.epoch += 1;
    }

    fn request_step(&mut self) {
        if !self.state.is_running() || self.in_flight.is_some() {
            return;
        }
        let cells = self.board.cells().clone();
        let capacity = self.board.capacity();
        match &self.stepper {
            Some(stepper) => match stepper.submit(self.epoch, cells, capacity) {
                Ok(()) => self.in_flight = Some(self.epoch),
                Err(err) => {
                    self.drop_stepper(err);
                    self.step_inline();
                }
            },
            None => self.step_inline(),
        }
    }

    fn step_inline(&mut self) {
        let cells = next_generation(self.board.cells(), self.board.capacity());
        self.apply(Generation {
            epoch: self.epoch,
            cells,
        });
    }

    fn apply(&mut self, generation: Generation) {
        if self.in_flight == Some(generation.epoch) {
            self.in_flight = None;
        }
        if generation.epoch != self.epoch || !self.state.is_running() {
            trace!(epoch = generation.epoch, "discarding stale generation");
            return;
        }
        self.board.replace_cells(generation.cells);
        self.generation += 1;
        self.invalidate();
    }

    fn drain_stepper(&mut self) {
        while let Some(stepper) = &self.stepper {
            match stepper.try_recv() {
                Ok(Some(generation)) => self.handle(Event::GenerationReady(generation)),
                Ok(None) => break,
                Err(err) => self.drop_stepper(err),
            }
        }
    }

    fn drop_stepper(&mut self, err: crate::StepperError) {
        warn!("stepping on the UI thread from now on: {err}");
        self.stepper = None;
        self.in_flight = None;
    }
}
