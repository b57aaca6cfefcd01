#![warn(clippy::all)]

mod board;
mod game;
mod gui;
mod options;
mod stepper;
mod utils;

pub use board::{next_generation, Board, Capacity, Cell, CellSet, Viewport};
pub use game::{Event, Game, GameState};
pub use gui::{window_icon, App};
pub use options::{Options, OptionsError, AUTOFILL_PERCENT_CHOICES, MOVES_PER_SECOND_CHOICES};
pub use stepper::{Generation, Stepper, StepperError};
pub use utils::{with_delimiters, Config, Ticker};
