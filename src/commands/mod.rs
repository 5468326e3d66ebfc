//! Command implementations

pub mod assist;
pub mod play;
pub mod simulate;
pub mod solve;

pub use assist::{Assistant, run_assist};
pub use play::{PlayCommand, run_play};
pub use simulate::{GameOutcome, SimulationResult, run_simulation};
pub use solve::{GuessStep, SolveResult, autoplay, solve_word};
