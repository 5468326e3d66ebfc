//! Core domain types
//!
//! Words and per-round feedback. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, Tile, evaluate};
pub use word::Word;
