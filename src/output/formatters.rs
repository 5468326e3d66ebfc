//! Formatting utilities for terminal output

use crate::core::{Feedback, Tile};
use colored::{ColoredString, Colorize};

/// Emoji square for a tile
#[must_use]
pub const fn tile_to_emoji(tile: Tile) -> char {
    match tile {
        Tile::Green => '🟩',
        Tile::Yellow => '🟨',
        Tile::Grey => '⬜',
    }
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.tiles().into_iter().map(tile_to_emoji).collect()
}

/// Color one letter by its tile
#[must_use]
pub fn colored_letter(letter: char, tile: Tile) -> ColoredString {
    let text = format!(" {letter} ");
    match tile {
        Tile::Green => text.black().on_green().bold(),
        Tile::Yellow => text.black().on_yellow().bold(),
        Tile::Grey => text.white().on_bright_black(),
    }
}

/// The guess with each letter on its tile color
#[must_use]
pub fn colored_guess(feedback: &Feedback) -> String {
    feedback
        .guess()
        .chars()
        .zip(feedback.tiles())
        .map(|(letter, tile)| colored_letter(letter, tile).to_string())
        .collect()
}

/// One feedback row: colored letters, emoji tiles and, when known, the tries left
#[must_use]
pub fn feedback_line(feedback: &Feedback, remaining: Option<usize>) -> String {
    let row = format!("{}  {}", colored_guess(feedback), feedback_to_emoji(feedback));
    match remaining {
        Some(remaining) => format!("{row}  ({} left)", plural(remaining, "try", "tries")),
        None => row,
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
