//! Wordle Assist
//!
//! A word-guessing game engine: a feedback oracle, a constraint store that
//! accumulates what each round reveals, a candidate filter, and a suggestion
//! chain that asks a suggester and falls back to plain constraint solving.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_assist::game::GameSession;
//! use wordle_assist::wordlists::{self, Language};
//!
//! let provider = Arc::new(wordlists::bundled(5));
//! let mut session = GameSession::builder(provider).seed(7).build();
//! session.start_new_game(&Language::english()).unwrap();
//!
//! let hint = session.request_suggestion().unwrap();
//! let feedback = session.make_guess(&hint.word).unwrap();
//! println!("{} -> {}", feedback.guess(), feedback.pattern());
//! ```

// Configuration defaults
pub mod config;

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions and the session registry
pub mod game;

// Constraint solving and suggestion
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
