//! Game sessions
//!
//! A [`GameSession`] plays one game at a time. The [`SessionRegistry`] owns
//! many sessions for callers that serve several players at once.

mod registry;
mod session;

pub use registry::{SessionId, SessionRegistry};
pub use session::{GameSession, GameStatus, SessionBuilder};
