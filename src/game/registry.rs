//! Sessions keyed by id, safe to share across threads
//!
//! Each session sits behind its own mutex, so operations on one session are
//! serialized while distinct sessions proceed independently. The map itself
//! is only write-locked to add or remove sessions.

use super::session::GameSession;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::solver::SuggestionStrategy;
use crate::wordlists::DictionaryProvider;
use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Identifies one session within a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Creates and hands out sessions that share one dictionary provider
pub struct SessionRegistry {
    provider: Arc<dyn DictionaryProvider>,
    config: GameConfig,
    strategy: SuggestionStrategy,
    seed: Option<u64>,
    next_id: AtomicU64,
    sessions: RwLock<FxHashMap<SessionId, Arc<Mutex<GameSession>>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(
        provider: Arc<dyn DictionaryProvider>,
        config: GameConfig,
        strategy: SuggestionStrategy,
    ) -> Self {
        Self {
            provider,
            config,
            strategy,
            seed: None,
            next_id: AtomicU64::new(1),
            sessions: RwLock::new(FxHashMap::default()),
        }
    }

    /// Derive every session's secret picker from `seed`
    ///
    /// Session `n` is seeded with `seed + n`, so a run is reproducible as long
    /// as sessions are created in the same order.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Register a fresh, uninitialized session
    pub fn create(&self) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let mut builder = GameSession::builder(Arc::clone(&self.provider))
            .config(self.config)
            .strategy(self.strategy.clone());
        if let Some(seed) = self.seed {
            builder = builder.seed(seed.wrapping_add(id.value()));
        }

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(Mutex::new(builder.build())));
        debug!("Created session {id}");
        id
    }

    /// Shared handle to a session
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` if no session has this id.
    pub fn get(&self, id: SessionId) -> Result<Arc<Mutex<GameSession>>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(GameError::UnknownSession(id))
    }

    /// Run `f` with exclusive access to one session
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` for an unknown id, otherwise
    /// whatever `f` returns.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T>,
    ) -> Result<T> {
        let session = self.get(id)?;
        let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Drop a session
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` if no session has this id.
    pub fn remove(&self, id: SessionId) -> Result<()> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .map(|_| debug!("Removed session {id}"))
            .ok_or(GameError::UnknownSession(id))
    }

    /// Ids of all live sessions, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("config", &self.config)
            .field("strategy", &self.strategy)
            .field("sessions", &self.len())
            .finish_non_exhaustive()
    }
}
