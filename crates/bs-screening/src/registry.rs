//! Many concurrent sessions behind one handle.
//!
//! Sessions share no mutable state, so each lives behind its own mutex and
//! answers only ever lock the session they touch. The map lock is held just
//! long enough to look a session up.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::answer::Answer;
use crate::catalog::PlateCatalog;
use crate::config::ScreeningConfig;
use crate::diagnosis::Diagnosis;
use crate::error::{ScreeningError, ScreeningResult};
use crate::plate::PlateIndex;
use crate::session::{AnswerOutcome, Session, SessionId};

type SharedSession = Arc<Mutex<Session>>;

/// Thread-safe store of independent screening sessions.
pub struct SessionRegistry {
    catalog: Arc<PlateCatalog>,
    config: ScreeningConfig,
    sessions: RwLock<HashMap<SessionId, SharedSession>>,
    rng: Mutex<StdRng>,
}

impl SessionRegistry {
    /// Create a registry that builds sessions from `catalog`.
    ///
    /// Fails early if the catalog cannot supply a full session.
    pub fn new(catalog: Arc<PlateCatalog>, config: ScreeningConfig) -> ScreeningResult<Self> {
        catalog.validate(config.plates_per_type)?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            catalog,
            config,
            sessions: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
        })
    }

    /// Start a new session and return its id.
    pub fn start(&self) -> ScreeningResult<SessionId> {
        let session = {
            let mut rng = lock(&self.rng);
            Session::create(&self.catalog, &self.config, &mut *rng)?
        };
        let id = session.id();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(Mutex::new(session)));
        Ok(id)
    }

    /// Record an answer in one session, serialized with other writers of
    /// that session only.
    pub fn record_answer(
        &self,
        id: SessionId,
        index: PlateIndex,
        answer: Answer,
    ) -> ScreeningResult<AnswerOutcome> {
        let session = self.get(id)?;
        let mut guard = lock(&session);
        guard.record_answer(index, answer)
    }

    /// Answer the current plate of one session.
    pub fn answer_current(&self, id: SessionId, answer: Answer) -> ScreeningResult<AnswerOutcome> {
        let session = self.get(id)?;
        let mut guard = lock(&session);
        guard.answer_current(answer)
    }

    /// Read a session under its lock.
    pub fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&Session) -> T) -> ScreeningResult<T> {
        let session = self.get(id)?;
        let guard = lock(&session);
        Ok(f(&guard))
    }

    /// The diagnosis of a completed session.
    pub fn diagnosis(&self, id: SessionId) -> ScreeningResult<Diagnosis> {
        self.with_session(id, Session::diagnosis)?
    }

    /// Discard a session. Returns true if it existed.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, id: SessionId) -> ScreeningResult<SharedSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(ScreeningError::SessionNotFound(id))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
