//! Screening session management.
//!
//! A [`Session`] owns every plate of one test run in an indexed arena and
//! keeps the score counters in step with each recorded answer. Plates are
//! created together when the session starts and each is answered exactly
//! once; starting over means building a new session.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answer::{Answer, answer_options};
use crate::catalog::{CatalogEntry, PlateCatalog, answer_from_plate_id};
use crate::config::ScreeningConfig;
use crate::diagnosis::{Diagnosis, compute_diagnosis_with_threshold};
use crate::error::{InvalidState, ScreeningError, ScreeningResult};
use crate::plate::{Plate, PlateIndex};
use crate::shuffle::shuffle;
use crate::stats::Stats;

/// Unique identifier of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No plate answered yet.
    Created,
    /// Some, but not all, plates answered.
    InProgress,
    /// Every plate answered; the diagnosis is available.
    Complete,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// What happened when an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// The plate answered.
    pub index: PlateIndex,
    /// The response given.
    pub given: Answer,
    /// Whether it matched the hidden number.
    pub correct: bool,
    /// The hidden number.
    pub correct_answer: u32,
}

/// One complete run of the screening test.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    id: SessionId,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    plates: Vec<Plate>,
    stats: Stats,
    flag_threshold: f64,
}

impl Session {
    /// Build a session from the catalog using the RNG seeded by `config.seed`.
    pub fn from_config(catalog: &PlateCatalog, config: &ScreeningConfig) -> ScreeningResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::create(catalog, config, &mut rng)
    }

    /// Build a session: sample `plates_per_type` plates from every type,
    /// give each a shuffled set of options, then interleave all plates.
    pub fn create<R: Rng + ?Sized>(
        catalog: &PlateCatalog,
        config: &ScreeningConfig,
        rng: &mut R,
    ) -> ScreeningResult<Self> {
        let per_type = config.plates_per_type;
        // Every type holds at least `per_type` plates past this point, so the
        // capacity below is bounded by the catalog's own size.
        catalog.validate(per_type)?;

        let mut plates = Vec::with_capacity(catalog.len() * per_type);
        for entry in catalog.entries() {
            for id in sample_plate_ids(entry, per_type, rng)? {
                let correct = answer_from_plate_id(id)?;
                let options = answer_options(correct, config.answer_range, rng)?;
                plates.push(Plate::new(
                    entry.name.clone(),
                    id,
                    &entry.plates[id],
                    correct,
                    options,
                ));
            }
        }
        let plates = shuffle(&plates, rng);

        let stats = Stats::new(
            catalog.test_types(),
            u32::try_from(per_type).unwrap_or(u32::MAX),
        );
        let session = Self {
            id: SessionId::new(),
            started_at: Utc::now(),
            completed_at: None,
            plates,
            stats,
            flag_threshold: config.flag_threshold,
        };
        log::debug!(
            "session {} created: {} plates across {} types",
            session.id,
            session.plates.len(),
            catalog.len()
        );
        Ok(session)
    }

    /// The session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the last plate was answered.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// All plates in presentation order.
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// A plate by index.
    pub fn plate(&self, index: PlateIndex) -> Option<&Plate> {
        self.plates.get(index.0)
    }

    /// Number of plates in the session.
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Whether the session holds no plates.
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// The running score counters.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The error rate a type must exceed to be flagged.
    pub fn flag_threshold(&self) -> f64 {
        self.flag_threshold
    }

    /// The first unanswered plate, or `None` once the session is complete.
    pub fn next_plate(&self) -> Option<(PlateIndex, &Plate)> {
        self.plates
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_answered())
            .map(|(i, p)| (PlateIndex(i), p))
    }

    /// Number of answered plates.
    pub fn progress(&self) -> usize {
        self.plates.iter().filter(|p| p.is_answered()).count()
    }

    /// Current lifecycle stage.
    pub fn status(&self) -> SessionStatus {
        match self.progress() {
            0 if !self.plates.is_empty() => SessionStatus::Created,
            n if n == self.plates.len() => SessionStatus::Complete,
            _ => SessionStatus::InProgress,
        }
    }

    /// Whether every plate has been answered.
    pub fn is_complete(&self) -> bool {
        self.status() == SessionStatus::Complete
    }

    /// Record the response to a plate and update the counters.
    ///
    /// Answers are recorded exactly once: answering a plate twice or
    /// addressing a plate outside the session is an error and leaves both
    /// the plate and the stats untouched.
    pub fn record_answer(
        &mut self,
        index: PlateIndex,
        answer: Answer,
    ) -> ScreeningResult<AnswerOutcome> {
        let len = self.plates.len();
        let plate = self
            .plates
            .get_mut(index.0)
            .ok_or(InvalidState::UnknownPlate { index, len })?;
        if plate.is_answered() {
            return Err(InvalidState::AlreadyAnswered(index).into());
        }

        // Counters first: the plate is only marked once its type is counted.
        let correct = plate.check(answer);
        if !self.stats.record(plate.test_type(), correct) {
            return Err(ScreeningError::UntrackedTestType(plate.test_type().clone()));
        }
        plate.answer(answer);
        let correct_answer = plate.correct_answer();
        log::debug!(
            "session {}: plate {index} ({}) answered {answer}, correct={correct}",
            self.id,
            plate.test_type()
        );

        if self.next_plate().is_none() {
            self.completed_at = Some(Utc::now());
            log::info!(
                "session {} complete: {}/{} correct",
                self.id,
                self.stats.total_correct(),
                self.plates.len()
            );
        }

        Ok(AnswerOutcome {
            index,
            given: answer,
            correct,
            correct_answer,
        })
    }

    /// Answer whichever plate [`next_plate`](Self::next_plate) designates.
    pub fn answer_current(&mut self, answer: Answer) -> ScreeningResult<AnswerOutcome> {
        let (index, _) = self.next_plate().ok_or(InvalidState::SessionComplete)?;
        self.record_answer(index, answer)
    }

    /// The diagnosis, available once every plate is answered.
    pub fn diagnosis(&self) -> ScreeningResult<Diagnosis> {
        let answered = self.progress();
        if answered < self.plates.len() {
            return Err(ScreeningError::SessionIncomplete {
                answered,
                total: self.plates.len(),
            });
        }
        Ok(compute_diagnosis_with_threshold(
            &self.stats,
            self.flag_threshold,
        ))
    }
}

/// Pick `count` distinct plate identifiers of one type, uniformly at random.
fn sample_plate_ids<'a, R: Rng + ?Sized>(
    entry: &'a CatalogEntry,
    count: usize,
    rng: &mut R,
) -> ScreeningResult<Vec<&'a String>> {
    if entry.plates.len() < count {
        return Err(ScreeningError::CatalogInsufficient {
            test_type: entry.name.clone(),
            available: entry.plates.len(),
            required: count,
        });
    }
    let ids: Vec<&String> = entry.plates.keys().collect();
    let mut sampled = shuffle(&ids, rng);
    sampled.truncate(count);
    Ok(sampled)
}
