//! Error types for the screening engine.

use thiserror::Error;

use crate::catalog::TestType;
use crate::plate::PlateIndex;
use crate::session::SessionId;

/// Result type for screening operations.
pub type ScreeningResult<T> = Result<T, ScreeningError>;

/// Errors that can occur while building or driving a screening session.
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// The catalog declares no test types at all.
    #[error("plate catalog has no test types")]
    EmptyCatalog,

    /// A test type has fewer plates than a session samples from it.
    #[error("test type '{test_type}' has {available} plates, {required} required")]
    CatalogInsufficient {
        /// The test type that is short on plates.
        test_type: TestType,
        /// Plates available for that type.
        available: usize,
        /// Plates each session draws per type.
        required: usize,
    },

    /// The same test type is declared twice.
    #[error("test type '{0}' is declared more than once")]
    DuplicateTestType(TestType),

    /// A plate's test type has no score counters in its session.
    #[error("test type '{0}' is not tracked by this session")]
    UntrackedTestType(TestType),

    /// A plate identifier does not encode a usable answer number.
    #[error("plate identifier '{0}' does not encode an answer number")]
    InvalidPlateId(String),

    /// The wrong-answer range cannot supply enough distinct numbers.
    #[error("answer range {low}-{high} cannot supply {required} wrong answers for {correct}")]
    AnswerRangeTooSmall {
        /// Lower bound of the range (inclusive).
        low: u32,
        /// Upper bound of the range (inclusive).
        high: u32,
        /// The correct answer, which is excluded.
        correct: u32,
        /// Wrong answers requested.
        required: usize,
    },

    /// The caller broke the answer-recording contract.
    #[error("invalid state: {0}")]
    InvalidState(#[from] InvalidState),

    /// A diagnosis was requested before every plate was answered.
    #[error("session incomplete: {answered} of {total} plates answered")]
    SessionIncomplete {
        /// Plates answered so far.
        answered: usize,
        /// Plates in the session.
        total: usize,
    },

    /// No session is registered under the given id.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// User input could not be read as an answer.
    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    /// The catalog file could not be read.
    #[error("cannot read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// The catalog file is not valid catalog JSON.
    #[error("cannot parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Violations of the answer-recording contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    /// The plate was already answered; answers are recorded exactly once.
    #[error("plate {0} was already answered")]
    AlreadyAnswered(PlateIndex),

    /// The index does not address a plate of this session.
    #[error("plate {index} does not belong to this session ({len} plates)")]
    UnknownPlate {
        /// The offending index.
        index: PlateIndex,
        /// Number of plates in the session.
        len: usize,
    },

    /// Every plate is answered; there is no current plate.
    #[error("session is already complete")]
    SessionComplete,
}
