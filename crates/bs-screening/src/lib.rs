//! Ishihara plate screening engine for Blindspot.
//!
//! Builds colorblindness self-test sessions from a plate catalog: samples
//! plates per deficiency type, offers shuffled answer options, records
//! answers with running per-type stats, and flags the types whose error rate
//! exceeds one half. All randomness flows through an explicit, seedable RNG.

pub mod answer;
pub mod catalog;
pub mod condition;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod plate;
pub mod registry;
pub mod report;
pub mod session;
pub mod shuffle;
pub mod stats;

pub use answer::Answer;
pub use catalog::{PlateCatalog, TestType};
pub use condition::{ConditionInfo, condition_info};
pub use config::ScreeningConfig;
pub use diagnosis::{Diagnosis, compute_diagnosis};
pub use error::{InvalidState, ScreeningError, ScreeningResult};
pub use plate::{Plate, PlateIndex};
pub use registry::SessionRegistry;
pub use report::SessionReport;
pub use session::{AnswerOutcome, Session, SessionId, SessionStatus};
pub use shuffle::shuffle;
pub use stats::{Stats, TypeStats};
