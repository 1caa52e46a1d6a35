//! Per-type and session-wide score counters.

use serde::{Deserialize, Serialize};

use crate::catalog::TestType;

/// Correct/incorrect counts for one test type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStats {
    /// The test type counted.
    pub test_type: TestType,
    /// Plates of this type answered correctly.
    pub correct: u32,
    /// Plates of this type answered incorrectly.
    pub incorrect: u32,
    /// Plates of this type in the session.
    pub total: u32,
}

impl TypeStats {
    /// Fraction of this type's plates answered incorrectly.
    ///
    /// Zero when the type has no plates.
    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.incorrect) / f64::from(self.total)
    }

    /// Plates of this type answered so far.
    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }
}

/// Score counters for a whole session, per type in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    types: Vec<TypeStats>,
    total_correct: u32,
    total_incorrect: u32,
}

impl Stats {
    /// Zeroed counters for the given types, each with `per_type` plates.
    pub fn new<'a>(types: impl IntoIterator<Item = &'a TestType>, per_type: u32) -> Self {
        Self {
            types: types
                .into_iter()
                .map(|t| TypeStats {
                    test_type: t.clone(),
                    correct: 0,
                    incorrect: 0,
                    total: per_type,
                })
                .collect(),
            total_correct: 0,
            total_incorrect: 0,
        }
    }

    /// Count one answer. Returns `false` if the type is not tracked, in which
    /// case nothing changes.
    pub fn record(&mut self, test_type: &TestType, correct: bool) -> bool {
        let Some(entry) = self.types.iter_mut().find(|t| &t.test_type == test_type) else {
            return false;
        };
        if correct {
            entry.correct += 1;
            self.total_correct += 1;
        } else {
            entry.incorrect += 1;
            self.total_incorrect += 1;
        }
        true
    }

    /// Per-type counters in catalog order.
    pub fn types(&self) -> &[TypeStats] {
        &self.types
    }

    /// Counters for one type.
    pub fn for_type(&self, test_type: &TestType) -> Option<&TypeStats> {
        self.types.iter().find(|t| &t.test_type == test_type)
    }

    /// Correct answers across all types.
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    /// Incorrect answers across all types.
    pub fn total_incorrect(&self) -> u32 {
        self.total_incorrect
    }

    /// Plates across all types.
    pub fn total_plates(&self) -> u32 {
        self.types.iter().map(|t| t.total).sum()
    }
}
