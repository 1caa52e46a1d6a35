//! Plates: single test questions drawn from the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::catalog::TestType;

/// Position of a plate inside its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlateIndex(pub usize);

impl fmt::Display for PlateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One question instance: an image hiding a number, plus the options shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plate {
    test_type: TestType,
    plate_id: String,
    image: String,
    correct_answer: u32,
    answer_options: Vec<Answer>,
    user_answer: Option<Answer>,
    is_correct: bool,
}

impl Plate {
    /// Create an unanswered plate.
    pub fn new(
        test_type: TestType,
        plate_id: impl Into<String>,
        image: impl Into<String>,
        correct_answer: u32,
        answer_options: Vec<Answer>,
    ) -> Self {
        Self {
            test_type,
            plate_id: plate_id.into(),
            image: image.into(),
            correct_answer,
            answer_options,
            user_answer: None,
            is_correct: false,
        }
    }

    /// The deficiency category this plate tests.
    pub fn test_type(&self) -> &TestType {
        &self.test_type
    }

    /// The catalog identifier of this plate.
    pub fn plate_id(&self) -> &str {
        &self.plate_id
    }

    /// Reference to the plate's image asset.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The number hidden in the plate.
    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    /// The options offered, in presentation order.
    pub fn answer_options(&self) -> &[Answer] {
        &self.answer_options
    }

    /// Whether the user has responded.
    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    /// The user's response, once answered.
    pub fn user_answer(&self) -> Option<Answer> {
        self.user_answer
    }

    /// Whether the response matched; `false` until answered.
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Whether `answer` would be correct for this plate.
    pub fn check(&self, answer: Answer) -> bool {
        answer == Answer::Number(self.correct_answer)
    }

    /// Record the response. Callers guarantee the plate is unanswered.
    pub(crate) fn answer(&mut self, answer: Answer) -> bool {
        debug_assert!(!self.is_answered(), "plate answered twice");
        self.is_correct = self.check(answer);
        self.user_answer = Some(answer);
        self.is_correct
    }
}
