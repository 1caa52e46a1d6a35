//! Answers and answer-option generation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ScreeningError, ScreeningResult};
use crate::shuffle::shuffle;

/// Number of wrong numeric options offered alongside the correct one.
pub const WRONG_ANSWERS_PER_PLATE: usize = 2;

/// A response to a plate: a number, or "none of these".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// The user saw this number.
    Number(u32),
    /// The user saw none of the offered numbers.
    NoneOfThese,
}

impl Answer {
    /// Parse user input: a number, or one of `none`, `nothing`, `none of these`.
    pub fn parse(s: &str) -> ScreeningResult<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "none" | "nothing" | "none of these" | "-" => Ok(Self::NoneOfThese),
            other => other
                .parse()
                .map(Self::Number)
                .map_err(|_| ScreeningError::InvalidAnswer(s.trim().to_string())),
        }
    }

    /// The number this answer names, if any.
    pub fn number(self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(n),
            Self::NoneOfThese => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::NoneOfThese => write!(f, "None of these"),
        }
    }
}

/// Draw distinct wrong answers by rejection sampling.
///
/// Each candidate is uniform in `range` (inclusive) and is accepted only if it
/// differs from `correct` and from every answer accepted so far. Fails with
/// [`ScreeningError::AnswerRangeTooSmall`] when the range, minus `correct`,
/// holds fewer than `count` values.
pub fn generate_wrong_answers<R: Rng + ?Sized>(
    correct: u32,
    count: usize,
    range: (u32, u32),
    rng: &mut R,
) -> ScreeningResult<Vec<u32>> {
    let (low, high) = range;
    let too_small = || ScreeningError::AnswerRangeTooSmall {
        low,
        high,
        correct,
        required: count,
    };
    if low > high {
        return Err(too_small());
    }
    let size = u64::from(high - low) + 1;
    let available = size - u64::from((low..=high).contains(&correct));
    if available < count as u64 {
        return Err(too_small());
    }

    let mut wrong = Vec::with_capacity(count);
    while wrong.len() < count {
        let candidate = rng.random_range(low..=high);
        if candidate != correct && !wrong.contains(&candidate) {
            wrong.push(candidate);
        }
    }
    Ok(wrong)
}

/// Build the four options for a plate: the correct number, two wrong
/// numbers, and "none of these", in random order.
pub fn answer_options<R: Rng + ?Sized>(
    correct: u32,
    range: (u32, u32),
    rng: &mut R,
) -> ScreeningResult<Vec<Answer>> {
    let mut options = vec![Answer::Number(correct)];
    options.extend(
        generate_wrong_answers(correct, WRONG_ANSWERS_PER_PLATE, range, rng)?
            .into_iter()
            .map(Answer::Number),
    );
    options.push(Answer::NoneOfThese);
    Ok(shuffle(&options, rng))
}
