//! Configuration for a screening session.

/// Plates drawn from each test type when nothing else is configured.
pub const DEFAULT_PLATES_PER_TYPE: usize = 10;

/// Error rate above which a test type is flagged.
pub const DEFAULT_FLAG_THRESHOLD: f64 = 0.5;

/// Configuration for building screening sessions.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// RNG seed for reproducible plate sampling and option order.
    pub seed: u64,
    /// Plates sampled per test type (at least 1).
    pub plates_per_type: usize,
    /// Inclusive range wrong answers are drawn from.
    pub answer_range: (u32, u32),
    /// Error rate a type must exceed to be flagged (0.0-1.0).
    pub flag_threshold: f64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            plates_per_type: DEFAULT_PLATES_PER_TYPE,
            answer_range: (1, 99),
            flag_threshold: DEFAULT_FLAG_THRESHOLD,
        }
    }
}

impl ScreeningConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of plates per test type (minimum 1).
    pub fn with_plates_per_type(mut self, plates: usize) -> Self {
        self.plates_per_type = plates.max(1);
        self
    }

    /// Set the inclusive range for wrong answers.
    ///
    /// The range is widened to hold at least three values, so two distinct
    /// wrong answers always exist besides the correct one.
    pub fn with_answer_range(mut self, low: u32, high: u32) -> Self {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.answer_range = if high - low >= 2 {
            (low, high)
        } else if let Some(top) = low.checked_add(2) {
            (low, top)
        } else {
            (u32::MAX - 2, u32::MAX)
        };
        self
    }

    /// Set the flagging threshold (clamped to 0.0-1.0).
    pub fn with_flag_threshold(mut self, threshold: f64) -> Self {
        self.flag_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}
