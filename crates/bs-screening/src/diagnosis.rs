//! Diagnostic classification from session stats.
//!
//! A test type is flagged when its error rate strictly exceeds the threshold
//! (50% by default). Exactly half wrong is not flagged. The result is only
//! meaningful once every plate of the session has been answered; the pure
//! functions here do not check that, [`Session::diagnosis`] does.
//!
//! [`Session::diagnosis`]: crate::session::Session::diagnosis

use serde::{Deserialize, Serialize};

use crate::catalog::TestType;
use crate::config::DEFAULT_FLAG_THRESHOLD;
use crate::stats::Stats;

/// The test types flagged by a completed session, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    flagged: Vec<TestType>,
}

impl Diagnosis {
    /// Flagged types in catalog order.
    pub fn flagged(&self) -> &[TestType] {
        &self.flagged
    }

    /// Whether no type was flagged.
    pub fn is_clear(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Whether `test_type` was flagged.
    pub fn contains(&self, test_type: &TestType) -> bool {
        self.flagged.contains(test_type)
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.flagged.is_empty() {
            return write!(f, "no indication of color vision deficiency");
        }
        let names: Vec<&str> = self.flagged.iter().map(TestType::as_str).collect();
        write!(f, "possible {}", names.join(", "))
    }
}

/// Flag every type whose error rate exceeds one half.
pub fn compute_diagnosis(stats: &Stats) -> Diagnosis {
    compute_diagnosis_with_threshold(stats, DEFAULT_FLAG_THRESHOLD)
}

/// Flag every type whose error rate exceeds `threshold`.
pub fn compute_diagnosis_with_threshold(stats: &Stats, threshold: f64) -> Diagnosis {
    Diagnosis {
        flagged: stats
            .types()
            .iter()
            .filter(|t| t.error_rate() > threshold)
            .map(|t| t.test_type.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(incorrect: &[(&str, u32)]) -> Stats {
        let types: Vec<TestType> = incorrect.iter().map(|(n, _)| TestType::new(*n)).collect();
        let mut stats = Stats::new(&types, 10);
        for (name, wrong) in incorrect {
            let t = TestType::new(*name);
            for i in 0..10 {
                stats.record(&t, i >= *wrong);
            }
        }
        stats
    }

    #[test]
    fn all_low_error_is_clear() {
        let d = compute_diagnosis(&stats_with(&[("a", 0), ("b", 3), ("c", 5)]));
        assert!(d.is_clear());
        assert_eq!(d.to_string(), "no indication of color vision deficiency");
    }

    #[test]
    fn seventy_percent_flagged() {
        let d = compute_diagnosis(&stats_with(&[("a", 7), ("b", 0), ("c", 0)]));
        assert_eq!(d.flagged(), &[TestType::new("a")]);
        assert!(d.contains(&TestType::new("a")));
        assert!(!d.contains(&TestType::new("b")));
    }

    #[test]
    fn exactly_half_not_flagged() {
        let d = compute_diagnosis(&stats_with(&[("a", 5)]));
        assert!(d.is_clear());
        let d = compute_diagnosis(&stats_with(&[("a", 6)]));
        assert!(!d.is_clear());
    }

    #[test]
    fn flagged_in_catalog_order() {
        let d = compute_diagnosis(&stats_with(&[("c", 9), ("a", 2), ("b", 10)]));
        assert_eq!(d.flagged(), &[TestType::new("c"), TestType::new("b")]);
        assert_eq!(d.to_string(), "possible c, b");
    }

    #[test]
    fn custom_threshold() {
        let stats = stats_with(&[("a", 3), ("b", 1)]);
        let d = compute_diagnosis_with_threshold(&stats, 0.2);
        assert_eq!(d.flagged(), &[TestType::new("a")]);
    }

    #[test]
    fn empty_stats_clear() {
        assert!(compute_diagnosis(&Stats::default()).is_clear());
    }
}
