//! Serializable summary of a completed session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::TestType;
use crate::condition::{ConditionInfo, NO_INDICATION, RECOMMENDATION, condition_info};
use crate::diagnosis::Diagnosis;
use crate::error::ScreeningResult;
use crate::session::{Session, SessionId};

/// Score for one test type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeScore {
    /// The test type.
    pub test_type: TestType,
    /// Correct answers.
    pub correct: u32,
    /// Plates of this type.
    pub total: u32,
    /// Fraction answered incorrectly.
    pub error_rate: f64,
    /// Whether the type was flagged.
    pub flagged: bool,
}

/// A flagged type with whatever is known about the condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// The flagged type.
    pub test_type: TestType,
    /// Description of the condition, for known types.
    pub condition: Option<&'static ConditionInfo>,
}

/// Everything a results screen needs from a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// The session reported on.
    pub session_id: SessionId,
    /// When the session was created.
    pub started_at: DateTime<Utc>,
    /// When the last plate was answered.
    pub completed_at: Option<DateTime<Utc>>,
    /// Per-type scores in catalog order.
    pub scores: Vec<TypeScore>,
    /// Correct answers across all types.
    pub total_correct: u32,
    /// Plates across all types.
    pub total_plates: u32,
    /// The flagged types.
    pub diagnosis: Diagnosis,
    /// Condition details for each flagged type.
    pub findings: Vec<Finding>,
    /// Closing advice for the user.
    pub advice: &'static str,
}

impl SessionReport {
    /// Summarize a completed session. Fails if plates remain unanswered.
    pub fn from_session(session: &Session) -> ScreeningResult<Self> {
        let diagnosis = session.diagnosis()?;
        let stats = session.stats();

        let scores = stats
            .types()
            .iter()
            .map(|t| TypeScore {
                test_type: t.test_type.clone(),
                correct: t.correct,
                total: t.total,
                error_rate: t.error_rate(),
                flagged: diagnosis.contains(&t.test_type),
            })
            .collect();

        let findings = diagnosis
            .flagged()
            .iter()
            .map(|t| Finding {
                test_type: t.clone(),
                condition: condition_info(t),
            })
            .collect();

        let advice = if diagnosis.is_clear() {
            NO_INDICATION
        } else {
            RECOMMENDATION
        };

        Ok(Self {
            session_id: session.id(),
            started_at: session.started_at(),
            completed_at: session.completed_at(),
            scores,
            total_correct: stats.total_correct(),
            total_plates: stats.total_plates(),
            diagnosis,
            findings,
            advice,
        })
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> ScreeningResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::catalog::PlateCatalog;
    use crate::config::ScreeningConfig;
    use crate::error::ScreeningError;

    fn finished(wrong_type: &str, wrong: usize) -> Session {
        let mut s =
            Session::from_config(&PlateCatalog::builtin(), &ScreeningConfig::default()).unwrap();
        let mut left = wrong;
        while let Some((index, plate)) = s.next_plate() {
            let answer = if plate.test_type().as_str() == wrong_type && left > 0 {
                left -= 1;
                Answer::NoneOfThese
            } else {
                Answer::Number(plate.correct_answer())
            };
            s.record_answer(index, answer).unwrap();
        }
        s
    }

    #[test]
    fn incomplete_session_has_no_report() {
        let s =
            Session::from_config(&PlateCatalog::builtin(), &ScreeningConfig::default()).unwrap();
        assert!(matches!(
            SessionReport::from_session(&s),
            Err(ScreeningError::SessionIncomplete { .. })
        ));
    }

    #[test]
    fn flagged_report_has_finding() {
        let report = SessionReport::from_session(&finished("tritanopia", 9)).unwrap();
        assert_eq!(report.total_plates, 30);
        assert_eq!(report.total_correct, 21);
        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.test_type.as_str(), "tritanopia");
        assert_eq!(finding.condition.unwrap().name, "Tritanomaly");
        assert_eq!(report.advice, RECOMMENDATION);

        let trit = report
            .scores
            .iter()
            .find(|s| s.test_type.as_str() == "tritanopia")
            .unwrap();
        assert!(trit.flagged);
        assert_eq!(trit.correct, 1);
    }

    #[test]
    fn clear_report() {
        let report = SessionReport::from_session(&finished("protanopia", 0)).unwrap();
        assert!(report.diagnosis.is_clear());
        assert!(report.findings.is_empty());
        assert_eq!(report.advice, NO_INDICATION);
        assert!(report.completed_at.is_some());
    }

    #[test]
    fn json_contains_scores() {
        let report = SessionReport::from_session(&finished("deuteranopia", 6)).unwrap();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_plates"], 30);
        assert_eq!(value["scores"].as_array().unwrap().len(), 3);
        assert_eq!(value["diagnosis"]["flagged"][0], "deuteranopia");
        assert_eq!(value["findings"][0]["condition"]["name"], "Deuteranomaly");
    }
}
