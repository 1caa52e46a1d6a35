//! Descriptions of the color vision deficiencies the built-in catalog screens for.

use serde::Serialize;

use crate::catalog::TestType;

/// Advice shown alongside every positive result.
pub const RECOMMENDATION: &str = "This screening is not a medical diagnosis. To confirm the result, \
     please consult an eye care professional. The color assistance tools can help in the meantime.";

/// Advice shown when no type was flagged.
pub const NO_INDICATION: &str = "No significant signs of color vision deficiency were found. If you \
     have doubts about your vision, consider consulting an eye care professional.";

/// Human-facing information about one deficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionInfo {
    /// Display name.
    pub name: &'static str,
    /// The color axis affected.
    pub affects: &'static str,
    /// What the condition does to color perception.
    pub description: &'static str,
    /// Comparison image under normal vision.
    pub normal_image: &'static str,
    /// The same image as seen with the condition.
    pub affected_image: &'static str,
}

const NORMAL_COMPARISON: &str = "assets/images/normal/comparison_normal.png";

const CONDITIONS: &[(&str, ConditionInfo)] = &[
    (
        "protanopia",
        ConditionInfo {
            name: "Protanomaly",
            affects: "red-green",
            description: "Reduced sensitivity to red light. Some reds look greener and darker, \
                 red and green are hard to tell apart, and red can be confused with black \
                 or dark green.",
            normal_image: NORMAL_COMPARISON,
            affected_image: "assets/images/affected/protanopia_comparison_affected.png",
        },
    ),
    (
        "deuteranopia",
        ConditionInfo {
            name: "Deuteranomaly",
            affects: "red-green",
            description: "Reduced sensitivity to green light. Some greens look redder, so green \
                 and red are hard to tell apart while other colors are seen normally.",
            normal_image: NORMAL_COMPARISON,
            affected_image: "assets/images/affected/deuteranopia_comparison_affected.png",
        },
    ),
    (
        "tritanopia",
        ConditionInfo {
            name: "Tritanomaly",
            affects: "blue-yellow",
            description: "A less common deficiency affecting blue and yellow. Blue can be \
                 confused with green, and yellow with violet or light pink.",
            normal_image: NORMAL_COMPARISON,
            affected_image: "assets/images/affected/tritanopia_comparison_affected.png",
        },
    ),
];

/// Look up the description of a test type, if it is one the app knows.
pub fn condition_info(test_type: &TestType) -> Option<&'static ConditionInfo> {
    CONDITIONS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(test_type.as_str()))
        .map(|(_, info)| info)
}

/// All known conditions in display order.
pub fn known_conditions() -> impl Iterator<Item = (TestType, &'static ConditionInfo)> {
    CONDITIONS.iter().map(|(key, info)| (TestType::new(*key), info))
}
