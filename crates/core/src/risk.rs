//! Risk-level classification from keyword tiers.

/// Coarse risk severity bucket, ordered by precedence (high > medium > low).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Lower-case name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword tiers, matched as literal substrings of the lower-cased text.
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "chest pain",
    "heart attack",
    "stroke",
    "severe pain",
    "emergency",
    "acute",
    "critical",
];

const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "diabetes",
    "hypertension",
    "high blood pressure",
    "depression",
    "anxiety",
    "chronic",
];

const LOW_RISK_KEYWORDS: &[&str] = &[
    "headache",
    "fatigue",
    "cold",
    "flu",
    "minor pain",
    "routine check",
];

fn any_keyword(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classifies free text into a risk tier.
///
/// Tiers are checked in strict precedence order and the first tier with any
/// keyword present wins. Text that matches no tier at all classifies as
/// `Medium`, not `Low`; downstream triage messaging relies on that default.
pub fn assess_risk_level(text: &str) -> RiskLevel {
    let lowered = text.to_lowercase();

    if any_keyword(&lowered, HIGH_RISK_KEYWORDS) {
        RiskLevel::High
    } else if any_keyword(&lowered, MEDIUM_RISK_KEYWORDS) {
        RiskLevel::Medium
    } else if any_keyword(&lowered, LOW_RISK_KEYWORDS) {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_tier_takes_precedence() {
        // Medium ("diabetes") and low ("headache") keywords are present too.
        let level = assess_risk_level("chest pain with a headache, history of diabetes");
        assert_eq!(level, RiskLevel::High);
    }

    #[test]
    fn test_medium_tier() {
        assert_eq!(assess_risk_level("managing hypertension"), RiskLevel::Medium);
    }

    #[test]
    fn test_low_tier() {
        assert_eq!(assess_risk_level("a mild headache"), RiskLevel::Low);
    }

    #[test]
    fn test_no_keyword_defaults_to_medium() {
        assert_eq!(
            assess_risk_level("feeling perfectly fine today"),
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_empty_text_defaults_to_medium() {
        assert_eq!(assess_risk_level(""), RiskLevel::Medium);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(assess_risk_level("SEVERE PAIN in the knee"), RiskLevel::High);
    }
}
