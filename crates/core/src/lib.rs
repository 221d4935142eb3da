//! # Intake Core
//!
//! Core text analysis for the clinical intake service.
//!
//! This crate contains the pure analysis operations over intake text:
//! - Keyword extraction (symptoms by body system, medications, durations)
//! - Risk-level classification from fixed keyword tiers
//! - Templated intake summary generation
//! - Follow-up suggestion selection
//!
//! All operations read only immutable static tables and their input, so the
//! engine is stateless and thread-safe by construction. The one impurity in
//! the system, the processing timestamp, is injected by the caller.
//!
//! **No API concerns**: HTTP routing, JSON framing and request validation
//! belong in `api-rest` and `api-shared`.

pub mod extraction;
pub mod risk;
pub mod suggestions;
pub mod summary;

pub use extraction::{
    DurationMention, DurationUnit, ExtractedInformation, SymptomCategory, SymptomMatch,
};
pub use risk::RiskLevel;
pub use suggestions::FormSuggestions;

use chrono::{DateTime, Utc};

/// A patient intake form as submitted by the caller.
///
/// Every field is optional on the wire; absent fields arrive here as empty
/// strings, so the analysis never has to handle a missing value.
#[derive(Clone, Debug, Default)]
pub struct IntakeForm {
    pub chief_complaint: String,
    pub medical_history: String,
    pub current_medications: String,
}

/// Priority bucket derived from the risk level.
///
/// Medium and low risk collapse into `Medium`; only high risk maps to `High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete analysis of one intake form. A value per call, never mutated.
#[derive(Clone, Debug)]
pub struct IntakeAnalysis {
    pub risk_level: RiskLevel,
    pub summary: String,
    pub extracted_information: ExtractedInformation,
    pub priority_score: Priority,
    pub processed_at: DateTime<Utc>,
}

/// Pure text-analysis operations - no API concerns.
#[derive(Default, Clone)]
pub struct AnalysisService;

impl AnalysisService {
    /// Creates a new instance of AnalysisService.
    pub fn new() -> Self {
        Self
    }

    /// Extracts symptoms, medication mentions and duration mentions from text.
    pub fn extract_key_information(&self, text: &str) -> ExtractedInformation {
        extraction::extract_key_information(text)
    }

    /// Classifies free text into a risk tier.
    pub fn assess_risk_level(&self, text: &str) -> RiskLevel {
        risk::assess_risk_level(text)
    }

    /// Generates the templated intake summary for a form.
    pub fn generate_summary(&self, form: &IntakeForm) -> String {
        summary::generate_summary(form)
    }

    /// Selects follow-up suggestions for a (possibly partial) form.
    pub fn form_suggestions(&self, form: &IntakeForm) -> FormSuggestions {
        suggestions::form_suggestions(form)
    }

    /// Runs the full analysis over a complete intake form.
    ///
    /// Risk is assessed over all three fields joined with spaces (absent
    /// fields contribute empty segments), the summary sees the whole form,
    /// and extraction deliberately runs over the chief complaint only. The
    /// priority score is `High` exactly when the risk level is high; medium
    /// and low risk both map to `Medium`.
    ///
    /// # Arguments
    ///
    /// * `form` - The submitted intake form.
    /// * `processed_at` - Timestamp recorded on the result; taken at the
    ///   boundary so this function stays pure and testable.
    pub fn process_form(&self, form: &IntakeForm, processed_at: DateTime<Utc>) -> IntakeAnalysis {
        let combined = [
            form.chief_complaint.as_str(),
            form.medical_history.as_str(),
            form.current_medications.as_str(),
        ]
        .join(" ");

        let risk_level = risk::assess_risk_level(&combined);
        let summary = summary::generate_summary(form);
        let extracted_information = extraction::extract_key_information(&form.chief_complaint);

        let priority_score = if risk_level == RiskLevel::High {
            Priority::High
        } else {
            Priority::Medium
        };

        tracing::debug!(
            risk_level = %risk_level,
            priority = %priority_score,
            symptoms = extracted_information.symptoms.len(),
            "processed intake form"
        );

        IntakeAnalysis {
            risk_level,
            summary,
            extracted_information,
            priority_score,
            processed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-05T09:15:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_process_form_high_risk_maps_to_high_priority() {
        let service = AnalysisService::new();
        let form = IntakeForm {
            chief_complaint: "crushing chest pain".to_owned(),
            ..IntakeForm::default()
        };

        let analysis = service.process_form(&form, timestamp());
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.priority_score, Priority::High);
    }

    #[test]
    fn test_process_form_low_risk_collapses_to_medium_priority() {
        let service = AnalysisService::new();
        let form = IntakeForm {
            chief_complaint: "constant fatigue".to_owned(),
            ..IntakeForm::default()
        };

        let analysis = service.process_form(&form, timestamp());
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.priority_score, Priority::Medium);
    }

    #[test]
    fn test_process_form_empty_form() {
        let service = AnalysisService::new();
        let analysis = service.process_form(&IntakeForm::default(), timestamp());

        // The keyword-free default tier, the degenerate summary and the
        // medium priority bucket all surface together here.
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.summary, ".");
        assert_eq!(analysis.priority_score, Priority::Medium);
        assert!(analysis.extracted_information.symptoms.is_empty());
    }

    #[test]
    fn test_process_form_extracts_from_chief_complaint_only() {
        let service = AnalysisService::new();
        let form = IntakeForm {
            chief_complaint: "headache".to_owned(),
            medical_history: "diabetes, on 500mg metformin".to_owned(),
            ..IntakeForm::default()
        };

        let analysis = service.process_form(&form, timestamp());
        // Risk sees the history ("diabetes" outranks the low-tier headache),
        // extraction does not (no medication tokens from the history).
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert!(analysis.extracted_information.medications.is_empty());
        assert_eq!(analysis.extracted_information.symptoms.len(), 1);
    }

    #[test]
    fn test_process_form_keeps_injected_timestamp() {
        let service = AnalysisService::new();
        let analysis = service.process_form(&IntakeForm::default(), timestamp());
        assert_eq!(analysis.processed_at, timestamp());
    }
}
