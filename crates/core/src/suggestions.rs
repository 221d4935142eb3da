//! Follow-up suggestion selection from the chief complaint.

use crate::IntakeForm;

/// Follow-up suggestions for a partially completed intake form.
#[derive(Clone, Debug, Default)]
pub struct FormSuggestions {
    /// Complaint-specific follow-up prompts; empty when no trigger matches.
    pub suggestions: Vec<&'static str>,
    /// Fixed questions recommended for every intake, regardless of complaint.
    pub recommended_questions: Vec<&'static str>,
}

/// Complaint triggers and their follow-up prompts.
///
/// An ordered list evaluated first-match-wins; a map would not guarantee that
/// "chest pain" is checked before "headache".
const COMPLAINT_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "chest pain",
        &[
            "Consider asking about radiation of pain",
            "Check for associated shortness of breath",
            "Inquire about family history of heart disease",
        ],
    ),
    (
        "headache",
        &[
            "Ask about headache frequency and triggers",
            "Check for vision changes",
            "Inquire about stress levels",
        ],
    ),
    (
        "fatigue",
        &[
            "Consider checking sleep patterns",
            "Ask about recent weight changes",
            "Inquire about stress and mental health",
        ],
    ),
];

const RECOMMENDED_QUESTIONS: &[&str] = &[
    "How long have you been experiencing these symptoms?",
    "On a scale of 1-10, how severe is your discomfort?",
    "What makes the symptoms better or worse?",
];

/// Selects follow-up suggestions for a (possibly partial) intake form.
///
/// Only the chief complaint is examined. The first trigger phrase found as a
/// substring of the lower-cased complaint selects its prompt list; no match
/// yields an empty list rather than an error. The recommended questions are
/// always included.
pub fn form_suggestions(form: &IntakeForm) -> FormSuggestions {
    let complaint = form.chief_complaint.to_lowercase();

    let suggestions = COMPLAINT_TRIGGERS
        .iter()
        .find(|(trigger, _)| complaint.contains(trigger))
        .map(|(_, prompts)| prompts.to_vec())
        .unwrap_or_default();

    FormSuggestions {
        suggestions,
        recommended_questions: RECOMMENDED_QUESTIONS.to_vec(),
    }
}
