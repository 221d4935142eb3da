//! Intake summary generation.
//!
//! Produces a short templated narrative from the intake form: one clause per
//! populated field plus a clause naming the body systems the extracted
//! symptoms fall under.

use crate::extraction::{self, SymptomCategory};
use crate::IntakeForm;

/// Generates the intake summary for a form.
///
/// Clauses are appended in a fixed order, each only when its triggering
/// condition holds, then joined with ". " and closed with a single ".".
/// A form with no populated fields therefore summarises to exactly ".".
///
/// Symptom extraction runs over the chief complaint and medical history
/// joined with a space. Category names are de-duplicated in first-occurrence
/// order, which follows the symptom table, not the text.
pub fn generate_summary(form: &IntakeForm) -> String {
    let combined = format!("{} {}", form.chief_complaint, form.medical_history);
    let extracted = extraction::extract_key_information(&combined);

    let mut parts: Vec<String> = Vec::new();

    if !form.chief_complaint.is_empty() {
        parts.push(format!("Patient presents with: {}", form.chief_complaint));
    }

    if !extracted.symptoms.is_empty() {
        let mut categories: Vec<SymptomCategory> = Vec::new();
        for symptom in &extracted.symptoms {
            if !categories.contains(&symptom.category) {
                categories.push(symptom.category);
            }
        }
        let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        parts.push(format!("Symptoms involve: {} systems", names.join(", ")));
    }

    if !form.medical_history.is_empty() {
        parts.push("Relevant medical history noted".to_owned());
    }

    if !form.current_medications.is_empty() {
        parts.push("Currently taking medications".to_owned());
    }

    format!("{}.", parts.join(". "))
}
