//! Keyword extraction from free-text intake fields.
//!
//! Extraction is deliberately simple: the text is lower-cased once, the fixed
//! symptom table is scanned for literal substrings, and two compiled regexes
//! pick up medication and duration mentions. Every operation is total over
//! arbitrary input; there is no failure path.

use std::sync::LazyLock;

use regex::Regex;

/// Body-system grouping used to cluster symptom keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymptomCategory {
    Cardiovascular,
    Neurological,
    Respiratory,
    Gastrointestinal,
    Musculoskeletal,
}

impl SymptomCategory {
    /// Lower-case name as it appears on the wire and in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::Cardiovascular => "cardiovascular",
            SymptomCategory::Neurological => "neurological",
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Gastrointestinal => "gastrointestinal",
            SymptomCategory::Musculoskeletal => "musculoskeletal",
        }
    }
}

impl std::fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symptom phrase lists per body system, scanned in declaration order.
///
/// Phrases may appear under more than one system ("dizziness", "shortness of
/// breath"); matches are not de-duplicated across categories.
const SYMPTOM_CATEGORIES: &[(SymptomCategory, &[&str])] = &[
    (
        SymptomCategory::Cardiovascular,
        &[
            "chest pain",
            "heart palpitations",
            "shortness of breath",
            "dizziness",
        ],
    ),
    (
        SymptomCategory::Neurological,
        &["headache", "migraine", "dizziness", "confusion", "memory loss"],
    ),
    (
        SymptomCategory::Respiratory,
        &["cough", "shortness of breath", "asthma", "breathing difficulty"],
    ),
    (
        SymptomCategory::Gastrointestinal,
        &["nausea", "vomiting", "abdominal pain", "diarrhea", "constipation"],
    ),
    (
        SymptomCategory::Musculoskeletal,
        &["joint pain", "back pain", "muscle ache", "arthritis"],
    ),
];

/// A symptom phrase found in the text, tagged with its body system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymptomMatch {
    pub symptom: &'static str,
    pub category: SymptomCategory,
}

/// Unit of a duration mention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A duration mention such as "for 3 days".
///
/// The quantity is kept as the literal digit string from the text; nothing
/// downstream needs a parsed number, so no overflow path exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationMention {
    pub quantity: String,
    pub unit: DurationUnit,
}

/// Everything extracted from a single piece of intake text.
#[derive(Clone, Debug, Default)]
pub struct ExtractedInformation {
    pub symptoms: Vec<SymptomMatch>,
    pub medications: Vec<String>,
    pub durations: Vec<DurationMention>,
}

// Mention-scanning patterns, compiled once at first use.
static MEDICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+(?:mg|ml|tablets?|pills?|capsules?)\b").unwrap());
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:for\s+)?(\d+)\s+(day|week|month|year)s?\b").unwrap());

/// Extracts symptoms, medication mentions and duration mentions from text.
///
/// Symptom matches come out in table order (category declaration order, then
/// phrase order within a category), never in position-of-occurrence order.
/// Medication and duration mentions are emitted leftmost-first as the regexes
/// find them.
pub fn extract_key_information(text: &str) -> ExtractedInformation {
    let lowered = text.to_lowercase();

    let mut symptoms = Vec::new();
    for (category, phrases) in SYMPTOM_CATEGORIES {
        for &phrase in *phrases {
            if lowered.contains(phrase) {
                symptoms.push(SymptomMatch {
                    symptom: phrase,
                    category: *category,
                });
            }
        }
    }

    let medications = MEDICATION_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect();

    let mut durations = Vec::new();
    for caps in DURATION_RE.captures_iter(&lowered) {
        let unit = match &caps[2] {
            "day" => DurationUnit::Day,
            "week" => DurationUnit::Week,
            "month" => DurationUnit::Month,
            _ => DurationUnit::Year,
        };
        durations.push(DurationMention {
            quantity: caps[1].to_owned(),
            unit,
        });
    }

    ExtractedInformation {
        symptoms,
        medications,
        durations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_text() {
        let info = extract_key_information("");
        assert!(info.symptoms.is_empty());
        assert!(info.medications.is_empty());
        assert!(info.durations.is_empty());
    }

    #[test]
    fn test_extract_medication_and_duration() {
        let info = extract_key_information("patient takes 500mg ibuprofen for 3 days");
        assert_eq!(info.medications, vec!["500mg"]);
        assert_eq!(
            info.durations,
            vec![DurationMention {
                quantity: "3".to_owned(),
                unit: DurationUnit::Day,
            }]
        );
    }

    #[test]
    fn test_extract_symptoms_in_table_order() {
        // "headache" occurs first in the text but cardiovascular is scanned
        // before neurological, so "chest pain" is emitted first.
        let info = extract_key_information("I have a headache and chest pain");
        let found: Vec<_> = info
            .symptoms
            .iter()
            .map(|m| (m.symptom, m.category))
            .collect();
        assert_eq!(
            found,
            vec![
                ("chest pain", SymptomCategory::Cardiovascular),
                ("headache", SymptomCategory::Neurological),
            ]
        );
    }

    #[test]
    fn test_extract_keeps_duplicates_across_categories() {
        let info = extract_key_information("episodes of dizziness since Monday");
        let found: Vec<_> = info
            .symptoms
            .iter()
            .map(|m| (m.symptom, m.category))
            .collect();
        assert_eq!(
            found,
            vec![
                ("dizziness", SymptomCategory::Cardiovascular),
                ("dizziness", SymptomCategory::Neurological),
            ]
        );
    }

    #[test]
    fn test_extract_medication_unit_suffixes() {
        let info = extract_key_information("given 10ml syrup and 2tablets at night");
        assert_eq!(info.medications, vec!["10ml", "2tablets"]);
    }

    #[test]
    fn test_extract_medication_requires_attached_suffix() {
        // A bare unit word is not a medication token.
        let info = extract_key_information("she took two tablets");
        assert!(info.medications.is_empty());
    }

    #[test]
    fn test_extract_duration_variants() {
        let info = extract_key_information("for 2 days, then worse over 3 weeks, 1 month total");
        let found: Vec<_> = info
            .durations
            .iter()
            .map(|d| (d.quantity.as_str(), d.unit))
            .collect();
        assert_eq!(
            found,
            vec![
                ("2", DurationUnit::Day),
                ("3", DurationUnit::Week),
                ("1", DurationUnit::Month),
            ]
        );
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let info = extract_key_information("CHEST PAIN and 500MG aspirin");
        assert_eq!(info.symptoms.len(), 1);
        assert_eq!(info.symptoms[0].symptom, "chest pain");
        assert_eq!(info.medications, vec!["500mg"]);
    }
}
