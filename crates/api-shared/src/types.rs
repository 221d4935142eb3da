//! Wire request and response types for the intake analysis API.
//!
//! Successful responses wrap their payload in a `success`/`data` envelope;
//! failures carry `success: false` with an `error` message. Form fields use
//! the camelCase names the frontend submits.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Request body for `/extract`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ExtractReq {
    /// Free text to analyse. Required by the endpoint; an empty or missing
    /// value is rejected before the engine is invoked.
    #[serde(default)]
    pub text: String,
}

/// Intake form fields as the frontend submits them.
///
/// Every field is optional; absent fields deserialise to empty strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeFormReq {
    pub chief_complaint: String,
    pub medical_history: String,
    pub current_medications: String,
}

/// One symptom keyword match with its body-system category.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SymptomRes {
    pub symptom: String,
    pub category: String,
}

/// One duration mention: the literal digit string and the singular unit.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DurationRes {
    pub quantity: String,
    pub unit: String,
}

/// Structured facts extracted from one piece of text.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractedInformationRes {
    pub symptoms: Vec<SymptomRes>,
    pub medications: Vec<String>,
    pub durations: Vec<DurationRes>,
}

/// Response for `/extract`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractRes {
    pub success: bool,
    pub data: ExtractedInformationRes,
}

/// Follow-up suggestion bundle.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionsData {
    pub suggestions: Vec<String>,
    pub recommended_questions: Vec<String>,
}

/// Response for `/suggestions`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionsRes {
    pub success: bool,
    pub data: SuggestionsData,
}

/// Payload of a `/risk-assessment` response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessmentData {
    pub risk_level: String,
    pub summary: String,
    pub recommendations: SuggestionsData,
}

/// Response for `/risk-assessment`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessmentRes {
    pub success: bool,
    pub data: RiskAssessmentData,
}

/// Payload of a `/process-form` response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessFormData {
    pub risk_level: String,
    pub summary: String,
    pub extracted_information: ExtractedInformationRes,
    pub priority_score: String,
    pub processing_timestamp: String,
}

/// Response for `/process-form`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessFormRes {
    pub success: bool,
    pub data: ProcessFormData,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub success: bool,
    pub error: String,
}
