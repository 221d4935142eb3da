//! REST API server for the intake analysis service.
//!
//! ## Purpose
//! Exposes the text-analysis engine over HTTP: keyword extraction, risk
//! assessment, intake summaries, form suggestions and full form processing.
//!
//! The engine itself is pure and stateless; this binary owns every impurity:
//! address configuration, request validation, CORS, logging and the
//! processing timestamp.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_rest::error::ApiError;
use api_shared::types::{
    DurationRes, ErrorRes, ExtractReq, ExtractRes, ExtractedInformationRes, HealthRes,
    IntakeFormReq, ProcessFormData, ProcessFormRes, RiskAssessmentData, RiskAssessmentRes,
    SuggestionsData, SuggestionsRes, SymptomRes,
};
use api_shared::HealthService;
use intake_core::{AnalysisService, ExtractedInformation, FormSuggestions, IntakeForm};

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers,
/// currently just the stateless `AnalysisService`.
#[derive(Clone)]
struct AppState {
    analysis: AnalysisService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, extract, risk_assessment, suggestions, process_form),
    components(schemas(
        HealthRes,
        ExtractReq,
        ExtractRes,
        ExtractedInformationRes,
        SymptomRes,
        DurationRes,
        IntakeFormReq,
        RiskAssessmentRes,
        RiskAssessmentData,
        SuggestionsRes,
        SuggestionsData,
        ProcessFormRes,
        ProcessFormData,
        ErrorRes,
    ))
)]
struct ApiDoc;

/// Main entry point for the intake analysis REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:5000) with OpenAPI/Swagger documentation under /swagger-ui.
///
/// # Environment Variables
/// - `INTAKE_REST_ADDR`: Server address (default: "0.0.0.0:5000")
///
/// # Returns
/// * `Ok(())` - If server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("INTAKE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    tracing::info!("-- Starting intake analysis REST API on {}", addr);

    let state = AppState {
        analysis: AnalysisService::new(),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/extract", post(extract))
        .route("/risk-assessment", post(risk_assessment))
        .route("/suggestions", post(suggestions))
        .route("/process-form", post(process_form))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the intake analysis service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/extract",
    request_body = ExtractReq,
    responses(
        (status = 200, description = "Extracted information", body = ExtractRes),
        (status = 400, description = "No text provided", body = ErrorRes)
    )
)]
/// Extract structured facts from free medical text
///
/// Runs keyword extraction over the submitted text: symptom phrases grouped
/// by body system, medication tokens and duration mentions.
///
/// The engine tolerates empty text; the "text required" business rule is
/// enforced here at the boundary instead.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the text field is missing or empty.
#[axum::debug_handler]
async fn extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractReq>,
) -> Result<Json<ExtractRes>, ApiError> {
    if req.text.is_empty() {
        return Err(ApiError::MissingText);
    }

    let info = state.analysis.extract_key_information(&req.text);
    Ok(Json(ExtractRes {
        success: true,
        data: extracted_information_res(info),
    }))
}

#[utoipa::path(
    post,
    path = "/risk-assessment",
    request_body = IntakeFormReq,
    responses(
        (status = 200, description = "Risk assessment with summary and recommendations", body = RiskAssessmentRes),
        (status = 400, description = "No medical information provided", body = ErrorRes)
    )
)]
/// Assess the risk level of an intake form
///
/// Classifies the combined form text into a risk tier and returns it together
/// with the generated summary and follow-up recommendations. Only populated
/// fields contribute to the combined text here; `/process-form` joins all
/// three fields unconditionally.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - every form field is missing or empty.
#[axum::debug_handler]
async fn risk_assessment(
    State(state): State<AppState>,
    Json(req): Json<IntakeFormReq>,
) -> Result<Json<RiskAssessmentRes>, ApiError> {
    let form = form_from_req(req);

    let segments: Vec<&str> = [
        form.chief_complaint.as_str(),
        form.medical_history.as_str(),
        form.current_medications.as_str(),
    ]
    .into_iter()
    .filter(|segment| !segment.is_empty())
    .collect();
    let combined = segments.join(" ");

    if combined.is_empty() {
        return Err(ApiError::MissingMedicalInformation);
    }

    let risk_level = state.analysis.assess_risk_level(&combined);
    let summary = state.analysis.generate_summary(&form);
    let recommendations = state.analysis.form_suggestions(&form);

    Ok(Json(RiskAssessmentRes {
        success: true,
        data: RiskAssessmentData {
            risk_level: risk_level.to_string(),
            summary,
            recommendations: suggestions_data(recommendations),
        },
    }))
}

#[utoipa::path(
    post,
    path = "/suggestions",
    request_body = IntakeFormReq,
    responses(
        (status = 200, description = "Form completion suggestions", body = SuggestionsRes)
    )
)]
/// Get form completion suggestions
///
/// Returns complaint-specific follow-up prompts (first matching trigger wins)
/// plus the fixed recommended questions. A form with no recognised complaint
/// yields an empty suggestion list, not an error.
#[axum::debug_handler]
async fn suggestions(
    State(state): State<AppState>,
    Json(req): Json<IntakeFormReq>,
) -> Json<SuggestionsRes> {
    let form = form_from_req(req);
    let bundle = state.analysis.form_suggestions(&form);

    Json(SuggestionsRes {
        success: true,
        data: suggestions_data(bundle),
    })
}

#[utoipa::path(
    post,
    path = "/process-form",
    request_body = IntakeFormReq,
    responses(
        (status = 200, description = "Complete intake form analysis", body = ProcessFormRes)
    )
)]
/// Process a complete intake form
///
/// Runs the full analysis: risk level over the whole form, summary,
/// extraction over the chief complaint, the derived priority score and a
/// processing timestamp taken here at the boundary.
#[axum::debug_handler]
async fn process_form(
    State(state): State<AppState>,
    Json(req): Json<IntakeFormReq>,
) -> Json<ProcessFormRes> {
    let form = form_from_req(req);
    let analysis = state.analysis.process_form(&form, chrono::Utc::now());

    tracing::info!(
        risk_level = %analysis.risk_level,
        priority = %analysis.priority_score,
        "intake form processed"
    );

    Json(ProcessFormRes {
        success: true,
        data: ProcessFormData {
            risk_level: analysis.risk_level.to_string(),
            summary: analysis.summary,
            extracted_information: extracted_information_res(analysis.extracted_information),
            priority_score: analysis.priority_score.to_string(),
            processing_timestamp: analysis.processed_at.to_rfc3339(),
        },
    })
}

// Helper functions

fn form_from_req(req: IntakeFormReq) -> IntakeForm {
    IntakeForm {
        chief_complaint: req.chief_complaint,
        medical_history: req.medical_history,
        current_medications: req.current_medications,
    }
}

fn extracted_information_res(info: ExtractedInformation) -> ExtractedInformationRes {
    ExtractedInformationRes {
        symptoms: info
            .symptoms
            .into_iter()
            .map(|m| SymptomRes {
                symptom: m.symptom.to_owned(),
                category: m.category.to_string(),
            })
            .collect(),
        medications: info.medications,
        durations: info
            .durations
            .into_iter()
            .map(|d| DurationRes {
                quantity: d.quantity,
                unit: d.unit.to_string(),
            })
            .collect(),
    }
}

fn suggestions_data(bundle: FormSuggestions) -> SuggestionsData {
    SuggestionsData {
        suggestions: bundle
            .suggestions
            .into_iter()
            .map(str::to_owned)
            .collect(),
        recommended_questions: bundle
            .recommended_questions
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }
}
