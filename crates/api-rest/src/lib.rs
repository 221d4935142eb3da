//! # API REST
//!
//! REST API implementation for the intake analysis service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, input validation)
//!
//! Uses `api-shared` for wire types and `intake-core` for the analysis.

#![warn(rust_2018_idioms)]

pub mod error;

pub use intake_core::AnalysisService;
