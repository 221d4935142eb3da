//! # API Shared
//!
//! Shared utilities and definitions for the intake analysis API.
//!
//! Contains:
//! - Wire request/response types (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` for common functionality.

pub mod health;
pub mod types;

pub use health::HealthService;
