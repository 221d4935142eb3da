use crate::types::HealthRes;

/// Name reported by the health endpoint.
const SERVICE_NAME: &str = "Intake Analysis Service";

/// Simple health service for the REST API
///
/// Provides a standardised way to check the health status of the intake
/// analysis service, used for monitoring and load balancer health checks.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy, with the service
    /// name and crate version.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            service: SERVICE_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
