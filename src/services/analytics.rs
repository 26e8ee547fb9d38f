//! Aggregate metrics and liveness endpoints.

use crate::api::{ApiClient, ApiResponse};
use crate::model::{Analytics, HealthStatus};

/// Read-only view over system-wide aggregates and backend liveness.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    api: ApiClient,
}

impl AnalyticsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the chit and loan aggregates.
    pub async fn get_analytics(&self) -> ApiResponse<Analytics> {
        self.api.get("/analytics").await
    }

    /// Probe backend liveness and version info.
    pub async fn get_health_status(&self) -> ApiResponse<HealthStatus> {
        self.api.get("/health").await
    }
}
