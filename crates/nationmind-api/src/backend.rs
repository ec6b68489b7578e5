use crate::client::{ApiError, HttpClient};
use crate::health::{HealthCheck, HealthFailure, HealthPayload};

const HEALTH_PATH: &str = "api/health";

/// Client for the Nation Mind backend.
///
/// The backend exposes `GET /api/health`, which answers
/// `{"status": "ok", "message": "..."}` with HTTP 200 while it is running.
/// No authentication is required.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: HttpClient,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// GET `/api/health`
    pub async fn health(&self) -> Result<HealthPayload, ApiError> {
        self.http.get(HEALTH_PATH).await
    }

    pub fn base_url(&self) -> &url::Url {
        self.http.base_url()
    }
}

impl HealthCheck for BackendClient {
    async fn health_check(&self) -> Result<HealthPayload, HealthFailure> {
        Ok(self.health().await?)
    }
}
