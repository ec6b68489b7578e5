use serde::Deserialize;

use crate::client::ApiError;

/// Body of a successful `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthPayload {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// A health check that did not produce a payload.
///
/// Every cause (connection refused, non-2xx status, undecodable body) is
/// collapsed into this one kind. `message` is `None` when the cause carried
/// no readable text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthFailure {
    pub message: Option<String>,
}

impl HealthFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.is_empty()).then_some(message),
        }
    }

    pub fn without_message() -> Self {
        Self::default()
    }
}

impl From<ApiError> for HealthFailure {
    fn from(err: ApiError) -> Self {
        Self::with_message(err.to_string())
    }
}

/// Health-check capability consumed by the status probe.
///
/// Takes no input and settles exactly once per call, either with the
/// backend's payload or with a [`HealthFailure`].
pub trait HealthCheck: Send + Sync {
    fn health_check(
        &self,
    ) -> impl std::future::Future<Output = Result<HealthPayload, HealthFailure>> + Send;
}
