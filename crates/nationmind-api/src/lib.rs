//! HTTP client and health-check capability for the Nation Mind backend.

mod backend;
mod client;
mod health;

pub use backend::BackendClient;
pub use client::{ApiError, HttpClient};
pub use health::{HealthCheck, HealthFailure, HealthPayload};
