//! Backend liveness probe (`GET <api_base>/health`).

use serde::Deserialize;

use crate::analyzer::backend_error_message;
use crate::transport::{self, Transport, TransportError};

pub const HEALTH_PATH: &str = "/health";

/// Status reported by the backend, `"ok"` when healthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u32, message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Deserialize)]
struct HealthBody {
    status: Option<String>,
}

/// Probe the backend. A 2xx without a readable `status` field reports `"unknown"`.
pub fn check<T: Transport>(transport: &T, api_base: &str) -> Result<Health, HealthError> {
    let url = transport::endpoint(api_base, HEALTH_PATH);
    let response = transport.get(&url)?;
    if !response.is_success() {
        return Err(HealthError::Status {
            status: response.status,
            message: backend_error_message(&response.reason, &response.body),
        });
    }
    let status = serde_json::from_slice::<HealthBody>(&response.body)
        .ok()
        .and_then(|b| b.status)
        .unwrap_or_else(|| "unknown".to_string());
    tracing::debug!(%url, %status, "health probe");
    Ok(Health { status })
}
