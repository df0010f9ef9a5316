//! HTTP intake adapter - forwards inquiries to the managed backend.

use std::time::Duration;

use async_trait::async_trait;

use capmatch_core::domain::Inquiry;
use capmatch_core::ports::{InquiryIntake, IntakeError};

/// HTTP intake configuration.
#[derive(Debug, Clone)]
pub struct HttpIntakeConfig {
    /// Base URL of the managed backend.
    pub base_url: String,
    /// Optional bearer token for the backend.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpIntakeConfig {
    /// Read the intake configuration from the environment.
    ///
    /// Returns `None` when `INTAKE_BASE_URL` is unset, which callers treat
    /// as "no backend configured".
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("INTAKE_BASE_URL").ok()?;
        Some(Self {
            base_url,
            api_key: std::env::var("INTAKE_API_KEY").ok(),
            timeout: Duration::from_secs(
                std::env::var("INTAKE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        })
    }
}

/// Forwards accepted inquiries to the managed backend as JSON.
pub struct HttpInquiryIntake {
    client: reqwest::Client,
    config: HttpIntakeConfig,
}

impl HttpInquiryIntake {
    pub fn new(config: HttpIntakeConfig) -> Result<Self, IntakeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IntakeError::Backend(e.to_string()))?;

        tracing::info!(url = %config.base_url, "Inquiry intake backend configured");

        Ok(Self { client, config })
    }
}

#[async_trait]
impl InquiryIntake for HttpInquiryIntake {
    async fn submit(&self, inquiry: Inquiry) -> Result<(), IntakeError> {
        let url = format!("{}/inquiries", self.config.base_url.trim_end_matches('/'));

        let mut request = self.client.post(&url).json(&inquiry);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IntakeError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntakeError::Rejected(format!("{status}: {body}")));
        }

        tracing::debug!(inquiry_id = %inquiry.id, "Inquiry forwarded to backend");
        Ok(())
    }
}
