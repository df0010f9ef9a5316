//! Inquiry intake port.

use async_trait::async_trait;

use crate::domain::Inquiry;

/// Inquiry sink - abstraction over where accepted inquiries are delivered.
///
/// The production implementation forwards to the managed backend; tests and
/// unconfigured deployments use the in-memory sink.
#[async_trait]
pub trait InquiryIntake: Send + Sync {
    /// Deliver a validated inquiry.
    async fn submit(&self, inquiry: Inquiry) -> Result<(), IntakeError>;
}

/// Intake delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Backend unreachable: {0}")]
    Backend(String),

    #[error("Backend rejected inquiry: {0}")]
    Rejected(String),
}
