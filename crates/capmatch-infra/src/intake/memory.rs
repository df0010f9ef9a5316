//! In-memory intake sink - used when no backend is configured.

use async_trait::async_trait;
use tokio::sync::Mutex;

use capmatch_core::domain::Inquiry;
use capmatch_core::ports::{InquiryIntake, IntakeError};

/// Collects inquiries in memory instead of delivering them.
///
/// Note: contents are lost on process restart. Intended for development and
/// tests.
#[derive(Default)]
pub struct InMemoryInquiryIntake {
    received: Mutex<Vec<Inquiry>>,
}

impl InMemoryInquiryIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inquiries accepted so far.
    pub async fn received(&self) -> Vec<Inquiry> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl InquiryIntake for InMemoryInquiryIntake {
    async fn submit(&self, inquiry: Inquiry) -> Result<(), IntakeError> {
        tracing::warn!(
            inquiry_id = %inquiry.id,
            "No intake backend configured - keeping inquiry in memory"
        );
        self.received.lock().await.push(inquiry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_submitted_inquiries() {
        let intake = InMemoryInquiryIntake::new();
        let inquiry = Inquiry::new(
            "investor",
            "angel@fund.example".to_string(),
            Some("Fund I".to_string()),
            None,
        )
        .unwrap();
        let id = inquiry.id;

        intake.submit(inquiry).await.unwrap();

        let received = intake.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, id);
        assert_eq!(received[0].email, "angel@fund.example");
    }
}
