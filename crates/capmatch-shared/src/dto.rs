//! Data Transfer Objects - request/response types for the gateway API.

use serde::{Deserialize, Serialize};

/// Request to submit an inquiry from the public landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitInquiryRequest {
    /// Which call-to-action the visitor followed: "business" or "investor".
    pub audience: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Acknowledgement for an accepted inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryAcceptedResponse {
    pub id: String,
    pub received_at: String,
}

/// One call-to-action block on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToActionResponse {
    pub audience: String,
    pub label: String,
    pub href: String,
}

/// Landing page copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingContentResponse {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub calls_to_action: Vec<CallToActionResponse>,
}

/// A single FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntryResponse {
    pub question: String,
    pub answer: String,
}

/// Session presence check for gated routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
}
