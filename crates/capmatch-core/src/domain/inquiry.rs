use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Which side of the marketplace the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// A business looking for capital.
    Business,
    /// An investor looking for deal flow.
    Investor,
}

impl Audience {
    /// Parse the audience segment from the public API's wire form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "business" => Ok(Self::Business),
            "investor" => Ok(Self::Investor),
            other => Err(DomainError::Validation(format!(
                "Unknown audience '{other}', expected 'business' or 'investor'"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Investor => "investor",
        }
    }
}

/// Inquiry entity - an anonymous visitor asking to be matched.
///
/// Contact handling and follow-up live in the managed backend; the gateway
/// only validates and forwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub audience: Audience,
    pub email: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Inquiry {
    /// Create a new inquiry with generated ID and timestamp.
    ///
    /// Validates the audience segment and the rough shape of the email
    /// address; anything deeper (deliverability, dedupe) belongs to the
    /// backend.
    pub fn new(
        audience: &str,
        email: String,
        company: Option<String>,
        message: Option<String>,
    ) -> Result<Self, DomainError> {
        let audience = Audience::parse(audience)?;

        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation(
                "Invalid email address".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            audience,
            email,
            company,
            message,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_inquiry_for_each_audience() {
        for (raw, parsed) in [("business", Audience::Business), ("investor", Audience::Investor)] {
            let inquiry = Inquiry::new(raw, "founder@acme.io".to_string(), None, None).unwrap();
            assert_eq!(inquiry.audience, parsed);
            assert_eq!(inquiry.audience.as_str(), raw);
        }
    }

    #[test]
    fn rejects_unknown_audience() {
        let err = Inquiry::new("partner", "a@b.co".to_string(), None, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "not-an-email"] {
            let err = Inquiry::new("business", email.to_string(), None, None).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }
}
