//! Marketing content endpoints - landing copy and FAQ.
//!
//! Copy is compiled in; the marketing team ships changes through normal
//! releases rather than a CMS.

use actix_web::HttpResponse;
use capmatch_shared::dto::{CallToActionResponse, FaqEntryResponse, LandingContentResponse};

fn landing_content() -> LandingContentResponse {
    LandingContentResponse {
        hero_title: "Capital, matched.".to_string(),
        hero_subtitle: "CapMatch pairs growing businesses with investors who \
                        understand their stage, sector, and ambitions."
            .to_string(),
        calls_to_action: vec![
            CallToActionResponse {
                audience: "business".to_string(),
                label: "Raise capital".to_string(),
                href: "/auth/sign-in?redirect_to=/dashboard".to_string(),
            },
            CallToActionResponse {
                audience: "investor".to_string(),
                label: "Find deal flow".to_string(),
                href: "/auth/sign-in?redirect_to=/matches".to_string(),
            },
        ],
    }
}

fn faq_entries() -> Vec<FaqEntryResponse> {
    let entries = [
        (
            "How does matching work?",
            "You tell us about your business or investment thesis; we introduce \
             you to counterparties whose criteria overlap yours. You decide who \
             to talk to.",
        ),
        (
            "What does CapMatch cost?",
            "Creating a profile and receiving introductions is free. We charge a \
             success fee only when a match leads to a closed round.",
        ),
        (
            "Who sees my information?",
            "Your profile is only shared with matches you approve. Anonymous \
             browsing never exposes your identity.",
        ),
        (
            "Is CapMatch a broker-dealer?",
            "No. CapMatch introduces parties and does not advise on, structure, \
             or execute transactions.",
        ),
        (
            "How do I get started?",
            "Pick the path that fits you on the landing page - raising capital \
             or finding deal flow - and create an account.",
        ),
    ];

    entries
        .into_iter()
        .map(|(question, answer)| FaqEntryResponse {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

/// GET /api/content/landing
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok().json(landing_content())
}

/// GET /api/content/faq
pub async fn faq() -> HttpResponse {
    HttpResponse::Ok().json(faq_entries())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_offers_both_calls_to_action() {
        let content = landing_content();
        let audiences: Vec<_> = content
            .calls_to_action
            .iter()
            .map(|cta| cta.audience.as_str())
            .collect();
        assert_eq!(audiences, vec!["business", "investor"]);
    }

    #[test]
    fn faq_is_not_empty() {
        let entries = faq_entries();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
    }
}
