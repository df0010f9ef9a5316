//! Public inquiry endpoint.
//!
//! Sits behind the admission throttle; validated inquiries are handed to
//! the intake port.

use actix_web::{HttpResponse, web};

use capmatch_core::domain::Inquiry;
use capmatch_shared::dto::{InquiryAcceptedResponse, SubmitInquiryRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/inquiries
pub async fn submit(
    state: web::Data<AppState>,
    body: web::Json<SubmitInquiryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let inquiry = Inquiry::new(&req.audience, req.email, req.company, req.message)?;
    let (id, received_at) = (inquiry.id, inquiry.submitted_at);

    state.intake.submit(inquiry).await?;

    Ok(HttpResponse::Accepted().json(InquiryAcceptedResponse {
        id: id.to_string(),
        received_at: received_at.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use capmatch_infra::{FixedWindowThrottle, InMemoryInquiryIntake, ThrottleConfig};
    use std::sync::Arc;

    fn state_with(intake: Arc<InMemoryInquiryIntake>) -> AppState {
        AppState {
            throttle: Arc::new(FixedWindowThrottle::new(ThrottleConfig::default())),
            intake,
        }
    }

    #[actix_web::test]
    async fn accepts_a_valid_inquiry() {
        let intake = Arc::new(InMemoryInquiryIntake::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(intake.clone())))
                .route("/api/inquiries", web::post().to(submit)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/inquiries")
            .set_json(SubmitInquiryRequest {
                audience: "business".to_string(),
                email: "founder@acme.io".to_string(),
                company: Some("Acme".to_string()),
                message: Some("Raising a seed round".to_string()),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert_eq!(intake.received().await.len(), 1);
    }

    #[actix_web::test]
    async fn rejects_an_unknown_audience() {
        let intake = Arc::new(InMemoryInquiryIntake::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(intake.clone())))
                .route("/api/inquiries", web::post().to(submit)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/inquiries")
            .set_json(SubmitInquiryRequest {
                audience: "partner".to_string(),
                email: "someone@example.com".to_string(),
                company: None,
                message: None,
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(intake.received().await.is_empty());
    }
}
