//! HTTP handlers and route configuration.

mod account;
mod content;
mod health;
mod inquiry;
mod sign_in;

use actix_web::web;
use std::sync::Arc;

use capmatch_core::ports::RequestThrottle;

use crate::middleware::throttle::ThrottleMiddleware;

/// Configure all application routes.
///
/// The inquiry endpoint is the only one behind the throttle; the
/// `/api/account` prefix is covered by the app-level session gate.
pub fn configure_routes(cfg: &mut web::ServiceConfig, throttle: Arc<dyn RequestThrottle>) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/content")
                    .route("/landing", web::get().to(content::landing))
                    .route("/faq", web::get().to(content::faq)),
            )
            .service(
                web::resource("/inquiries")
                    .wrap(ThrottleMiddleware::new(throttle))
                    .route(web::post().to(inquiry::submit)),
            )
            // Session-gated routes
            .route("/account/session", web::get().to(account::session)),
    )
    .service(web::scope("/auth").route("/sign-in", web::get().to(sign_in::sign_in)));
}
