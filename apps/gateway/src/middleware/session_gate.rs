//! Session gate - route-prefix protection on session-cookie presence.
//!
//! Sessions are issued and validated by the external identity provider.
//! The gate only checks that the provider's cookie is present on protected
//! prefixes and hands everyone else to the hosted sign-in page.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use crate::config::GateConfig;

/// Session gate middleware factory.
pub struct SessionGate {
    config: Arc<GateConfig>,
}

impl SessionGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateService {
            service,
            config: self.config.clone(),
        }))
    }
}

pub struct SessionGateService<S> {
    service: S,
    config: Arc<GateConfig>,
}

impl<S, B> Service<ServiceRequest> for SessionGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let gated = self
            .config
            .protected_prefixes
            .iter()
            .any(|prefix| req.path().starts_with(prefix.as_str()));

        if gated && req.cookie(&self.config.session_cookie).is_none() {
            tracing::debug!(path = %req.path(), "No session cookie - redirecting to sign-in");

            let location = format!(
                "{}?redirect_to={}",
                self.config.sign_in_url,
                req.path()
            );
            let response = HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location))
                .finish();

            let (http_req, _payload) = req.into_parts();
            let srv_response = ServiceResponse::new(http_req, response);

            return Box::pin(async move { Ok(srv_response.map_into_right_body()) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, cookie::Cookie, test, web};

    fn gate() -> SessionGate {
        SessionGate::new(GateConfig {
            protected_prefixes: vec!["/dashboard".to_string(), "/api/account".to_string()],
            session_cookie: "capmatch_session".to_string(),
            sign_in_url: "https://id.capmatch.example/sign-in".to_string(),
        })
    }

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/dashboard",
            web::get().to(|| async { HttpResponse::Ok().finish() }),
        )
        .route(
            "/api/account/session",
            web::get().to(|| async { HttpResponse::Ok().finish() }),
        )
        .route(
            "/api/content/faq",
            web::get().to(|| async { HttpResponse::Ok().finish() }),
        );
    }

    #[actix_web::test]
    async fn redirects_protected_prefix_without_cookie() {
        let app = test::init_service(App::new().wrap(gate()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        let location = resp.headers().get("Location").unwrap().to_str().unwrap();
        assert!(location.starts_with("https://id.capmatch.example/sign-in"));
        assert!(location.contains("redirect_to=/dashboard"));
    }

    #[actix_web::test]
    async fn passes_protected_prefix_with_cookie_present() {
        let app = test::init_service(App::new().wrap(gate()).configure(routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/account/session")
            .cookie(Cookie::new("capmatch_session", "opaque-provider-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn leaves_public_routes_alone() {
        let app = test::init_service(App::new().wrap(gate()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/api/content/faq").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
