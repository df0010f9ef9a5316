//! Admission middleware for the public inquiry endpoint.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use capmatch_shared::ErrorResponse;
use sha2::{Digest, Sha256};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use capmatch_core::ports::RequestThrottle;

/// Throttle middleware factory.
pub struct ThrottleMiddleware {
    throttle: Arc<dyn RequestThrottle>,
}

impl ThrottleMiddleware {
    pub fn new(throttle: Arc<dyn RequestThrottle>) -> Self {
        Self { throttle }
    }
}

/// Derive the throttle identifier for a request.
///
/// The raw client address never reaches the throttle table, only its
/// digest does.
fn identifier_for(req: &ServiceRequest) -> String {
    let addr = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();
    format!("ip:{:x}", Sha256::digest(addr.as_bytes()))
}

impl<S, B> Transform<S, ServiceRequest> for ThrottleMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ThrottleMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ThrottleMiddlewareService {
            service,
            throttle: self.throttle.clone(),
        }))
    }
}

pub struct ThrottleMiddlewareService<S> {
    service: S,
    throttle: Arc<dyn RequestThrottle>,
}

impl<S, B> Service<ServiceRequest> for ThrottleMiddlewareService<S>
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
        let identifier = identifier_for(&req);

        // The in-process throttle resolves immediately; the admission
        // decision has to land before the inner service is called.
        let admission =
            futures::executor::block_on(self.throttle.check_and_admit(&identifier));

        if admission.allowed {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        tracing::warn!(identifier = %identifier, "Throttled anonymous request");

        let retry_secs = admission.retry_after.as_secs().max(1);
        let error = ErrorResponse::too_many_requests(format!(
            "Rate limit exceeded. Try again in {retry_secs} seconds."
        ));

        let response = HttpResponse::TooManyRequests()
            .insert_header(("X-RateLimit-Remaining", "0"))
            .insert_header(("Retry-After", retry_secs.to_string()))
            .json(error);

        let (http_req, _payload) = req.into_parts();
        let srv_response = ServiceResponse::new(http_req, response);

        Box::pin(async move { Ok(srv_response.map_into_right_body()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use capmatch_infra::{FixedWindowThrottle, ThrottleConfig};
    use std::time::Duration;

    fn throttle(max_requests: u32) -> Arc<dyn RequestThrottle> {
        Arc::new(FixedWindowThrottle::new(ThrottleConfig {
            max_requests,
            window: Duration::from_secs(60),
        }))
    }

    #[actix_web::test]
    async fn denies_past_the_limit_with_retry_after() {
        let app = test::init_service(
            App::new().service(
                web::resource("/api/inquiries")
                    .wrap(ThrottleMiddleware::new(throttle(2)))
                    .route(web::post().to(|| async { HttpResponse::Accepted().finish() })),
            ),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/api/inquiries").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::ACCEPTED);
        }

        let req = test::TestRequest::post().uri("/api/inquiries").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(resp.headers().contains_key("Retry-After"));
        assert_eq!(resp.headers().get("X-RateLimit-Remaining").unwrap(), "0");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 429);
        assert_eq!(body["title"], "Too Many Requests");
    }

    #[actix_web::test]
    async fn wrapped_routes_only_see_admitted_requests() {
        let app = test::init_service(
            App::new()
                .service(
                    web::resource("/api/inquiries")
                        .wrap(ThrottleMiddleware::new(throttle(1)))
                        .route(web::post().to(|| async { HttpResponse::Accepted().finish() })),
                )
                .route(
                    "/api/health",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/inquiries").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::ACCEPTED
        );
        let req = test::TestRequest::post().uri("/api/inquiries").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::TOO_MANY_REQUESTS
        );

        // routes outside the wrapped resource are not throttled
        let req = test::TestRequest::get().uri("/api/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
