//! Account endpoints behind the session gate.

use actix_web::HttpResponse;
use capmatch_shared::{ApiResponse, dto::SessionStatusResponse};

/// GET /api/account/session
///
/// Only reachable with the provider's session cookie present; the session
/// gate redirects everyone else. Profile data itself lives in the managed
/// backend.
pub async fn session() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(SessionStatusResponse {
        authenticated: true,
    }))
}
