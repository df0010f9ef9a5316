//! Sign-in redirect glue to the external identity provider.

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;

use crate::config::AppConfig;

#[derive(Debug, Deserialize)]
pub struct SignInQuery {
    pub redirect_to: Option<String>,
}

/// GET /auth/sign-in
///
/// Hands the visitor to the identity provider's hosted sign-in page,
/// preserving where they wanted to go.
pub async fn sign_in(config: web::Data<AppConfig>, query: web::Query<SignInQuery>) -> HttpResponse {
    let location = match &query.redirect_to {
        Some(redirect_to) => format!("{}?redirect_to={}", config.gate.sign_in_url, redirect_to),
        None => config.gate.sign_in_url.clone(),
    };

    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}
