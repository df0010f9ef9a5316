//! # CapMatch Gateway
//!
//! Marketing content API and light authentication gateway for the CapMatch
//! investment-matching platform.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

#[cfg(feature = "scheduler")]
mod background;

use config::AppConfig;
use middleware::session_gate::SessionGate;
use observability::RequestIdMiddleware;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&telemetry::TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting CapMatch gateway on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new();

    #[cfg(feature = "scheduler")]
    let scheduler = start_sweeper(&state, &config).await;

    let app_config = config.clone();
    let result = HttpServer::new(move || {
        let state = state.clone();
        let throttle = state.throttle.clone();

        // registration order is inside-out: the session gate sits closest
        // to the routes, request IDs and log spans cover everything
        App::new()
            .wrap(SessionGate::new(app_config.gate.clone()))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(app_config.clone()))
            .configure(|cfg| handlers::configure_routes(cfg, throttle))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    #[cfg(feature = "scheduler")]
    if let Some(mut scheduler) = scheduler {
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!("Scheduler shutdown failed: {}", e);
        }
    }

    result
}

/// Register and start the periodic throttle sweep.
///
/// Scheduler failures are not fatal: admission stays correct without
/// sweeping, expired records are then only reclaimed lazily on next access.
#[cfg(feature = "scheduler")]
async fn start_sweeper(state: &AppState, config: &AppConfig) -> Option<background::Scheduler> {
    use std::time::Duration;

    let scheduler =
        match background::Scheduler::new(background::SchedulerConfig::from_env()).await {
            Ok(scheduler) => scheduler,
            Err(e) => {
                tracing::error!("Failed to create scheduler: {}", e);
                return None;
            }
        };

    let throttle = state.throttle.clone();
    let registered = scheduler
        .add_repeated(Duration::from_secs(config.sweep_interval_secs), move || {
            let throttle = throttle.clone();
            async move {
                throttle.sweep_expired().await;
            }
        })
        .await;

    if let Err(e) = registered {
        tracing::error!("Failed to register throttle sweep: {}", e);
        return None;
    }

    if let Err(e) = scheduler.start().await {
        tracing::error!("Failed to start scheduler: {}", e);
        return None;
    }

    Some(scheduler)
}
