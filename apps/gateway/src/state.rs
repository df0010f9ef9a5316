//! Application state - shared across all handlers.

use std::sync::Arc;

use capmatch_core::ports::{InquiryIntake, RequestThrottle};
use capmatch_infra::{
    FixedWindowThrottle, HttpInquiryIntake, HttpIntakeConfig, InMemoryInquiryIntake,
};

/// Shared application state.
///
/// The throttle is built here and injected into everything that needs it
/// (admission middleware, sweep job) rather than living in a module-level
/// singleton.
#[derive(Clone)]
pub struct AppState {
    pub throttle: Arc<dyn RequestThrottle>,
    pub intake: Arc<dyn InquiryIntake>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new() -> Self {
        let throttle: Arc<dyn RequestThrottle> = Arc::new(FixedWindowThrottle::from_env());

        let intake: Arc<dyn InquiryIntake> = match HttpIntakeConfig::from_env() {
            Some(config) => match HttpInquiryIntake::new(config) {
                Ok(intake) => Arc::new(intake),
                Err(e) => {
                    tracing::error!(
                        "Failed to build intake client: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryInquiryIntake::new())
                }
            },
            None => {
                tracing::warn!("INTAKE_BASE_URL not set. Inquiries will be kept in memory only.");
                Arc::new(InMemoryInquiryIntake::new())
            }
        };

        tracing::info!("Application state initialized");

        Self { throttle, intake }
    }
}
