//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gate: GateConfig,
    /// Seconds between background sweeps of the throttle table.
    pub sweep_interval_secs: u64,
}

/// Session-gate settings for protected route prefixes.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Route prefixes that require a session cookie.
    pub protected_prefixes: Vec<String>,
    /// Name of the identity provider's session cookie.
    pub session_cookie: String,
    /// The identity provider's hosted sign-in page.
    pub sign_in_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            gate: GateConfig::from_env(),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl GateConfig {
    /// Parse gate settings from environment.
    /// Format: PROTECTED_PREFIXES=/dashboard,/matches
    fn from_env() -> Self {
        Self {
            protected_prefixes: parse_prefixes(
                &env::var("PROTECTED_PREFIXES")
                    .unwrap_or_else(|_| "/dashboard,/matches,/api/account".to_string()),
            ),
            session_cookie: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "capmatch_session".to_string()),
            sign_in_url: env::var("AUTH_SIGN_IN_URL")
                .unwrap_or_else(|_| "https://id.capmatch.example/sign-in".to_string()),
        }
    }
}

fn parse_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|prefix| !prefix.is_empty())
        .map(String::from)
        .collect()
}
