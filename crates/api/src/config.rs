use swipedeck_core::gate::{DEFAULT_HOME_URL, DEFAULT_ONBOARDING_URL, DEFAULT_SIGN_IN_URL};
use swipedeck_core::routes::{DEFAULT_ONBOARDING_ROUTES, DEFAULT_PUBLIC_ROUTES};

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the session key have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Absolute origin of the public site, used for sitemap links and the
    /// sign-in return URL.
    pub public_base_url: String,
    /// Session token verification key.
    pub session: SessionConfig,
    /// Identity-provider webhook signing secret. Webhooks fail with 500 when unset.
    pub webhook_secret: Option<String>,
    /// Path patterns reachable without a session.
    pub public_routes: Vec<String>,
    /// Path patterns that make up the onboarding flow.
    pub onboarding_routes: Vec<String>,
    pub sign_in_url: String,
    pub onboarding_url: String,
    pub home_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                               |
    /// |--------------------------|---------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                             |
    /// | `PORT`                   | `3000`                                |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`               |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                  |
    /// | `PUBLIC_BASE_URL`        | `https://socialswipedeck.com`         |
    /// | `WEBHOOK_SIGNING_SECRET` | unset                                 |
    /// | `PUBLIC_ROUTES`          | built-in allow-list                   |
    /// | `ONBOARDING_ROUTES`      | `/onboarding(.*),/api/onboarding(.*)` |
    /// | `SIGN_IN_URL`            | `/sign-in`                            |
    /// | `ONBOARDING_URL`         | `/onboarding/platform-selection`      |
    /// | `HOME_URL`               | `/dashboard`                          |
    ///
    /// Session key variables are documented on [`SessionConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = csv_var("CORS_ORIGINS", &["http://localhost:3000"]);

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "https://socialswipedeck.com".into())
            .trim_end_matches('/')
            .to_string();

        let webhook_secret = std::env::var("WEBHOOK_SIGNING_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let session = SessionConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            session,
            webhook_secret,
            public_routes: csv_var("PUBLIC_ROUTES", DEFAULT_PUBLIC_ROUTES),
            onboarding_routes: csv_var("ONBOARDING_ROUTES", DEFAULT_ONBOARDING_ROUTES),
            sign_in_url: std::env::var("SIGN_IN_URL").unwrap_or_else(|_| DEFAULT_SIGN_IN_URL.into()),
            onboarding_url: std::env::var("ONBOARDING_URL")
                .unwrap_or_else(|_| DEFAULT_ONBOARDING_URL.into()),
            home_url: std::env::var("HOME_URL").unwrap_or_else(|_| DEFAULT_HOME_URL.into()),
        }
    }
}

/// Read a comma-separated list, falling back to `default` when unset.
fn csv_var(name: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(name) {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}
