use std::sync::Arc;

use swipedeck_core::error::CoreError;
use swipedeck_core::gate::OnboardingGate;
use swipedeck_core::routes::RouteMatcher;
use swipedeck_core::webhook::WebhookVerifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: swipedeck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled route matchers and redirect targets for the onboarding gate.
    pub gate: Arc<OnboardingGate>,
    /// Webhook signature verifier, `None` when no signing secret is configured.
    pub webhook: Option<Arc<WebhookVerifier>>,
}

impl AppState {
    /// Compile the gate and webhook verifier from `config`.
    ///
    /// Fails on an invalid route pattern or signing secret, so callers can
    /// abort at startup rather than at request time.
    pub fn new(pool: swipedeck_db::DbPool, config: ServerConfig) -> Result<Self, CoreError> {
        let gate = OnboardingGate::new(
            RouteMatcher::new(&config.public_routes)?,
            RouteMatcher::new(&config.onboarding_routes)?,
            config.sign_in_url.as_str(),
            config.onboarding_url.as_str(),
            config.home_url.as_str(),
        );

        let webhook = config
            .webhook_secret
            .as_deref()
            .map(WebhookVerifier::new)
            .transpose()
            .map_err(|e| CoreError::Validation(e.to_string()))?
            .map(Arc::new);

        Ok(Self {
            pool,
            config: Arc::new(config),
            gate: Arc::new(gate),
            webhook,
        })
    }
}
