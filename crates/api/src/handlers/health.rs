//! Liveness report for load balancers and uptime checks.
//!
//! Always answers 200. An unreachable database marks the report `degraded`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match swipedeck_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable during health check");
            false
        }
    };
    Json(HealthReport::new(db_healthy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_database() {
        assert_eq!(HealthReport::new(true).status, "ok");
        assert_eq!(HealthReport::new(false).status, "degraded");
    }
}
