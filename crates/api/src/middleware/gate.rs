//! Onboarding gate middleware.
//!
//! Runs before routing on every request. The decision is recomputed from the
//! session each time; nothing is cached between requests.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::middleware::auth::session_from_headers;
use crate::state::AppState;

/// Allow the request through or answer with a `307` to the gate's target.
pub async fn onboarding_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let location = {
        let path = req.uri().path();
        let claims = session_from_headers(req.headers(), &state.config.session);
        let metadata = claims.as_ref().and_then(|c| c.metadata.as_ref());
        let decision = state.gate.evaluate(path, claims.is_some(), metadata);

        tracing::debug!(
            path,
            ?decision,
            user_id = claims.as_ref().map(|c| c.sub.as_str()),
            "Onboarding gate"
        );

        let original_url = format!(
            "{}{}",
            state.config.public_base_url,
            req.uri().path_and_query().map_or(path, |pq| pq.as_str())
        );
        state.gate.redirect_location(decision, &original_url)
    };

    match location {
        Some(location) => Redirect::temporary(&location).into_response(),
        None => next.run(req).await,
    }
}
