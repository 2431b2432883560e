//! Hanoi Router

use crate::application::config::HanoiConfig;
use crate::domain::repository::SessionRepository;
use crate::infra::memory::InMemorySessionRepository;
use crate::presentation::handlers::{self, HanoiAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the Hanoi router backed by the in-memory registry
pub fn hanoi_router(repo: InMemorySessionRepository, config: HanoiConfig) -> Router {
    hanoi_router_generic(repo, config)
}

/// Create a Hanoi router for any registry implementation
pub fn hanoi_router_generic<R>(repo: R, config: HanoiConfig) -> Router
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = HanoiAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/sessions",
            get(handlers::list_sessions::<R>).post(handlers::create_session::<R>),
        )
        .route(
            "/sessions/{session_id}",
            get(handlers::get_session::<R>).delete(handlers::remove_session::<R>),
        )
        .route("/sessions/{session_id}/move", post(handlers::move_disc::<R>))
        .route(
            "/sessions/{session_id}/complete",
            get(handlers::is_complete::<R>),
        )
        .with_state(state)
}
