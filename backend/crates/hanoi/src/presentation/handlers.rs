//! HTTP Handlers

use crate::application::check_completion::CheckCompletionUseCase;
use crate::application::config::HanoiConfig;
use crate::application::create_session::CreateSessionUseCase;
use crate::application::move_disc::{MoveDiscInput, MoveDiscUseCase};
use crate::application::query_session::QuerySessionUseCase;
use crate::application::remove_session::RemoveSessionUseCase;
use crate::domain::entities::PuzzleState;
use crate::domain::repository::SessionRepository;
use crate::presentation::dto::{CreateSessionQuery, LockQuery, MoveQuery};
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppResult;
use kernel::id::SessionId;
use std::sync::Arc;

/// Shared state for Hanoi handlers
#[derive(Clone)]
pub struct HanoiAppState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<HanoiConfig>,
}

/// GET /v1/sessions
pub async fn list_sessions<R>(
    State(state): State<HanoiAppState<R>>,
    query: Result<Query<LockQuery>, QueryRejection>,
) -> AppResult<Json<Vec<PuzzleState>>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;
    let policy = state.config.lock_policy_for(query.timeout_ms);

    let use_case = QuerySessionUseCase::new(state.repo.clone());
    Ok(Json(use_case.list(policy).await?))
}

/// POST /v1/sessions
pub async fn create_session<R>(
    State(state): State<HanoiAppState<R>>,
    query: Result<Query<CreateSessionQuery>, QueryRejection>,
) -> AppResult<Json<SessionId>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    let use_case = CreateSessionUseCase::new(state.repo.clone(), state.config.clone());
    let session_id = use_case.execute(query.into()).await?;

    Ok(Json(session_id))
}

/// GET /v1/sessions/{sessionId}
pub async fn get_session<R>(
    State(state): State<HanoiAppState<R>>,
    path: Result<Path<SessionId>, PathRejection>,
    query: Result<Query<LockQuery>, QueryRejection>,
) -> AppResult<Json<PuzzleState>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path?;
    let Query(query) = query?;
    let policy = state.config.lock_policy_for(query.timeout_ms);

    let use_case = QuerySessionUseCase::new(state.repo.clone());
    Ok(Json(use_case.get(session_id, policy).await?))
}

/// POST /v1/sessions/{sessionId}/move
pub async fn move_disc<R>(
    State(state): State<HanoiAppState<R>>,
    path: Result<Path<SessionId>, PathRejection>,
    query: Result<Query<MoveQuery>, QueryRejection>,
) -> AppResult<StatusCode>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path?;
    let Query(query) = query?;
    let policy = state.config.lock_policy_for(query.timeout_ms);

    let input = MoveDiscInput {
        session_id,
        from_tower: query.from_tower,
        to_tower: query.to_tower,
    };

    let use_case = MoveDiscUseCase::new(state.repo.clone());
    use_case.execute(input, policy).await?;

    Ok(StatusCode::OK)
}

/// GET /v1/sessions/{sessionId}/complete
pub async fn is_complete<R>(
    State(state): State<HanoiAppState<R>>,
    path: Result<Path<SessionId>, PathRejection>,
    query: Result<Query<LockQuery>, QueryRejection>,
) -> AppResult<Json<bool>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path?;
    let Query(query) = query?;
    let policy = state.config.lock_policy_for(query.timeout_ms);

    let use_case = CheckCompletionUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute(session_id, policy).await?))
}

/// DELETE /v1/sessions/{sessionId}
pub async fn remove_session<R>(
    State(state): State<HanoiAppState<R>>,
    path: Result<Path<SessionId>, PathRejection>,
) -> AppResult<StatusCode>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path?;

    let use_case = RemoveSessionUseCase::new(state.repo.clone());
    use_case.execute(session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
