//! API DTOs (Data Transfer Objects)
//!
//! Responses reuse the domain's own serialization (`PuzzleState`,
//! `SessionId`); only request shapes live here.

use serde::Deserialize;

use crate::application::create_session::CreateSessionInput;

/// Query for POST /v1/sessions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionQuery {
    pub number_of_discs: Option<i64>,
    pub from_tower: Option<i64>,
    pub to_tower: Option<i64>,
}

impl From<CreateSessionQuery> for CreateSessionInput {
    fn from(q: CreateSessionQuery) -> Self {
        Self {
            number_of_discs: q.number_of_discs,
            from_tower: q.from_tower,
            to_tower: q.to_tower,
        }
    }
}

/// Query for POST /v1/sessions/{sessionId}/move
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveQuery {
    pub from_tower: i64,
    pub to_tower: i64,
    pub timeout_ms: Option<i64>,
}

/// Optional lock wait for read routes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockQuery {
    pub timeout_ms: Option<i64>,
}
