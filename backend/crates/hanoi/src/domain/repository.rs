//! Repository Traits
//!
//! The session registry interface. Implementation is in the infra layer.

use kernel::id::SessionId;
use std::sync::Arc;

use crate::domain::controller::PuzzleController;

/// Session registry: session id -> puzzle controller
///
/// Lookups hand out shared controller handles so that no registry lock is
/// held while a caller waits on a controller's own lock.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Register a controller under its own id
    async fn insert(&self, controller: Arc<PuzzleController>);

    async fn get(&self, session_id: SessionId) -> Option<Arc<PuzzleController>>;

    /// Every live session; iteration order is not part of the contract
    async fn list(&self) -> Vec<Arc<PuzzleController>>;

    /// Drop a session; `false` if it was not registered
    async fn remove(&self, session_id: SessionId) -> bool;
}
