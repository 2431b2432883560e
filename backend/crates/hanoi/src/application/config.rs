//! Application Configuration
//!
//! Configuration for the Hanoi application layer.

use crate::domain::controller::LockPolicy;

/// Hanoi application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanoiConfig {
    /// Lock policy used when a request does not choose one
    pub lock_policy: LockPolicy,
    /// Disc count for sessions created without one
    pub default_disc_count: i64,
    /// Source tower for sessions created without one
    pub default_from_tower: i64,
    /// Target tower for sessions created without one
    pub default_to_tower: i64,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            lock_policy: LockPolicy::Blocking,
            default_disc_count: 4,
            default_from_tower: 0,
            default_to_tower: 2,
        }
    }
}

impl HanoiConfig {
    /// Per-call override in milliseconds (see [`LockPolicy::from_timeout_ms`]),
    /// falling back to the configured policy
    pub fn lock_policy_for(&self, timeout_ms: Option<i64>) -> LockPolicy {
        timeout_ms
            .map(LockPolicy::from_timeout_ms)
            .unwrap_or(self.lock_policy)
    }
}
