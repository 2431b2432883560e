//! Puzzle Controller
//!
//! Owns one [`PuzzleState`] behind an async mutex. Every read and write goes
//! through the lock; at most one operation runs against a given puzzle at a
//! time, while different controllers never contend with each other.
//!
//! How long a caller is willing to wait is chosen per call with
//! [`LockPolicy`]. Held sections only touch bits; nothing is awaited or
//! logged while a guard is alive.

use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::entities::PuzzleState;
use crate::domain::services::{count_set_bits, least_significant_set_bit_index};
use crate::domain::value_objects::TowerIndex;
use crate::error::{HanoiError, HanoiResult};
use kernel::id::SessionId;

/// How long to wait for a controller's lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    /// Wait as long as it takes
    #[default]
    Blocking,
    /// Wait at most this long
    Bounded(Duration),
    /// Fail at once if the lock is held
    NonBlocking,
}

impl LockPolicy {
    /// Negative waits forever, zero never waits, positive waits that many ms
    pub fn from_timeout_ms(timeout_ms: i64) -> Self {
        match u64::try_from(timeout_ms) {
            Err(_) => LockPolicy::Blocking,
            Ok(0) => LockPolicy::NonBlocking,
            Ok(ms) => LockPolicy::Bounded(Duration::from_millis(ms)),
        }
    }
}

/// Exclusive owner of one puzzle's state
#[derive(Debug)]
pub struct PuzzleController {
    id: SessionId,
    state: Mutex<PuzzleState>,
}

impl PuzzleController {
    pub fn new(disc_count: i64, source: i64, target: i64) -> HanoiResult<Self> {
        let state = PuzzleState::new(disc_count, source, target)?;
        Ok(Self {
            id: state.id(),
            state: Mutex::new(state),
        })
    }

    /// Registry key; readable without taking the lock
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Holds the lock for as long as the guard lives
    #[cfg(test)]
    pub(crate) async fn hold(&self) -> MutexGuard<'_, PuzzleState> {
        self.state.lock().await
    }

    async fn acquire(&self, policy: LockPolicy) -> HanoiResult<MutexGuard<'_, PuzzleState>> {
        match policy {
            LockPolicy::Blocking => Ok(self.state.lock().await),
            LockPolicy::NonBlocking => self
                .state
                .try_lock()
                .map_err(|_| HanoiError::LockHeld),
            LockPolicy::Bounded(wait) => tokio::time::timeout(wait, self.state.lock())
                .await
                .map_err(|_| HanoiError::LockTimeout(wait)),
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self, policy: LockPolicy) -> HanoiResult<PuzzleState> {
        let guard = self.acquire(policy).await?;
        Ok(guard.clone())
    }

    /// Move the top disc of `source` onto `target`
    ///
    /// Tower indices are validated before the lock is touched. Every
    /// rejection leaves towers and move count as they were.
    pub async fn make_move(&self, source: i64, target: i64, policy: LockPolicy) -> HanoiResult<()> {
        let (source, target) = TowerIndex::pair(source, target)?;

        let mut state = self.acquire(policy).await?;

        let from = state.tower(source);
        if count_set_bits(from) == 0 {
            return Err(HanoiError::EmptyTower(source));
        }
        let disc = least_significant_set_bit_index(from)?;

        let onto = state.tower(target);
        if count_set_bits(onto) != 0 {
            let top = least_significant_set_bit_index(onto)?;
            if disc > top {
                return Err(HanoiError::LargerOnSmaller {
                    moving: disc + 1,
                    resting: top + 1,
                });
            }
        }

        state.relocate(disc, source, target);
        Ok(())
    }

    /// Every disc is on the target tower; computed fresh on each call
    pub async fn is_complete(&self, policy: LockPolicy) -> HanoiResult<bool> {
        let state = self.acquire(policy).await?;
        Ok(state.is_solved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic recursive solution, as (source, target) pairs
    fn optimal_moves(discs: u32, source: i64, target: i64, spare: i64, out: &mut Vec<(i64, i64)>) {
        if discs == 0 {
            return;
        }
        optimal_moves(discs - 1, source, spare, target, out);
        out.push((source, target));
        optimal_moves(discs - 1, spare, target, source, out);
    }

    async fn towers(c: &PuzzleController) -> [u64; 3] {
        c.state(LockPolicy::Blocking).await.unwrap().towers()
    }

    #[test]
    fn test_lock_policy_from_timeout_ms() {
        assert_eq!(LockPolicy::from_timeout_ms(-1), LockPolicy::Blocking);
        assert_eq!(LockPolicy::from_timeout_ms(0), LockPolicy::NonBlocking);
        assert_eq!(
            LockPolicy::from_timeout_ms(250),
            LockPolicy::Bounded(Duration::from_millis(250))
        );
    }

    #[tokio::test]
    async fn test_new_propagates_validation() {
        assert_eq!(
            PuzzleController::new(0, 0, 2).unwrap_err(),
            HanoiError::InvalidDiscCount(0)
        );
        assert_eq!(
            PuzzleController::new(4, 2, 2).unwrap_err(),
            HanoiError::SameTower
        );
    }

    #[tokio::test]
    async fn test_state_happy_path() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        let state = c.state(LockPolicy::Blocking).await.unwrap();
        assert_eq!(state.id(), c.id());
        assert_eq!(state.towers(), [15, 0, 0]);
    }

    #[tokio::test]
    async fn test_move_scenario_and_full_solution() {
        let c = PuzzleController::new(4, 0, 2).unwrap();

        c.make_move(0, 1, LockPolicy::Blocking).await.unwrap();
        // smallest disc / least-significant bit is moved
        assert_eq!(towers(&c).await, [0b1110, 0b0001, 0]);
        c.make_move(0, 2, LockPolicy::Blocking).await.unwrap();
        assert_eq!(towers(&c).await, [12, 1, 2]);

        let rest = [
            (1, 2),
            (0, 1),
            (2, 0),
            (2, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 0),
            (2, 0),
            (1, 2),
            (0, 1),
            (0, 2),
            (1, 2),
        ];
        for (i, (s, t)) in rest.into_iter().enumerate() {
            assert!(!c.is_complete(LockPolicy::Blocking).await.unwrap(), "solved early at {i}");
            c.make_move(s, t, LockPolicy::Blocking).await.unwrap();
        }

        let state = c.state(LockPolicy::Blocking).await.unwrap();
        assert_eq!(state.towers(), [0, 0, 0b1111]);
        assert_eq!(state.move_count(), 15);
        assert!(c.is_complete(LockPolicy::Blocking).await.unwrap());
    }

    #[tokio::test]
    async fn test_recursive_solution_conserves_discs() {
        for discs in 1..=10u32 {
            for (source, target, spare) in [(0, 2, 1), (2, 1, 0), (1, 0, 2)] {
                let c = PuzzleController::new(i64::from(discs), source, target).unwrap();
                let mut moves = Vec::new();
                optimal_moves(discs, source, target, spare, &mut moves);

                for (n, (s, t)) in moves.iter().enumerate() {
                    let before = c.state(LockPolicy::Blocking).await.unwrap();
                    c.make_move(*s, *t, LockPolicy::Blocking).await.unwrap();
                    let after = c.state(LockPolicy::Blocking).await.unwrap();

                    let total: u32 = after.towers().iter().map(|t| count_set_bits(*t)).sum();
                    assert_eq!(total, discs);
                    assert_eq!(after.move_count(), n as u64 + 1);

                    // exactly two towers changed, by the same single bit
                    let changed: Vec<u64> = (0..3)
                        .map(|i| before.towers()[i] ^ after.towers()[i])
                        .filter(|d| *d != 0)
                        .collect();
                    assert_eq!(changed.len(), 2);
                    assert_eq!(changed[0], changed[1]);
                    assert_eq!(count_set_bits(changed[0]), 1);
                }

                assert_eq!(moves.len() as u64, (1u64 << discs) - 1);
                assert!(c.is_complete(LockPolicy::Blocking).await.unwrap());
            }
        }
    }

    #[tokio::test]
    async fn test_move_invalid_indices_rejected() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        assert_eq!(
            c.make_move(-1, 2, LockPolicy::Blocking).await.unwrap_err().to_string(),
            "source -1 is invalid"
        );
        assert_eq!(
            c.make_move(3, 2, LockPolicy::Blocking).await.unwrap_err().to_string(),
            "source 3 is invalid"
        );
        assert_eq!(
            c.make_move(0, -1, LockPolicy::Blocking).await.unwrap_err().to_string(),
            "target -1 is invalid"
        );
        assert_eq!(
            c.make_move(0, 3, LockPolicy::Blocking).await.unwrap_err().to_string(),
            "target 3 is invalid"
        );
        assert_eq!(
            c.make_move(0, 0, LockPolicy::Blocking).await.unwrap_err(),
            HanoiError::SameTower
        );
        assert_eq!(c.state(LockPolicy::Blocking).await.unwrap().move_count(), 0);
    }

    #[tokio::test]
    async fn test_argument_checks_precede_lock() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        let _held = c.state.lock().await;
        // bad indices are reported even though the lock is busy
        assert_eq!(
            c.make_move(0, 0, LockPolicy::NonBlocking).await.unwrap_err(),
            HanoiError::SameTower
        );
    }

    #[tokio::test]
    async fn test_move_empty_source() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        let err = c.make_move(1, 0, LockPolicy::Blocking).await.unwrap_err();
        assert_eq!(err.to_string(), "source 1 is empty");
        assert!(err.is_invalid_argument());

        let state = c.state(LockPolicy::Blocking).await.unwrap();
        assert_eq!(state.towers(), [15, 0, 0]);
        assert_eq!(state.move_count(), 0);
    }

    #[tokio::test]
    async fn test_move_bigger_disc() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        c.make_move(0, 2, LockPolicy::Blocking).await.unwrap();
        let err = c.make_move(0, 2, LockPolicy::Blocking).await.unwrap_err();
        assert_eq!(err.to_string(), "cannot put disc 2 on top of disc 1");
        assert_eq!(
            err,
            HanoiError::LargerOnSmaller {
                moving: 2,
                resting: 1
            }
        );

        let state = c.state(LockPolicy::Blocking).await.unwrap();
        assert_eq!(state.towers(), [14, 0, 1]);
        assert_eq!(state.move_count(), 1);
    }

    #[tokio::test]
    async fn test_moves_allowed_after_solved() {
        let c = PuzzleController::new(1, 0, 2).unwrap();
        c.make_move(0, 2, LockPolicy::Blocking).await.unwrap();
        assert!(c.is_complete(LockPolicy::Blocking).await.unwrap());

        c.make_move(2, 1, LockPolicy::Blocking).await.unwrap();
        assert!(!c.is_complete(LockPolicy::Blocking).await.unwrap());
        assert_eq!(c.state(LockPolicy::Blocking).await.unwrap().move_count(), 2);
    }

    #[tokio::test]
    async fn test_sixty_four_discs() {
        let c = PuzzleController::new(64, 0, 2).unwrap();
        c.make_move(0, 1, LockPolicy::Blocking).await.unwrap();
        c.make_move(0, 2, LockPolicy::Blocking).await.unwrap();
        assert_eq!(towers(&c).await, [u64::MAX - 3, 1, 2]);
        assert!(!c.is_complete(LockPolicy::Blocking).await.unwrap());
    }

    #[tokio::test]
    async fn test_non_blocking_fails_when_held() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        let held = c.state.lock().await;

        assert_eq!(
            c.state(LockPolicy::NonBlocking).await.unwrap_err(),
            HanoiError::LockHeld
        );
        assert_eq!(
            c.make_move(0, 1, LockPolicy::NonBlocking).await,
            Err(HanoiError::LockHeld)
        );
        assert_eq!(
            c.is_complete(LockPolicy::NonBlocking).await,
            Err(HanoiError::LockHeld)
        );

        drop(held);
        assert_eq!(c.state(LockPolicy::NonBlocking).await.unwrap().move_count(), 0);
    }

    #[tokio::test]
    async fn test_bounded_times_out_when_held() {
        let c = PuzzleController::new(4, 0, 2).unwrap();
        let held = c.state.lock().await;

        let wait = Duration::from_millis(20);
        assert_eq!(
            c.make_move(0, 1, LockPolicy::Bounded(wait)).await.unwrap_err(),
            HanoiError::LockTimeout(wait)
        );
        assert_eq!(held.towers(), [15, 0, 0]);
        assert_eq!(held.move_count(), 0);
    }

    #[tokio::test]
    async fn test_bounded_succeeds_once_released() {
        let c = std::sync::Arc::new(PuzzleController::new(4, 0, 2).unwrap());
        let held = c.state.lock().await;

        let waiter = {
            let c = std::sync::Arc::clone(&c);
            tokio::spawn(async move {
                c.make_move(0, 1, LockPolicy::Bounded(Duration::from_secs(5)))
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(held);

        waiter.await.unwrap().unwrap();
        assert_eq!(towers(&c).await, [14, 1, 0]);
    }

    #[tokio::test]
    async fn test_distinct_controllers_do_not_block() {
        let a = PuzzleController::new(4, 0, 2).unwrap();
        let b = PuzzleController::new(4, 0, 2).unwrap();
        let _held = a.state.lock().await;

        b.make_move(0, 1, LockPolicy::NonBlocking).await.unwrap();
        assert!(!b.is_complete(LockPolicy::NonBlocking).await.unwrap());
        assert_eq!(b.state(LockPolicy::NonBlocking).await.unwrap().move_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_moves_are_serialized() {
        // 32 callers race to move disc 1 between towers 1 and 2 after it
        // has been parked on tower 1; every successful move is counted once.
        let c = std::sync::Arc::new(PuzzleController::new(3, 0, 2).unwrap());
        c.make_move(0, 1, LockPolicy::Blocking).await.unwrap();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let c = std::sync::Arc::clone(&c);
                let (s, t) = if i % 2 == 0 { (1, 2) } else { (2, 1) };
                tokio::spawn(async move { c.make_move(s, t, LockPolicy::Blocking).await })
            })
            .collect();

        let mut ok = 0u64;
        for task in tasks {
            match task.await.unwrap() {
                Ok(()) => ok += 1,
                Err(e) => assert!(e.is_invalid_argument()),
            }
        }

        let state = c.state(LockPolicy::Blocking).await.unwrap();
        assert_eq!(state.move_count(), ok + 1);
        let total: u32 = state.towers().iter().map(|t| count_set_bits(*t)).sum();
        assert_eq!(total, 3);
        assert_eq!(state.tower(state.source()), 0b110);
    }
}
