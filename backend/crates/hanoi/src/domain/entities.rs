//! Domain Entities
//!
//! [`PuzzleState`] is the data aggregate for one puzzle instance.
//!
//! Towers are `u64` bit sets: bit `k` of `towers[t]` set means the disc of
//! size `k + 1` sits on tower `t`. The lowest set bit of a tower is its top
//! disc. At most 64 discs fit this encoding.

use kernel::id::{IdSequence, SessionId, markers};
use serde::Serialize;

use crate::domain::value_objects::{DiscCount, TowerIndex};
use crate::error::HanoiResult;

static SESSION_IDS: IdSequence<markers::Session> = IdSequence::new();

/// State of one puzzle
///
/// Serializes with a stable field set and order:
/// `sessionId, numberOfDiscs, fromTower, toTower, numberOfMoves, towers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleState {
    #[serde(rename = "sessionId")]
    id: SessionId,
    #[serde(rename = "numberOfDiscs")]
    disc_count: DiscCount,
    #[serde(rename = "fromTower")]
    source: TowerIndex,
    #[serde(rename = "toTower")]
    target: TowerIndex,
    #[serde(rename = "numberOfMoves")]
    move_count: u64,
    towers: [u64; TowerIndex::COUNT],
}

impl PuzzleState {
    /// Stack every disc on `source`
    ///
    /// Validates disc count, then source, then target, then that they
    /// differ. An id is drawn only once validation has passed.
    pub fn new(disc_count: i64, source: i64, target: i64) -> HanoiResult<Self> {
        let disc_count = DiscCount::new(disc_count)?;
        let (source, target) = TowerIndex::pair(source, target)?;

        let mut towers = [0; TowerIndex::COUNT];
        towers[source.as_usize()] = disc_count.full_tower();

        Ok(Self {
            id: SESSION_IDS.next(),
            disc_count,
            source,
            target,
            move_count: 0,
            towers,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn disc_count(&self) -> DiscCount {
        self.disc_count
    }

    pub fn source(&self) -> TowerIndex {
        self.source
    }

    pub fn target(&self) -> TowerIndex {
        self.target
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn towers(&self) -> [u64; TowerIndex::COUNT] {
        self.towers
    }

    pub fn tower(&self, index: TowerIndex) -> u64 {
        self.towers[index.as_usize()]
    }

    /// Every disc is on the target tower
    pub fn is_solved(&self) -> bool {
        self.tower(self.target) == self.disc_count.full_tower()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Move the disc at bit `disc` from `from` to `to` and count the move.
    /// Legality is the caller's responsibility.
    pub(crate) fn relocate(&mut self, disc: u32, from: TowerIndex, to: TowerIndex) {
        let mask = 1u64 << disc;
        self.towers[from.as_usize()] &= !mask;
        self.towers[to.as_usize()] |= mask;
        self.move_count += 1;
    }
}
