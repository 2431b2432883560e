//! Domain Value Objects
//!
//! Validated, immutable inputs for puzzle construction and moves.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{HanoiError, HanoiResult};

/// Number of discs in a puzzle, 1 through 64 (one bit per disc in a `u64`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscCount(u32);

impl DiscCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = u64::BITS;

    pub fn new(count: i64) -> HanoiResult<Self> {
        match u32::try_from(count) {
            Ok(n) if (Self::MIN..=Self::MAX).contains(&n) => Ok(Self(n)),
            _ => Err(HanoiError::InvalidDiscCount(count)),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Tower value holding every disc: `(1 << n) - 1`, all ones for n = 64
    pub fn full_tower(&self) -> u64 {
        u64::MAX >> (u64::BITS - self.0)
    }
}

impl Serialize for DiscCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

/// Which end of a move (or of the puzzle) an index was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerRole {
    Source,
    Target,
}

impl fmt::Display for TowerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TowerRole::Source => "source",
            TowerRole::Target => "target",
        })
    }
}

/// One of the three towers, 0 through 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TowerIndex(u8);

impl TowerIndex {
    pub const COUNT: usize = 3;

    pub fn new(index: i64, role: TowerRole) -> HanoiResult<Self> {
        match u8::try_from(index) {
            Ok(i) if usize::from(i) < Self::COUNT => Ok(Self(i)),
            _ => Err(HanoiError::InvalidTower { role, value: index }),
        }
    }

    /// Validate a `(source, target)` pair, source first
    pub fn pair(source: i64, target: i64) -> HanoiResult<(Self, Self)> {
        let source = Self::new(source, TowerRole::Source)?;
        let target = Self::new(target, TowerRole::Target)?;
        if source == target {
            return Err(HanoiError::SameTower);
        }
        Ok((source, target))
    }

    pub fn as_usize(&self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for TowerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TowerIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
