//! Domain Layer - Puzzle rules and state
//!
//! This layer contains:
//! - Value objects (DiscCount, TowerIndex)
//! - The puzzle state aggregate (PuzzleState)
//! - Bit-scan services
//! - The lock-guarded controller (PuzzleController, LockPolicy)
//! - Repository traits (interfaces)
//!
//! Nothing here logs; errors are returned to the caller as-is.

pub mod controller;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
