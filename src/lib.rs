//! # parlor-games
//!
//! Pure game logic for two small parlor games: a treasure hunt through a
//! ten-room house, and a two-player gradient tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **House-Configured**: No hardcoded floor plan in the engine. Games
//!    define rooms, directed exits, and effects via `HouseConfig`; the
//!    standard layout ships as `HouseConfig::manor()`.
//!
//! 2. **Logic Only**: No rendering, input handling, or timing. Every
//!    operation returns a typed outcome or error for a front end to
//!    present however it likes.
//!
//! 3. **Deterministic**: The hunt never rolls dice, and the puzzle's only
//!    randomness is a seeded board scramble, so play-throughs replay
//!    exactly.
//!
//! ## Architecture
//!
//! - **Dense Ids**: Room names resolve to `RoomId` once at construction;
//!   runtime adjacency checks are id comparisons, not string scans.
//!
//! - **Journaled State**: Every state change appends a `GameEvent` to an
//!   `im` vector, cheap to snapshot and carried through saves.
//!
//! - **Versioned Saves**: `bincode` snapshots with a format version,
//!   rejected on mismatch instead of misread.
//!
//! ## Modules
//!
//! - `core`: Room configuration, players, events, RNG
//! - `hunt`: The treasure hunt engine with rooms, movement, and saves
//! - `gradient`: The gradient tile puzzle

pub mod core;
pub mod gradient;
pub mod hunt;

// Re-export commonly used types
pub use crate::core::{
    GameEvent, GameRng, HouseConfig, Player, RoomId, RoomSpec, DEFAULT_MAX_CAPACITY, MAX_HEALTH,
};

pub use crate::hunt::{
    AddError, HuntEngine, MoveError, MoveOutcome, PlayerView, RedistributeError,
    RedistributionReport, RoomRegistry, RoomView, SaveError,
};

pub use crate::gradient::{Board, GradientGame, Rgb, Side, SwapError, SwapOutcome, NUM_TILES};
