//! Treasure hunt: rooms, players, movement, and persistence.
//!
//! The hunt is **house-configured**, not hardcoded. Games define their
//! rooms (names, effects, directed exits, the entry/key/treasure roles)
//! via `HouseConfig` at startup; `HuntEngine::manor()` builds the
//! standard ten-room layout.
//!
//! ## Key Types
//!
//! - `HuntEngine`: The game itself (adds, moves, removals, redistribution)
//! - `RoomRegistry`: Validated, immutable floor plan (from `HouseConfig`)
//! - `Roster`: Player storage keyed by normalized name
//! - `MoveOutcome`: What a successful move did
//! - `RoomView` / `PlayerView`: Read-only snapshots for callers
//! - `save_hunt` / `load_hunt`: bincode persistence

pub mod engine;
pub mod error;
pub mod registry;
pub mod roster;
pub mod save;
pub mod snapshot;

pub use engine::{HuntEngine, MoveOutcome, RedistributionReport};
pub use error::{AddError, MoveError, RedistributeError};
pub use registry::{RoomDef, RoomRegistry};
pub use roster::Roster;
pub use save::{load_hunt, save_hunt, SaveData, SaveError};
pub use snapshot::{PlayerView, RoomView};

// Re-export house types from core for convenience
pub use crate::core::config::{HouseConfig, RoomId, RoomSpec};
