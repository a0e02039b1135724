//! Core types shared by the games: players, house configuration, journal
//! events, RNG.
//!
//! Nothing in here mutates game state on its own; the engines in `hunt` and
//! `gradient` own all transitions.

pub mod config;
pub mod event;
pub mod player;
pub mod rng;

pub use config::{HouseConfig, RoomId, RoomSpec, DEFAULT_MAX_CAPACITY};
pub use event::GameEvent;
pub use player::{Player, MAX_HEALTH};
pub use rng::GameRng;
