//! Display snapshots handed to presentation code.
//!
//! Views are plain data detached from engine internals: cloning one never
//! borrows the engine, and serializing one never drags internals along.
//! Presentation layers render these however they like; the engine never
//! formats dialogs.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;

/// Point-in-time view of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Display name, casing preserved.
    pub name: String,
    /// Health at snapshot time.
    pub health: i32,
    /// Whether the basement key was held at snapshot time.
    pub has_key: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            health: player.health(),
            has_key: player.has_key(),
        }
    }
}

impl std::fmt::Display for PlayerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Health: {})", self.name, self.health)?;
        if self.has_key {
            write!(f, " + Key")?;
        }
        Ok(())
    }
}

/// Point-in-time view of one room and everyone standing in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    /// Room name.
    pub name: String,
    /// Room description.
    pub description: String,
    /// Exit names in authored order.
    pub exits: Vec<String>,
    /// Occupants in arrival order.
    pub occupants: Vec<PlayerView>,
}
