//! Journal events recording what happened during a hunt.
//!
//! The engine appends one `GameEvent` per state change. Events are
//! self-contained: they carry display names instead of ids so a journal
//! renders without registry access and survives in save files unchanged.

use serde::{Deserialize, Serialize};

/// One entry in the engine's journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player joined the hunt at the entry room.
    PlayerAdded { player: String, room: String },

    /// A player moved between rooms. `health` is the value after the
    /// destination's effect was applied.
    PlayerMoved {
        player: String,
        from: String,
        to: String,
        health: i32,
    },

    /// The key room granted its key.
    KeyFound { player: String },

    /// A room effect dropped a player's health to 0; they left the game.
    PlayerDied { player: String, room: String },

    /// A player was removed on request.
    PlayerRemoved { player: String },

    /// A redistribution pass relocated an excess occupant.
    PlayerRelocated {
        player: String,
        from: String,
        to: String,
    },

    /// The treasure room was opened; the round is over.
    TreasureFound { player: String },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerAdded { player, room } => {
                write!(f, "{} joined in the {}", player, room)
            }
            GameEvent::PlayerMoved {
                player,
                from,
                to,
                health,
            } => {
                write!(f, "{} moved from {} to {} (health {})", player, from, to, health)
            }
            GameEvent::KeyFound { player } => write!(f, "{} found the key", player),
            GameEvent::PlayerDied { player, room } => {
                write!(f, "{} died in the {}", player, room)
            }
            GameEvent::PlayerRemoved { player } => write!(f, "{} left the game", player),
            GameEvent::PlayerRelocated { player, from, to } => {
                write!(f, "{} was relocated from {} to {}", player, from, to)
            }
            GameEvent::TreasureFound { player } => {
                write!(f, "{} found the treasure", player)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines() {
        let added = GameEvent::PlayerAdded {
            player: "Alice".into(),
            room: "Main Hall".into(),
        };
        assert_eq!(format!("{}", added), "Alice joined in the Main Hall");

        let moved = GameEvent::PlayerMoved {
            player: "Alice".into(),
            from: "Stairway".into(),
            to: "Attic".into(),
            health: 80,
        };
        assert_eq!(
            format!("{}", moved),
            "Alice moved from Stairway to Attic (health 80)"
        );

        let died = GameEvent::PlayerDied {
            player: "Bob".into(),
            room: "Kitchen".into(),
        };
        assert_eq!(format!("{}", died), "Bob died in the Kitchen");

        let won = GameEvent::TreasureFound {
            player: "Alice".into(),
        };
        assert_eq!(format!("{}", won), "Alice found the treasure");
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::PlayerRelocated {
            player: "Cara".into(),
            from: "Main Hall".into(),
            to: "Kitchen".into(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
