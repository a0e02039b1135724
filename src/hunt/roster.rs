//! Player roster: registered players, their rooms, and occupant order.
//!
//! The roster is the only owner of `Player` values. All three internal maps
//! are keyed by the normalized (lower-cased) player name, which is what
//! makes name lookup case-insensitive everywhere and uniqueness a single
//! map probe. Invariant: a registered player appears in `players`, in
//! `locations`, and in exactly one room's occupant list; the engine never
//! lets the maps disagree.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::RoomId;
use crate::core::player::Player;

/// Normalize a player name for identity comparison.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Mutable game-side player state.
///
/// Occupant lists keep arrival order: a player entering a room is appended,
/// and redistribution peels excess players from the tail end of that order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Registered players keyed by normalized name.
    players: FxHashMap<String, Player>,

    /// Current room keyed by normalized name.
    locations: FxHashMap<String, RoomId>,

    /// Occupants per room, normalized names in arrival order.
    occupants: FxHashMap<RoomId, Vec<String>>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a normalized key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.players.contains_key(key)
    }

    /// Register a player in a room.
    ///
    /// Panics if the normalized name is already registered; callers check
    /// uniqueness first and report it as a domain error.
    pub fn insert(&mut self, player: Player, room: RoomId) {
        let key = normalize(player.name());
        if self.players.contains_key(&key) {
            panic!("Player '{}' already registered", player.name());
        }

        self.players.insert(key.clone(), player);
        self.locations.insert(key.clone(), room);
        self.occupants.entry(room).or_default().push(key);
    }

    /// Look up a player by normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Player> {
        self.players.get(key)
    }

    /// Look up a player mutably by normalized key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Player> {
        self.players.get_mut(key)
    }

    /// The room a player is in.
    #[must_use]
    pub fn location(&self, key: &str) -> Option<RoomId> {
        self.locations.get(key).copied()
    }

    /// Move a player to another room, appending to its occupant list.
    ///
    /// Returns the old room, or `None` if the key is not registered.
    pub fn relocate(&mut self, key: &str, to: RoomId) -> Option<RoomId> {
        let old = self.locations.get(key).copied()?;

        if old == to {
            return Some(old);
        }

        if let Some(order) = self.occupants.get_mut(&old) {
            order.retain(|k| k != key);
        }

        self.locations.insert(key.to_string(), to);
        self.occupants.entry(to).or_default().push(key.to_string());

        Some(old)
    }

    /// Remove a player entirely.
    ///
    /// Returns the player and the room they were in, or `None` if the key
    /// is not registered.
    pub fn remove(&mut self, key: &str) -> Option<(Player, RoomId)> {
        let player = self.players.remove(key)?;
        let room = self
            .locations
            .remove(key)
            .expect("registered player must have a location");

        if let Some(order) = self.occupants.get_mut(&room) {
            order.retain(|k| k != key);
        }

        Some((player, room))
    }

    /// Occupants of a room, normalized names in arrival order.
    #[must_use]
    pub fn occupants(&self, room: RoomId) -> &[String] {
        self.occupants.get(&room).map_or(&[], |v| v.as_slice())
    }

    /// Number of occupants in a room.
    #[must_use]
    pub fn occupant_count(&self, room: RoomId) -> usize {
        self.occupants(room).len()
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Drop every player and occupant list.
    pub fn clear(&mut self) {
        self.players.clear();
        self.locations.clear();
        self.occupants.clear();
    }

    /// Iterate `(normalized key, player)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Player)> {
        self.players.iter()
    }
}
