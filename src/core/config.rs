//! House configuration types.
//!
//! The treasure hunt is configured at startup by providing:
//! - `RoomSpec`: Defines one room (description, health effect, exits)
//! - `HouseConfig`: Combines all rooms plus the entry/key/treasure designations
//!
//! The engine never hardcodes the floor plan - it is plain data, validated
//! once when the room registry is built. `HouseConfig::manor()` is the
//! standard ten-room layout the game ships with.

use serde::{Deserialize, Serialize};

/// Default per-room occupancy cap.
///
/// The cap is soft: only an explicit redistribution pass enforces it.
pub const DEFAULT_MAX_CAPACITY: usize = 5;

/// Room identifier.
///
/// Dense index into the registry's room table, assigned in authored order
/// when the registry is built. Runtime adjacency checks compare ids, never
/// strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u16);

impl RoomId {
    /// Create a new room ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the raw ID as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// Configuration for a single room.
///
/// `exits` is the ordered list of rooms reachable FROM this room. Edges are
/// directed: an exit from A to B says nothing about moving from B to A.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Unique room name (exact-case lookup key).
    pub name: String,

    /// Human-readable description (for display).
    pub description: String,

    /// Signed health change applied when a player enters via a move.
    /// Never applied on initial placement or on the treasure room.
    pub effect: i32,

    /// Ordered names of rooms reachable from here.
    pub exits: Vec<String>,
}

impl RoomSpec {
    /// Create a new room spec with no effect and no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect: 0,
            exits: Vec::new(),
        }
    }

    /// Set the health effect applied on entry.
    #[must_use]
    pub fn with_effect(mut self, effect: i32) -> Self {
        self.effect = effect;
        self
    }

    /// Set the ordered exit list.
    #[must_use]
    pub fn with_exits<I, S>(mut self, exits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exits = exits.into_iter().map(Into::into).collect();
        self
    }
}

/// Complete house configuration.
///
/// Immutable once the registry is built from it. Room order here is the
/// display order of every snapshot the engine hands out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseConfig {
    /// Room specs in authored order.
    pub rooms: Vec<RoomSpec>,

    /// Name of the room new players must enter through.
    pub entry_room: String,

    /// Name of the room that grants the basement key on entry.
    pub key_room: String,

    /// Name of the locked room that ends the game on entry.
    pub treasure_room: String,

    /// Per-room occupancy cap enforced by redistribution passes.
    pub max_capacity: usize,
}

impl HouseConfig {
    /// Create a configuration with no rooms yet.
    ///
    /// The designated rooms must be added via `with_room` before a registry
    /// can be built from this config.
    pub fn new(
        entry_room: impl Into<String>,
        key_room: impl Into<String>,
        treasure_room: impl Into<String>,
    ) -> Self {
        Self {
            rooms: Vec::new(),
            entry_room: entry_room.into(),
            key_room: key_room.into(),
            treasure_room: treasure_room.into(),
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }

    /// Add a room.
    #[must_use]
    pub fn with_room(mut self, room: RoomSpec) -> Self {
        self.rooms.push(room);
        self
    }

    /// Override the occupancy cap.
    #[must_use]
    pub fn with_max_capacity(mut self, max: usize) -> Self {
        assert!(max > 0, "Capacity must be at least 1");
        self.max_capacity = max;
        self
    }

    /// Get a room spec by exact name.
    #[must_use]
    pub fn get_room(&self, name: &str) -> Option<&RoomSpec> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// The standard ten-room layout.
    ///
    /// Entry is the Main Hall, the Garden holds the basement key, and the
    /// treasure waits in the Basement. The edge list is asymmetric on
    /// purpose (the Garden leads back to the Kitchen, the Balcony only back
    /// to the Bedroom) and must not be symmetrized.
    #[must_use]
    pub fn manor() -> Self {
        Self::new("Main Hall", "Garden", "Basement")
            .with_room(
                RoomSpec::new("Main Hall", "Leads to multiple rooms, start of the game")
                    .with_exits(["Kitchen", "Dining Room", "Stairway"]),
            )
            .with_room(
                RoomSpec::new("Garden", "Finds key to basement")
                    .with_effect(5)
                    .with_exits(["Kitchen"]),
            )
            .with_room(
                RoomSpec::new("Bedroom", "Sleeps, regenerates health")
                    .with_effect(10)
                    .with_exits(["Home Office", "Balcony", "Stairway"]),
            )
            .with_room(
                RoomSpec::new("Kitchen", "Leads to multiple rooms, dangerous")
                    .with_effect(-15)
                    .with_exits(["Garden", "Main Hall", "Dining Room"]),
            )
            .with_room(
                RoomSpec::new("Dining Room", "Eats, regenerates health")
                    .with_effect(5)
                    .with_exits(["Kitchen", "Main Hall"]),
            )
            .with_room(
                RoomSpec::new("Basement", "Where the treasure lies").with_exits(["Stairway"]),
            )
            .with_room(
                RoomSpec::new("Attic", "'Leaf' room, dangerous")
                    .with_effect(-10)
                    .with_exits(["Stairway"]),
            )
            .with_room(
                RoomSpec::new("Balcony", "Sees the view, regenerates health")
                    .with_effect(5)
                    .with_exits(["Bedroom"]),
            )
            .with_room(
                RoomSpec::new("Home Office", "Finds HINT, regenerates health")
                    .with_effect(5)
                    .with_exits(["Bedroom", "Stairway"]),
            )
            .with_room(
                RoomSpec::new("Stairway", "Leads to multiple rooms, dangerous")
                    .with_effect(-10)
                    .with_exits(["Main Hall", "Bedroom", "Home Office", "Basement", "Attic"]),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id() {
        let id = RoomId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(id.index(), 5);
        assert_eq!(format!("{}", id), "Room(5)");
    }

    #[test]
    fn test_room_spec_builder() {
        let room = RoomSpec::new("Kitchen", "Leads to multiple rooms, dangerous")
            .with_effect(-15)
            .with_exits(["Garden", "Main Hall", "Dining Room"]);

        assert_eq!(room.name, "Kitchen");
        assert_eq!(room.effect, -15);
        assert_eq!(room.exits, vec!["Garden", "Main Hall", "Dining Room"]);
    }

    #[test]
    fn test_room_spec_defaults() {
        let room = RoomSpec::new("Closet", "Empty");
        assert_eq!(room.effect, 0);
        assert!(room.exits.is_empty());
    }

    #[test]
    fn test_house_config_builder() {
        let config = HouseConfig::new("Hall", "Shed", "Vault")
            .with_room(RoomSpec::new("Hall", "Start").with_exits(["Shed", "Vault"]))
            .with_room(RoomSpec::new("Shed", "Key").with_exits(["Hall"]))
            .with_room(RoomSpec::new("Vault", "Treasure").with_exits(["Hall"]))
            .with_max_capacity(3);

        assert_eq!(config.rooms.len(), 3);
        assert_eq!(config.entry_room, "Hall");
        assert_eq!(config.key_room, "Shed");
        assert_eq!(config.treasure_room, "Vault");
        assert_eq!(config.max_capacity, 3);

        assert!(config.get_room("Shed").is_some());
        assert!(config.get_room("shed").is_none()); // room names are exact-case
        assert!(config.get_room("Cellar").is_none());
    }

    #[test]
    #[should_panic(expected = "Capacity must be at least 1")]
    fn test_zero_capacity_panics() {
        let _ = HouseConfig::new("A", "B", "C").with_max_capacity(0);
    }

    #[test]
    fn test_manor_layout() {
        let manor = HouseConfig::manor();

        assert_eq!(manor.rooms.len(), 10);
        assert_eq!(manor.entry_room, "Main Hall");
        assert_eq!(manor.key_room, "Garden");
        assert_eq!(manor.treasure_room, "Basement");
        assert_eq!(manor.max_capacity, DEFAULT_MAX_CAPACITY);

        let stairway = manor.get_room("Stairway").unwrap();
        assert_eq!(stairway.effect, -10);
        assert_eq!(
            stairway.exits,
            vec!["Main Hall", "Bedroom", "Home Office", "Basement", "Attic"]
        );

        // One-way edges stay one-way
        let garden = manor.get_room("Garden").unwrap();
        assert_eq!(garden.exits, vec!["Kitchen"]);
        let kitchen = manor.get_room("Kitchen").unwrap();
        assert!(kitchen.exits.contains(&"Garden".to_string()));

        let basement = manor.get_room("Basement").unwrap();
        assert_eq!(basement.effect, 0);
        assert_eq!(basement.exits, vec!["Stairway"]);
    }

    #[test]
    fn test_manor_effects() {
        let manor = HouseConfig::manor();
        let effect = |name: &str| manor.get_room(name).unwrap().effect;

        assert_eq!(effect("Main Hall"), 0);
        assert_eq!(effect("Kitchen"), -15);
        assert_eq!(effect("Garden"), 5);
        assert_eq!(effect("Balcony"), 5);
        assert_eq!(effect("Bedroom"), 10);
        assert_eq!(effect("Attic"), -10);
        assert_eq!(effect("Dining Room"), 5);
        assert_eq!(effect("Stairway"), -10);
        assert_eq!(effect("Home Office"), 5);
    }

    #[test]
    fn test_config_serialization() {
        let manor = HouseConfig::manor();
        let json = serde_json::to_string(&manor).unwrap();
        let deserialized: HouseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(manor, deserialized);
    }
}
