//! Room registry - the immutable floor plan.
//!
//! Built once from a `HouseConfig`. Room names are resolved to dense
//! `RoomId`s at build time so every runtime adjacency check is an id
//! comparison. The registry never changes after construction; all mutable
//! state lives in the roster.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::config::{HouseConfig, RoomId};

/// A room with its exits resolved to ids.
///
/// `exits` preserves the authored order; the list is directed and may be
/// empty for dead-end rooms.
#[derive(Clone, Debug)]
pub struct RoomDef {
    /// Dense id, equal to this room's position in authored order.
    pub id: RoomId,

    /// Unique room name (exact-case lookup key).
    pub name: String,

    /// Human-readable description (for display).
    pub description: String,

    /// Signed health change applied when a player enters via a move.
    pub effect: i32,

    /// Rooms reachable from here, in authored order.
    pub exits: SmallVec<[RoomId; 5]>,
}

/// Immutable floor plan with name resolution and role lookups.
///
/// ## Example
///
/// ```
/// use parlor_games::core::HouseConfig;
/// use parlor_games::hunt::RoomRegistry;
///
/// let registry = RoomRegistry::from_config(&HouseConfig::manor());
///
/// let hall = registry.resolve("Main Hall").unwrap();
/// let kitchen = registry.resolve("Kitchen").unwrap();
/// assert!(registry.is_exit(hall, kitchen));
/// assert_eq!(registry.entry(), hall);
/// ```
#[derive(Clone, Debug)]
pub struct RoomRegistry {
    /// Rooms in authored order, indexed by `RoomId`.
    rooms: Vec<RoomDef>,
    by_name: FxHashMap<String, RoomId>,
    entry: RoomId,
    key_room: RoomId,
    treasure: RoomId,
    max_capacity: usize,
}

impl RoomRegistry {
    /// Build a registry from a house configuration.
    ///
    /// # Panics
    ///
    /// Panics if the config is malformed: no rooms, a duplicate room name,
    /// an exit naming an unknown room, or a designated entry/key/treasure
    /// room that is not defined. Configs are authored data; a bad table is a
    /// programmer error, not a runtime condition.
    #[must_use]
    pub fn from_config(config: &HouseConfig) -> Self {
        assert!(!config.rooms.is_empty(), "House must have at least one room");
        assert!(
            config.rooms.len() <= u16::MAX as usize,
            "Too many rooms for a u16 id"
        );

        let mut by_name = FxHashMap::default();
        for (index, spec) in config.rooms.iter().enumerate() {
            let id = RoomId::new(index as u16);
            if by_name.insert(spec.name.clone(), id).is_some() {
                panic!("Room '{}' defined twice", spec.name);
            }
        }

        let rooms = config
            .rooms
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let exits = spec
                    .exits
                    .iter()
                    .map(|exit| {
                        *by_name.get(exit).unwrap_or_else(|| {
                            panic!("Room '{}' lists unknown exit '{}'", spec.name, exit)
                        })
                    })
                    .collect();

                RoomDef {
                    id: RoomId::new(index as u16),
                    name: spec.name.clone(),
                    description: spec.description.clone(),
                    effect: spec.effect,
                    exits,
                }
            })
            .collect();

        let resolve_role = |role: &str, name: &str| -> RoomId {
            *by_name
                .get(name)
                .unwrap_or_else(|| panic!("{} room '{}' is not defined", role, name))
        };

        Self {
            rooms,
            entry: resolve_role("Entry", &config.entry_room),
            key_room: resolve_role("Key", &config.key_room),
            treasure: resolve_role("Treasure", &config.treasure_room),
            by_name,
            max_capacity: config.max_capacity,
        }
    }

    /// Resolve an exact-case room name to its id.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Get a room definition by id.
    #[must_use]
    pub fn def(&self, id: RoomId) -> &RoomDef {
        &self.rooms[id.index()]
    }

    /// Get a room definition by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RoomDef> {
        self.resolve(name).map(|id| self.def(id))
    }

    /// A room's display name.
    #[must_use]
    pub fn name(&self, id: RoomId) -> &str {
        &self.def(id).name
    }

    /// Ordered exits of a room.
    #[must_use]
    pub fn exits(&self, id: RoomId) -> &[RoomId] {
        &self.def(id).exits
    }

    /// Whether `to` appears in `from`'s exit list.
    ///
    /// Directed: `is_exit(a, b)` says nothing about `is_exit(b, a)`.
    #[must_use]
    pub fn is_exit(&self, from: RoomId, to: RoomId) -> bool {
        self.exits(from).contains(&to)
    }

    /// The room new players enter through.
    #[must_use]
    pub fn entry(&self) -> RoomId {
        self.entry
    }

    /// The room that grants the key on entry.
    #[must_use]
    pub fn key_room(&self) -> RoomId {
        self.key_room
    }

    /// The locked room that ends the game on entry.
    #[must_use]
    pub fn treasure(&self) -> RoomId {
        self.treasure
    }

    /// Per-room occupancy cap enforced by redistribution passes.
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry has no rooms. Never true for a built registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate rooms in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &RoomDef> {
        self.rooms.iter()
    }
}
