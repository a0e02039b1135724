//! The treasure hunt engine.
//!
//! `HuntEngine` owns the immutable floor plan, the mutable roster, and the
//! journal. Every operation is synchronous and returns either a structured
//! outcome or a typed error; the engine never talks to a screen.
//!
//! ## Move resolution
//!
//! A move resolves in a fixed order: player lookup, adjacency check against
//! the directed exit list, key check for the treasure room, relocation,
//! then the destination's health effect and key grant, and finally the
//! death check. Entering the treasure room skips effects entirely: the
//! round ends, every player is cleared, and the registered game-end
//! callback fires.
//!
//! ## Capacity
//!
//! Rooms have a soft occupancy cap. Nothing enforces it during adds or
//! moves; callers invoke `redistribute` when they want a crowded room
//! rebalanced into its connected rooms.

use im::Vector;
use smallvec::SmallVec;

use crate::core::config::{HouseConfig, RoomId};
use crate::core::event::GameEvent;
use crate::core::player::Player;

use super::error::{AddError, MoveError, RedistributeError};
use super::registry::{RoomDef, RoomRegistry};
use super::roster::{normalize, Roster};
use super::snapshot::{PlayerView, RoomView};

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player now stands in `room` with `health` left. `found_key` is
    /// true when this entry granted the basement key.
    Moved {
        room: String,
        health: i32,
        found_key: bool,
    },

    /// The destination's effect emptied the player's health; they have
    /// been removed from the game.
    PlayerDied { room: String },

    /// The treasure room opened. The round is over and all players were
    /// cleared.
    TreasureFound { winner: String },
}

/// Result of one redistribution pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedistributionReport {
    /// `(player display name, destination room)` in relocation order.
    pub moved: Vec<(String, String)>,

    /// Excess occupants no connected room could take.
    pub unplaced: usize,
}

type GameEndCallback = Box<dyn FnMut() + Send>;

/// Synchronous, single-threaded engine for the treasure hunt.
///
/// Callers that share one engine across threads wrap the whole engine in a
/// lock; there is no interior synchronization.
///
/// ## Example
///
/// ```
/// use parlor_games::hunt::{HuntEngine, MoveOutcome};
///
/// let mut engine = HuntEngine::manor();
/// engine.add_player("Alice", "Main Hall").unwrap();
///
/// let outcome = engine.move_player("Alice", "Stairway").unwrap();
/// assert_eq!(
///     outcome,
///     MoveOutcome::Moved { room: "Stairway".into(), health: 90, found_key: false }
/// );
/// ```
pub struct HuntEngine {
    registry: RoomRegistry,
    config: HouseConfig,
    roster: Roster,
    journal: Vector<GameEvent>,
    winner: Option<String>,
    on_game_end: Option<GameEndCallback>,
}

impl HuntEngine {
    /// Create an engine for the given house.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is malformed (see
    /// [`RoomRegistry::from_config`]).
    #[must_use]
    pub fn new(config: HouseConfig) -> Self {
        let registry = RoomRegistry::from_config(&config);
        Self {
            registry,
            config,
            roster: Roster::new(),
            journal: Vector::new(),
            winner: None,
            on_game_end: None,
        }
    }

    /// Create an engine for the standard ten-room layout.
    #[must_use]
    pub fn manor() -> Self {
        Self::new(HouseConfig::manor())
    }

    /// Rebuild an engine from saved parts. The game-end callback is not
    /// part of a save; callers re-register it.
    pub(crate) fn from_parts(
        config: HouseConfig,
        roster: Roster,
        journal: Vector<GameEvent>,
        winner: Option<String>,
    ) -> Self {
        let registry = RoomRegistry::from_config(&config);
        Self {
            registry,
            config,
            roster,
            journal,
            winner,
            on_game_end: None,
        }
    }

    /// Register the callback invoked once when a round concludes.
    pub fn on_game_end(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_game_end = Some(Box::new(callback));
    }

    /// Add a new player through the entry room.
    ///
    /// The player starts at full health without the key, appended to the
    /// entry room's occupant list. There is no capacity check here; only a
    /// redistribution pass thins a crowded room.
    pub fn add_player(&mut self, name: &str, room_name: &str) -> Result<(), AddError> {
        if name.trim().is_empty() {
            return Err(AddError::EmptyName);
        }

        let entry = self.registry.entry();
        if self.registry.resolve(room_name) != Some(entry) {
            return Err(AddError::InvalidEntry {
                room: room_name.to_string(),
                entry: self.registry.name(entry).to_string(),
            });
        }

        if self.roster.contains(&normalize(name)) {
            return Err(AddError::DuplicateName {
                name: name.to_string(),
            });
        }

        // The first arrival after a concluded round opens the next one.
        self.winner = None;

        let entry_name = self.registry.name(entry).to_string();
        self.roster.insert(Player::new(name), entry);
        log::info!("{} joined in the {}", name, entry_name);
        self.journal.push_back(GameEvent::PlayerAdded {
            player: name.to_string(),
            room: entry_name,
        });

        Ok(())
    }

    /// Move a player into a connected room.
    pub fn move_player(&mut self, name: &str, room_name: &str) -> Result<MoveOutcome, MoveError> {
        let key = normalize(name);
        let Some(current) = self.roster.location(&key) else {
            return Err(MoveError::PlayerNotFound {
                name: name.to_string(),
            });
        };

        // Unknown destination names fail the same way as unconnected ones:
        // they are not in any exit list.
        let dest = match self.registry.resolve(room_name) {
            Some(id) if self.registry.is_exit(current, id) => id,
            _ => {
                return Err(MoveError::IllegalMove {
                    from: self.registry.name(current).to_string(),
                    to: room_name.to_string(),
                });
            }
        };

        let (display, has_key) = {
            let player = self.roster.get(&key).expect("located player is registered");
            (player.name().to_string(), player.has_key())
        };

        if dest == self.registry.treasure() && !has_key {
            return Err(MoveError::LockedRoom {
                player: display,
                room: self.registry.name(dest).to_string(),
            });
        }

        self.roster.relocate(&key, dest);
        let from_name = self.registry.name(current).to_string();
        let to_name = self.registry.name(dest).to_string();

        if dest == self.registry.treasure() {
            log::info!("{} found the treasure in the {}", display, to_name);
            self.journal.push_back(GameEvent::TreasureFound {
                player: display.clone(),
            });
            self.conclude(display.clone());
            return Ok(MoveOutcome::TreasureFound { winner: display });
        }

        let effect = self.registry.def(dest).effect;
        let key_room = self.registry.key_room();

        let player = self.roster.get_mut(&key).expect("relocated player is registered");
        player.apply_effect(effect);
        let found_key = if dest == key_room && !player.has_key() {
            player.grant_key();
            true
        } else {
            false
        };
        let health = player.health();
        let dead = player.is_dead();

        log::debug!(
            "{} moved from {} to {} (health {})",
            display,
            from_name,
            to_name,
            health
        );
        self.journal.push_back(GameEvent::PlayerMoved {
            player: display.clone(),
            from: from_name,
            to: to_name.clone(),
            health,
        });

        if found_key {
            log::info!("{} found the key", display);
            self.journal.push_back(GameEvent::KeyFound {
                player: display.clone(),
            });
        }

        if dead {
            self.roster.remove(&key);
            log::info!("{} died in the {}", display, to_name);
            self.journal.push_back(GameEvent::PlayerDied {
                player: display,
                room: to_name.clone(),
            });
            return Ok(MoveOutcome::PlayerDied { room: to_name });
        }

        Ok(MoveOutcome::Moved {
            room: to_name,
            health,
            found_key,
        })
    }

    /// Remove a player on request. Returns whether anyone was removed.
    pub fn remove_player(&mut self, name: &str) -> bool {
        match self.roster.remove(&normalize(name)) {
            Some((player, room)) => {
                log::info!("{} left the {}", player.name(), self.registry.name(room));
                self.journal.push_back(GameEvent::PlayerRemoved {
                    player: player.name().to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// Rebalance a crowded room into its connected rooms.
    ///
    /// The excess set (everyone beyond the first `max_capacity` occupants,
    /// in arrival order) is fixed before any relocation. Each excess player
    /// goes to the first exit, in authored order, that is under capacity
    /// and has not already received a player this pass; a connected room
    /// takes at most one player per pass. Players no exit can take stay
    /// where they are and are counted in the report.
    pub fn redistribute(
        &mut self,
        room_name: &str,
    ) -> Result<RedistributionReport, RedistributeError> {
        let Some(room) = self.registry.resolve(room_name) else {
            return Err(RedistributeError::UnknownRoom {
                name: room_name.to_string(),
            });
        };

        if self.registry.exits(room).is_empty() {
            log::warn!(
                "no redistribution possible: {} has no connected rooms",
                self.registry.name(room)
            );
            return Err(RedistributeError::NoConnections {
                room: self.registry.name(room).to_string(),
            });
        }

        let cap = self.registry.max_capacity();
        let occupants = self.roster.occupants(room);
        if occupants.len() <= cap {
            return Ok(RedistributionReport::default());
        }

        let excess: Vec<String> = occupants[cap..].to_vec();
        let mut used: SmallVec<[RoomId; 5]> = SmallVec::new();
        let mut report = RedistributionReport::default();

        for key in &excess {
            let mut placed = false;
            for &exit in self.registry.exits(room) {
                if used.contains(&exit) || self.roster.occupant_count(exit) >= cap {
                    continue;
                }

                let display = self
                    .roster
                    .get(key)
                    .expect("excess occupant is registered")
                    .name()
                    .to_string();
                self.roster.relocate(key, exit);
                used.push(exit);

                let from = self.registry.name(room).to_string();
                let to = self.registry.name(exit).to_string();
                log::info!("{} was relocated from {} to {}", display, from, to);
                self.journal.push_back(GameEvent::PlayerRelocated {
                    player: display.clone(),
                    from,
                    to: to.clone(),
                });
                report.moved.push((display, to));

                placed = true;
                break;
            }

            if !placed {
                report.unplaced += 1;
            }
        }

        if report.unplaced > 0 {
            log::warn!(
                "{} excess occupants left in the {}",
                report.unplaced,
                self.registry.name(room)
            );
        }

        Ok(report)
    }

    /// Look up a player by name, case-insensitive.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.roster.get(&normalize(name))
    }

    /// Name of the room a player stands in, case-insensitive lookup.
    #[must_use]
    pub fn locate_player(&self, name: &str) -> Option<&str> {
        let room = self.roster.location(&normalize(name))?;
        Some(self.registry.name(room))
    }

    /// Snapshot one room by exact name.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<RoomView> {
        self.registry.get(name).map(|def| self.view_of(def))
    }

    /// Snapshot every room in authored order.
    #[must_use]
    pub fn rooms(&self) -> Vec<RoomView> {
        self.registry.iter().map(|def| self.view_of(def)).collect()
    }

    /// Ordered exit names of a room, or `None` for an unknown room.
    #[must_use]
    pub fn connections(&self, name: &str) -> Option<Vec<&str>> {
        let def = self.registry.get(name)?;
        Some(def.exits.iter().map(|&id| self.registry.name(id)).collect())
    }

    /// The immutable floor plan.
    #[must_use]
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// The configuration this engine was built from.
    #[must_use]
    pub fn config(&self) -> &HouseConfig {
        &self.config
    }

    pub(crate) fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of players currently in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Everything that has happened, oldest first. Survives round ends.
    #[must_use]
    pub fn journal(&self) -> &Vector<GameEvent> {
        &self.journal
    }

    /// Whether the current round has concluded with a treasure find.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.winner.is_some()
    }

    /// The winner of the concluded round, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    fn view_of(&self, def: &RoomDef) -> RoomView {
        let occupants = self
            .roster
            .occupants(def.id)
            .iter()
            .map(|key| {
                PlayerView::from(self.roster.get(key).expect("occupant is registered"))
            })
            .collect();

        RoomView {
            name: def.name.clone(),
            description: def.description.clone(),
            exits: def.exits.iter().map(|&id| self.registry.name(id).to_string()).collect(),
            occupants,
        }
    }

    fn conclude(&mut self, winner: String) {
        let cleared = self.roster.len();
        self.roster.clear();
        self.winner = Some(winner);
        log::info!("round over, cleared {} players", cleared);

        if let Some(callback) = self.on_game_end.as_mut() {
            callback();
        }
    }
}
