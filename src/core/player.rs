//! Player state: name, health, and the basement key.
//!
//! ## Health
//!
//! Health is an integer clamped to `[0, MAX_HEALTH]`. Room effects heal or
//! injure; both directions saturate at the bounds. A player whose health
//! reaches 0 is removed from the game by the engine.
//!
//! ## Key
//!
//! `has_key` is monotonic: once granted it is never revoked.

use serde::{Deserialize, Serialize};

/// Upper bound for player health. Players start at this value.
pub const MAX_HEALTH: i32 = 100;

/// A participant in the treasure hunt.
///
/// The display name keeps its original casing; identity comparisons happen
/// on the normalized name held by the roster, never on this field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: i32,
    has_key: bool,
}

impl Player {
    /// Create a player at full health without the key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: MAX_HEALTH,
            has_key: false,
        }
    }

    /// The display name, casing preserved.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health in `[0, MAX_HEALTH]`.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Whether the basement key has been found.
    #[must_use]
    pub fn has_key(&self) -> bool {
        self.has_key
    }

    /// Whether health has hit the floor.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Raise health by `amount`, saturating at `MAX_HEALTH`.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Lower health by `amount`, saturating at 0.
    pub fn injure(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Apply a signed room effect: positive heals, negative injures.
    pub fn apply_effect(&mut self, delta: i32) {
        if delta >= 0 {
            self.heal(delta);
        } else {
            self.injure(-delta);
        }
    }

    /// Grant the basement key. Granting twice is a no-op.
    pub fn grant_key(&mut self) {
        self.has_key = true;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Health: {})", self.name, self.health)?;
        if self.has_key {
            write!(f, " + Key")?;
        }
        Ok(())
    }
}
