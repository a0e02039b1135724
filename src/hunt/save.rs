//! Save/load for a running hunt.
//!
//! Uses bincode for compact binary serialization. A save captures the
//! house configuration, the roster, the journal, and the winner marker;
//! the room registry is rebuilt from the configuration on load, and the
//! game-end callback is deliberately not persisted.

use std::io::{Read, Write};

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::HouseConfig;
use crate::core::event::GameEvent;

use super::engine::HuntEngine;
use super::roster::Roster;

/// Version number for the save format (increment when the format changes).
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of a hunt.
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version.
    pub version: u32,
    /// House the engine was built from.
    pub config: HouseConfig,
    /// Players and their locations.
    pub roster: Roster,
    /// Full event history.
    pub journal: Vector<GameEvent>,
    /// Winner of a concluded round, if the round has not been reopened.
    pub winner: Option<String>,
}

/// Write a complete hunt to a writer.
pub fn save_hunt<W: Write>(writer: W, engine: &HuntEngine) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        config: engine.config().clone(),
        roster: engine.roster().clone(),
        journal: engine.journal().clone(),
        winner: engine.winner().map(String::from),
    };

    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Read a hunt back from a reader.
pub fn load_hunt<R: Read>(reader: R) -> Result<HuntEngine, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    Ok(HuntEngine::from_parts(
        save_data.config,
        save_data.roster,
        save_data.journal,
        save_data.winner,
    ))
}

impl HuntEngine {
    /// Serialize this engine to a writer.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        save_hunt(writer, self)
    }

    /// Deserialize an engine from a reader. Callbacks must be
    /// re-registered afterwards.
    pub fn load<R: Read>(reader: R) -> Result<Self, SaveError> {
        load_hunt(reader)
    }
}

/// Errors that can occur during save/load.
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}
