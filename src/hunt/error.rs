//! Typed recoverable errors for the hunt engine.
//!
//! Every domain failure is an enum variant carrying enough context to
//! render a message; `Display` gives the presentation-ready text. Nothing
//! here panics or aborts - callers match and recover.

/// Why a player could not be added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddError {
    /// The name was empty or all whitespace.
    EmptyName,

    /// New players may only enter through the designated entry room.
    InvalidEntry { room: String, entry: String },

    /// Another player already holds this name (case-insensitive).
    DuplicateName { name: String },
}

impl std::fmt::Display for AddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddError::EmptyName => write!(f, "player name cannot be empty"),
            AddError::InvalidEntry { room, entry } => {
                write!(f, "players can only be added to the {}, not {}", entry, room)
            }
            AddError::DuplicateName { name } => {
                write!(f, "the name '{}' has already been taken", name)
            }
        }
    }
}

impl std::error::Error for AddError {}

/// Why a move could not be performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// No registered player matches the name (case-insensitive).
    PlayerNotFound { name: String },

    /// The destination is not in the current room's exit list.
    IllegalMove { from: String, to: String },

    /// The treasure room stays shut without the key.
    LockedRoom { player: String, room: String },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::PlayerNotFound { name } => {
                write!(f, "{} is not in any of the rooms", name)
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "you can't move to {} from {}", to, from)
            }
            MoveError::LockedRoom { player, room } => {
                write!(f, "{} needs the key to enter the {}", player, room)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Why a redistribution pass could not run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedistributeError {
    /// No room with that name.
    UnknownRoom { name: String },

    /// The room has no exits to relocate players into; the pass aborts.
    NoConnections { room: String },
}

impl std::fmt::Display for RedistributeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedistributeError::UnknownRoom { name } => write!(f, "no room named '{}'", name),
            RedistributeError::NoConnections { room } => {
                write!(f, "no redistribution possible: {} has no connected rooms", room)
            }
        }
    }
}

impl std::error::Error for RedistributeError {}
