//! Gradient puzzle: a two-player color-sorting race.
//!
//! A strip of tiles shades from red toward green; the middle tiles start
//! scrambled. Players take turns swapping a held color into a tile, and
//! whoever completes the gradient wins.
//!
//! ## Key Types
//!
//! - `GradientGame`: Turn handling, hands, win detection
//! - `Board`: The tile strip with targets, currents, and anchors
//! - `Rgb` / `gradient`: Color math behind the target strip
//! - `Side`: Which of the two players is which

pub mod board;
pub mod color;
pub mod game;

pub use board::{Board, Tile, NUM_TILES};
pub use color::{gradient, Rgb};
pub use game::{GradientGame, Side, SwapError, SwapOutcome};
