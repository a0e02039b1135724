//! The tile strip: target colors, scrambled current colors, anchors.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

use super::color::{gradient, Rgb};

/// Number of tiles in the strip.
pub const NUM_TILES: usize = 8;

/// One tile: the color it should end up holding, and what it holds now.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub target: Rgb,
    pub current: Rgb,
    /// Anchored tiles start solved, as a hint. Metadata only: they can
    /// still be swapped and un-solved.
    pub anchored: bool,
}

impl Tile {
    /// Whether this tile currently holds its target color.
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        self.current == self.target
    }
}

/// A strip of [`NUM_TILES`] tiles running red toward green.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a scrambled board.
    ///
    /// The first and last tiles start on target; the middle tiles receive
    /// a seeded uniform permutation of the middle target colors. The seed
    /// fully determines the layout.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let targets = gradient(Rgb::RED, Rgb::GREEN, NUM_TILES);

        let mut middle: Vec<Rgb> = targets[1..NUM_TILES - 1].to_vec();
        rng.shuffle(&mut middle);

        let tiles = targets
            .iter()
            .enumerate()
            .map(|(i, &target)| {
                let anchored = i == 0 || i == NUM_TILES - 1;
                let current = if anchored { target } else { middle[i - 1] };
                Tile {
                    target,
                    current,
                    anchored,
                }
            })
            .collect();

        Board { tiles }
    }

    /// All tiles, left to right.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// One tile by index.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Put `color` into the tile and return the color it held.
    pub(crate) fn replace(&mut self, index: usize, color: Rgb) -> Rgb {
        let tile = &mut self.tiles[index];
        let old = tile.current;
        tile.current = color;
        old
    }

    /// Whether every tile holds its target color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_in_place)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
