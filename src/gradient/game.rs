//! Two-player swap game on the gradient board.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

use super::board::Board;
use super::color::Rgb;

/// The two sides of the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "player one"),
            Side::Two => write!(f, "player two"),
        }
    }
}

/// What a swap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    /// The board reached its target arrangement with this swap.
    pub solved: bool,
    /// Whose turn comes next. The turn passes even on the winning swap.
    pub next: Side,
}

/// Why a swap was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapError {
    /// No tile at that index.
    OutOfBounds { index: usize },
    /// The puzzle has already been solved.
    Finished,
}

impl std::fmt::Display for SwapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapError::OutOfBounds { index } => write!(f, "no tile at index {}", index),
            SwapError::Finished => write!(f, "the puzzle is already solved"),
        }
    }
}

impl std::error::Error for SwapError {}

/// The gradient puzzle: two players race to sort a scrambled strip.
///
/// Player one starts holding white, player two black. On their turn a
/// player swaps their held color with any tile's current color; the turn
/// passes after every swap. Whoever performs the swap that puts every
/// tile on target wins, and the game latches finished.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradientGame {
    board: Board,
    hands: [Rgb; 2],
    turn: Side,
    winner: Option<Side>,
}

impl GradientGame {
    /// Start a game on a freshly scrambled board.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        Self {
            board: Board::new(rng),
            hands: [Rgb::WHITE, Rgb::BLACK],
            turn: Side::One,
            winner: None,
        }
    }

    /// Swap the current player's held color with the tile at `index`.
    pub fn swap(&mut self, index: usize) -> Result<SwapOutcome, SwapError> {
        if self.winner.is_some() {
            return Err(SwapError::Finished);
        }
        if index >= self.board.len() {
            return Err(SwapError::OutOfBounds { index });
        }

        let side = self.turn;
        let held = self.hands[side.index()];
        let old = self.board.replace(index, held);
        self.hands[side.index()] = old;

        let solved = self.board.is_solved();
        if solved {
            self.winner = Some(side);
            log::info!("{} solved the gradient", side);
        } else {
            log::debug!("{} swapped tile {}", side, index);
        }

        self.turn = side.other();
        Ok(SwapOutcome {
            solved,
            next: self.turn,
        })
    }

    /// The board as it stands.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color a side is holding.
    #[must_use]
    pub fn hand(&self, side: Side) -> Rgb {
        self.hands[side.index()]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The side that solved the puzzle, if anyone has.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether the puzzle has been solved.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::board::NUM_TILES;

    /// Index of the tile whose target matches `color`, if any.
    fn home_of(game: &GradientGame, color: Rgb) -> Option<usize> {
        game.board.tiles().iter().position(|t| t.target == color)
    }

    /// Index of a misplaced tile, preferring one holding a gradient color.
    fn parking_spot(game: &GradientGame) -> Option<usize> {
        game.board
            .tiles()
            .iter()
            .position(|t| !t.is_in_place() && home_of(game, t.current).is_some())
            .or_else(|| game.board.tiles().iter().position(|t| !t.is_in_place()))
    }

    #[test]
    fn test_opening_state() {
        let mut rng = GameRng::new(42);
        let game = GradientGame::new(&mut rng);

        assert_eq!(game.turn(), Side::One);
        assert_eq!(game.hand(Side::One), Rgb::WHITE);
        assert_eq!(game.hand(Side::Two), Rgb::BLACK);
        assert!(game.winner().is_none());
        assert!(!game.is_finished());
    }

    #[test]
    fn test_swap_exchanges_hand_and_tile() {
        let mut rng = GameRng::new(42);
        let mut game = GradientGame::new(&mut rng);

        let tile_color = game.board().tile(3).unwrap().current;
        let outcome = game.swap(3).unwrap();

        assert_eq!(game.board().tile(3).unwrap().current, Rgb::WHITE);
        assert_eq!(game.hand(Side::One), tile_color);
        assert_eq!(outcome.next, Side::Two);
        assert!(!outcome.solved);
    }

    #[test]
    fn test_turns_alternate() {
        let mut rng = GameRng::new(42);
        let mut game = GradientGame::new(&mut rng);

        assert_eq!(game.swap(1).unwrap().next, Side::Two);
        assert_eq!(game.swap(2).unwrap().next, Side::One);
        assert_eq!(game.swap(1).unwrap().next, Side::Two);
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut rng = GameRng::new(42);
        let mut game = GradientGame::new(&mut rng);

        let err = game.swap(NUM_TILES).unwrap_err();
        assert_eq!(err, SwapError::OutOfBounds { index: NUM_TILES });
        // A rejected swap does not consume the turn
        assert_eq!(game.turn(), Side::One);
    }

    #[test]
    fn test_anchored_tiles_can_still_be_swapped() {
        let mut rng = GameRng::new(42);
        let mut game = GradientGame::new(&mut rng);

        assert!(game.board().tile(0).unwrap().anchored);
        game.swap(0).unwrap();
        assert_eq!(game.board().tile(0).unwrap().current, Rgb::WHITE);
        assert!(!game.board().tile(0).unwrap().is_in_place());
    }

    #[test]
    fn test_playing_to_completion() {
        let mut rng = GameRng::new(42);
        let mut game = GradientGame::new(&mut rng);

        // Each turn: place the held color on its home tile if it is a
        // gradient color, otherwise park the held white/black on a
        // misplaced tile to pick something up. Every placement fixes a
        // tile, so this always terminates.
        let mut solved = false;
        for _ in 0..100 {
            let held = game.hand(game.turn());
            let index = match home_of(&game, held) {
                Some(home) => home,
                None => parking_spot(&game).expect("unsolved board has a misplaced tile"),
            };
            if game.swap(index).unwrap().solved {
                solved = true;
                break;
            }
        }

        assert!(solved);
        assert!(game.is_finished());
        assert!(game.board().is_solved());
        let winner = game.winner().unwrap();
        // Hands are back to the off-gradient colors, in some order
        let hands = [game.hand(Side::One), game.hand(Side::Two)];
        assert!(hands.contains(&Rgb::WHITE) && hands.contains(&Rgb::BLACK));
        // The winning swap still passed the turn
        assert_eq!(game.turn(), winner.other());
    }

    #[test]
    fn test_finished_game_rejects_swaps() {
        let mut rng = GameRng::new(42);
        let mut game = GradientGame::new(&mut rng);

        for _ in 0..100 {
            let held = game.hand(game.turn());
            let index = home_of(&game, held)
                .or_else(|| parking_spot(&game))
                .unwrap();
            if game.swap(index).unwrap().solved {
                break;
            }
        }
        assert!(game.is_finished());

        let winner = game.winner();
        assert_eq!(game.swap(0).unwrap_err(), SwapError::Finished);
        assert_eq!(game.winner(), winner);
    }

    #[test]
    fn test_serialization() {
        let mut game = GradientGame::new(&mut GameRng::new(3));
        game.swap(2).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: GradientGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.board().tiles(), game.board().tiles());
        assert_eq!(restored.turn(), game.turn());
        assert_eq!(restored.hand(Side::One), game.hand(Side::One));
    }

    #[test]
    fn test_same_seed_same_playthrough() {
        let mut game1 = GradientGame::new(&mut GameRng::new(9));
        let mut game2 = GradientGame::new(&mut GameRng::new(9));

        for index in [1, 4, 2, 6, 1, 3] {
            let a = game1.swap(index).unwrap();
            let b = game2.swap(index).unwrap();
            assert_eq!(a, b);
        }
        assert_eq!(game1.hand(Side::One), game2.hand(Side::One));
        assert_eq!(game1.board().tiles(), game2.board().tiles());
    }
}
