//! # mancala-engine
//!
//! A rules engine for two-player Mancala (Kalah variant): seed sowing
//! across fourteen slots, the extra-turn and capture rules, end-of-game
//! sweeping, and winner determination.
//!
//! ## Design Principles
//!
//! 1. **Board-Authoritative**: the fourteen-slot array owned by the engine
//!    is the single source of truth; per-player `Side` views are
//!    synchronized from it after every move.
//!
//! 2. **Pure Library**: no I/O inside the engine. Rejections and notices
//!    (extra turn, capture) come back as typed values; rendering and the
//!    driver loop belong to the caller.
//!
//! 3. **Total Operations**: every call runs to completion with no blocking,
//!    and invalid requests leave the game untouched.
//!
//! ## Modules
//!
//! - `core`: the board, slot constants, player IDs, and side views
//! - `rules`: the `Mancala` state machine and its error taxonomy
//! - `python`: optional PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use mancala_engine::{Mancala, PlayerId};
//!
//! let mut game = Mancala::new();
//! game.register_player("Ada").unwrap();
//! game.register_player("Grace").unwrap();
//!
//! // Player 1 empties pit 3; the last seed lands in their store.
//! let outcome = game.make_move(1, 3).unwrap();
//! assert!(outcome.extra_turn);
//! assert_eq!(outcome.board, [4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
//! ```

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, PlayerId, Side, PITS_PER_SIDE, SEEDS_PER_PIT, SLOT_COUNT, STORE_ONE, STORE_TWO,
};

pub use crate::rules::{Capture, GameError, GameResult, Mancala, MoveOutcome, Phase};
