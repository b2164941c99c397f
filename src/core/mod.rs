//! Core data types: the shared board and the per-player views.
//!
//! Nothing in this module carries game logic; the rules live in
//! [`crate::rules`]. The board is the single source of truth for seed
//! counts, and `Side` is a synchronized per-player projection of it.

pub mod board;
pub mod player;

pub use board::{
    Board, PITS_PER_SIDE, SEEDS_PER_PIT, SLOT_COUNT, STORE_ONE, STORE_TWO,
};
pub use player::{PlayerId, Side};
