//! Move resolution, special rules, and winner determination.

pub mod engine;

pub use engine::{Capture, GameError, GameResult, Mancala, MoveOutcome, Phase};
