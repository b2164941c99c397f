//! Player identification and per-player board views.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats at the board.
//!
//! ## Side
//!
//! One player's projection of the board: six pits plus a store, together
//! with the player's name. The shared board owned by the engine stays
//! authoritative; the engine pushes synchronized values back into each
//! `Side` after every move.

use serde::{Deserialize, Serialize};

use super::board::{PITS_PER_SIDE, SEEDS_PER_PIT};

/// Identifier for one of the two seats.
///
/// Seats are numbered 1 and 2 in the external interface; `index()` gives the
/// 0-based form used for roster and slot arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both seats, in registration order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Get the 1-based seat number used by the move interface.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Parse a 1-based seat number; anything outside 1..=2 is rejected.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Get the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// One player's side of the board: six pits and a store, in fixed order.
///
/// A `Side` is a convenience view plus a name tag. It performs no
/// validation; the engine guarantees well-formed vectors when it pushes
/// state back with [`Side::set_values`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    name: String,
    values: [u32; PITS_PER_SIDE + 1],
}

impl Side {
    /// Create a side for a named player: four seeds in every pit, empty store.
    pub fn new(name: impl Into<String>) -> Self {
        let mut values = [SEEDS_PER_PIT; PITS_PER_SIDE + 1];
        values[PITS_PER_SIDE] = 0;
        Self {
            name: name.into(),
            values,
        }
    }

    /// Get the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the seven-value vector: pits 1-6 followed by the store.
    #[must_use]
    pub fn values(&self) -> [u32; PITS_PER_SIDE + 1] {
        self.values
    }

    /// Replace the seven-value vector wholesale.
    pub fn set_values(&mut self, values: [u32; PITS_PER_SIDE + 1]) {
        self.values = values;
    }

    /// Get the six pit counts, store excluded.
    #[must_use]
    pub fn pits(&self) -> [u32; PITS_PER_SIDE] {
        let mut pits = [0; PITS_PER_SIDE];
        pits.copy_from_slice(&self.values[..PITS_PER_SIDE]);
        pits
    }

    /// Get the store count.
    #[must_use]
    pub fn store(&self) -> u32 {
        self.values[PITS_PER_SIDE]
    }

    /// Sum of the six pits, store excluded.
    #[must_use]
    pub fn pit_total(&self) -> u32 {
        self.values[..PITS_PER_SIDE].iter().sum()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "store: {}", self.store())?;
        write!(f, "{:?}", self.pits())
    }
}
