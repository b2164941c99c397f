//! The shared fourteen-slot board.
//!
//! ## Slot layout
//!
//! ```text
//! index:  0  1  2  3  4  5 |  6  |  7  8  9 10 11 12 | 13
//!         player 1 pits    |store|   player 2 pits   |store
//! ```
//!
//! The board is the single authoritative owner of every seed. Seeds are
//! never created or destroyed after construction, only moved between slots,
//! so the total across all fourteen slots is constant for the life of a
//! game (48 for the standard four-seeds-per-pit start).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Number of seed pits per player, store excluded.
pub const PITS_PER_SIDE: usize = 6;

/// Total slots on the board: six pits and one store per player.
pub const SLOT_COUNT: usize = 14;

/// Seeds placed in every pit at the start of a game.
pub const SEEDS_PER_PIT: u32 = 4;

/// Absolute slot of player 1's store.
pub const STORE_ONE: usize = 6;

/// Absolute slot of player 2's store.
pub const STORE_TWO: usize = 13;

/// Fixed pit-to-opposite-pit mapping used by the capture rule.
///
/// Pits map to the pit directly across the board (0↔12, 1↔11, 2↔10, 3↔9,
/// 4↔8, 5↔7). Stores map to themselves and are never looked up.
const OPPOSITE: [usize; SLOT_COUNT] = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 13];

/// The full fourteen-slot seed array, the logical union of both sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [u32; SLOT_COUNT],
}

impl Board {
    /// Create the standard starting board: four seeds per pit, empty stores.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = [SEEDS_PER_PIT; SLOT_COUNT];
        slots[STORE_ONE] = 0;
        slots[STORE_TWO] = 0;
        Self { slots }
    }

    /// Create a board from an arbitrary slot layout.
    ///
    /// Useful for setting up mid-game positions.
    #[must_use]
    pub fn from_slots(slots: [u32; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Snapshot of all fourteen slots in board order.
    #[must_use]
    pub fn slots(&self) -> [u32; SLOT_COUNT] {
        self.slots
    }

    /// Seed count in one slot.
    #[must_use]
    pub fn seeds(&self, slot: usize) -> u32 {
        self.slots[slot]
    }

    /// Total seed count across the whole board.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// Sum of one player's six pits, store excluded.
    #[must_use]
    pub fn row_total(&self, player: PlayerId) -> u32 {
        let first = player.index() * (PITS_PER_SIDE + 1);
        self.slots[first..first + PITS_PER_SIDE].iter().sum()
    }

    /// Seed count in one player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.slots[Self::store_slot(player)]
    }

    /// One player's seven-value view: pits 1-6 followed by the store.
    #[must_use]
    pub fn side_values(&self, player: PlayerId) -> [u32; PITS_PER_SIDE + 1] {
        let first = player.index() * (PITS_PER_SIDE + 1);
        let mut values = [0; PITS_PER_SIDE + 1];
        values.copy_from_slice(&self.slots[first..first + PITS_PER_SIDE + 1]);
        values
    }

    /// Absolute slot of a player's store.
    #[must_use]
    pub const fn store_slot(player: PlayerId) -> usize {
        match player {
            PlayerId::One => STORE_ONE,
            PlayerId::Two => STORE_TWO,
        }
    }

    /// Map a 1-based pit number to its absolute slot.
    ///
    /// Player 1's pits occupy slots 0-5, player 2's slots 7-12. The pit
    /// number must already be validated to 1..=6.
    #[must_use]
    pub const fn slot_for(player: PlayerId, pit: u8) -> usize {
        match player {
            PlayerId::One => pit as usize - 1,
            PlayerId::Two => pit as usize + PITS_PER_SIDE,
        }
    }

    /// Which player owns a slot as a pit, if either. Stores own nothing.
    #[must_use]
    pub const fn pit_owner(slot: usize) -> Option<PlayerId> {
        if slot < STORE_ONE {
            Some(PlayerId::One)
        } else if slot > STORE_ONE && slot < STORE_TWO {
            Some(PlayerId::Two)
        } else {
            None
        }
    }

    /// The pit directly across the board, via the fixed mapping.
    #[must_use]
    pub const fn opposite(slot: usize) -> usize {
        OPPOSITE[slot]
    }

    /// Empty a slot and return the seeds that were in it.
    pub(crate) fn take_all(&mut self, slot: usize) -> u32 {
        std::mem::take(&mut self.slots[slot])
    }

    /// Drop a single seed into a slot.
    pub(crate) fn drop_seed(&mut self, slot: usize) {
        self.slots[slot] += 1;
    }

    /// Add seeds to a slot.
    pub(crate) fn add(&mut self, slot: usize, seeds: u32) {
        self.slots[slot] += seeds;
    }

    /// Move every seed in a player's pit row into that player's store.
    pub(crate) fn sweep_row(&mut self, player: PlayerId) {
        let first = player.index() * (PITS_PER_SIDE + 1);
        let mut total = 0;
        for slot in first..first + PITS_PER_SIDE {
            total += std::mem::take(&mut self.slots[slot]);
        }
        self.slots[Self::store_slot(player)] += total;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "player1:")?;
        writeln!(f, "store: {}", self.slots[STORE_ONE])?;
        writeln!(f, "{:?}", &self.slots[..PITS_PER_SIDE])?;
        writeln!(f, "player2:")?;
        writeln!(f, "store: {}", self.slots[STORE_TWO])?;
        write!(f, "{:?}", &self.slots[STORE_ONE + 1..STORE_TWO])
    }
}
