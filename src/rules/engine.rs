//! The move-resolution state machine.
//!
//! `Mancala` owns the authoritative fourteen-slot board and drives the whole
//! game: sowing seeds from a chosen pit, the two special rules (extra turn
//! and capture), the per-side view sync, the finalization sweep, and winner
//! determination.
//!
//! ## Turn protocol
//!
//! An external driver registers two players, then calls [`Mancala::make_move`]
//! one call at a time until [`Mancala::is_ended`] reports true. The engine
//! never replays a turn on its own: when a move earns an extra turn, the
//! returned [`MoveOutcome`] says so and the driver is expected to ask the
//! same player again.

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, PITS_PER_SIDE, SLOT_COUNT, STORE_ONE, STORE_TWO};
use crate::core::player::{PlayerId, Side};

/// Everything that can go wrong at the engine boundary.
///
/// All failures are local and non-fatal: the engine rejects the request,
/// leaves the game state untouched, and reports one of these signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A third registration was attempted; only two players may play.
    RosterFull,
    /// A move was requested before both players were registered.
    RosterIncomplete,
    /// A move was requested after the game ended.
    Ended,
    /// The pit index was outside 1..=6.
    InvalidPit { pit: u8 },
    /// The player index was outside 1..=2.
    InvalidPlayer { player: u8 },
    /// The chosen pit holds no seeds.
    EmptyPit { player: PlayerId, pit: u8 },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::RosterFull => {
                write!(f, "only two players are allowed to play")
            }
            GameError::RosterIncomplete => {
                write!(f, "both players must be registered before moving")
            }
            GameError::Ended => write!(f, "game is ended"),
            GameError::InvalidPit { pit } => {
                write!(f, "invalid pit index {pit}, expected 1 through 6")
            }
            GameError::InvalidPlayer { player } => {
                write!(f, "invalid player index {player}, expected 1 or 2")
            }
            GameError::EmptyPit { player, pit } => {
                write!(f, "pit {pit} of {player} has no seeds")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Seeds claimed by the capture rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The pit the last seed landed in (zeroed by the capture).
    pub pit: usize,
    /// The directly-opposite pit (also zeroed).
    pub opposite: usize,
    /// Total seeds moved into the mover's store, landing seed included.
    pub captured: u32,
}

/// Result of a successfully resolved move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The full board snapshot after the move.
    pub board: [u32; SLOT_COUNT],
    /// The last seed landed in the mover's own store; the same player
    /// moves again (special rule 1).
    pub extra_turn: bool,
    /// The last seed landed in an empty pit of the mover's own row and
    /// captured the opposite pit (special rule 2).
    pub capture: Option<Capture>,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player with the higher store.
    Winner(PlayerId),
    /// Both stores hold the same count.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Lifecycle of a game. There is no transition out of `Ended`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    InProgress,
    Ended,
}

/// A two-player Mancala game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mancala {
    board: Board,
    sides: Vec<Side>,
    phase: Phase,
}

impl Mancala {
    /// Create a fresh game: standard board, no players registered yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            sides: Vec::with_capacity(2),
            phase: Phase::InProgress,
        }
    }

    /// Create a fully-rostered game over an arbitrary board position.
    ///
    /// Intended for drivers and tests that need to start mid-game. A
    /// position whose pit rows are both already empty starts in
    /// [`Phase::Ended`].
    #[must_use]
    pub fn with_board(names: [&str; 2], slots: [u32; SLOT_COUNT]) -> Self {
        let mut game = Self {
            board: Board::from_slots(slots),
            sides: names.into_iter().map(Side::new).collect(),
            phase: Phase::InProgress,
        };
        game.sync_sides();
        game.update_phase();
        game
    }

    /// Register a player. The first registration is player 1, the second
    /// player 2; a third attempt is rejected without side effects.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        if self.sides.len() >= PlayerId::ALL.len() {
            return Err(GameError::RosterFull);
        }
        let player = PlayerId::ALL[self.sides.len()];
        self.sides.push(Side::new(name));
        Ok(player)
    }

    /// Resolve one move: pick up every seed in the chosen pit and sow them
    /// one per slot in board order, then evaluate the special rules, sync
    /// the side views, and run the finalization sweep.
    ///
    /// `player` is the 1-based seat number, `pit` the 1-based pit number
    /// counted from the player's own row. Rejections are checked in a fixed
    /// order: game already ended, pit range, player range, roster, empty
    /// pit. A rejected move leaves the game untouched.
    pub fn make_move(&mut self, player: u8, pit: u8) -> Result<MoveOutcome, GameError> {
        if self.phase == Phase::Ended {
            return Err(GameError::Ended);
        }
        if pit < 1 || pit > PITS_PER_SIDE as u8 {
            return Err(GameError::InvalidPit { pit });
        }
        let Some(mover) = PlayerId::from_number(player) else {
            return Err(GameError::InvalidPlayer { player });
        };
        if self.sides.len() < PlayerId::ALL.len() {
            return Err(GameError::RosterIncomplete);
        }
        let start = Board::slot_for(mover, pit);
        if self.board.seeds(start) == 0 {
            return Err(GameError::EmptyPit { player: mover, pit });
        }

        let mut remaining = self.board.take_all(start);
        let mut slot = start;
        while remaining > 0 {
            slot = Self::next_slot(mover, slot);
            self.board.drop_seed(slot);
            remaining -= 1;
        }

        let (extra_turn, capture) = self.apply_special_rules(mover, slot);
        self.sweep_finished_rows();
        self.sync_sides();
        self.update_phase();

        Ok(MoveOutcome {
            board: self.board.slots(),
            extra_turn,
            capture,
        })
    }

    /// Advance the sowing pointer one step for `mover`.
    ///
    /// Player 1's pointer cycles through slots 0-12 and wraps from slot 12
    /// straight to slot 0, so the opponent store at slot 13 never appears in
    /// the cycle. Player 2's pointer visits slot 13 but hops over slot 6:
    /// no seed is placed in the opponent store and the pointer moves past it.
    const fn next_slot(mover: PlayerId, slot: usize) -> usize {
        match mover {
            PlayerId::One => {
                if slot == STORE_TWO - 1 {
                    0
                } else {
                    slot + 1
                }
            }
            PlayerId::Two => {
                if slot == STORE_ONE - 1 {
                    STORE_ONE + 1
                } else if slot == STORE_TWO {
                    0
                } else {
                    slot + 1
                }
            }
        }
    }

    /// Evaluate the two special rules for the slot the last seed landed in.
    fn apply_special_rules(&mut self, mover: PlayerId, landing: usize) -> (bool, Option<Capture>) {
        if landing == Board::store_slot(mover) {
            // Special rule 1: the mover goes again.
            return (true, None);
        }
        if Board::pit_owner(landing) == Some(mover) && self.board.seeds(landing) == 1 {
            // Special rule 2: the landing pit was empty before this seed.
            let opposite = Board::opposite(landing);
            self.board.take_all(landing);
            let captured = 1 + self.board.take_all(opposite);
            self.board.add(Board::store_slot(mover), captured);
            return (
                false,
                Some(Capture {
                    pit: landing,
                    opposite,
                    captured,
                }),
            );
        }
        (false, None)
    }

    /// Finalization sweep, run unconditionally after every move: when one
    /// player's pit row is empty, the other player's remaining pit seeds
    /// move into their own store.
    ///
    /// The two sides are evaluated in order, so a sweep triggered by side
    /// 1's empty row zeroes side 2's pits and the second check then fires
    /// as a no-op. A row that empties mid-game still triggers the sweep,
    /// permanently crediting the opponent's seeds.
    fn sweep_finished_rows(&mut self) {
        if self.board.row_total(PlayerId::One) == 0 {
            self.board.sweep_row(PlayerId::Two);
        }
        if self.board.row_total(PlayerId::Two) == 0 {
            self.board.sweep_row(PlayerId::One);
        }
    }

    /// Enter `Ended` the instant both pit rows are exhausted. The phase and
    /// the board can never disagree about the end of the game.
    fn update_phase(&mut self) {
        if self.board.row_total(PlayerId::One) == 0 && self.board.row_total(PlayerId::Two) == 0 {
            self.phase = Phase::Ended;
        }
    }

    /// Push the authoritative board back into both side views.
    fn sync_sides(&mut self) {
        for (player, side) in PlayerId::ALL.iter().zip(self.sides.iter_mut()) {
            side.set_values(self.board.side_values(*player));
        }
    }

    /// True iff both players' pit rows sum to zero, judged from the current
    /// side views. False while the roster is incomplete.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.sides.len() == PlayerId::ALL.len() && self.sides.iter().all(|s| s.pit_total() == 0)
    }

    /// The game's result, or `None` while the game is still in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_ended() {
            return None;
        }
        let one = self.sides[PlayerId::One.index()].store();
        let two = self.sides[PlayerId::Two.index()].store();
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        })
    }

    /// User-facing winner text.
    #[must_use]
    pub fn winner_report(&self) -> String {
        match self.result() {
            Some(GameResult::Winner(player)) => {
                format!(
                    "Winner is player {}: {}",
                    player.number(),
                    self.sides[player.index()].name()
                )
            }
            Some(GameResult::Tie) => "It's a tie".to_string(),
            None => "Game has not ended".to_string(),
        }
    }

    /// The authoritative board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of all fourteen slots.
    #[must_use]
    pub fn snapshot(&self) -> [u32; SLOT_COUNT] {
        self.board.slots()
    }

    /// One player's side view, if that player has registered.
    #[must_use]
    pub fn side(&self, player: PlayerId) -> Option<&Side> {
        self.sides.get(player.index())
    }

    /// Both side views in registration order.
    #[must_use]
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for Mancala {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_game() -> Mancala {
        let mut game = Mancala::new();
        game.register_player("Ada").unwrap();
        game.register_player("Grace").unwrap();
        game
    }

    #[test]
    fn test_registration_order() {
        let mut game = Mancala::new();
        assert_eq!(game.register_player("Ada"), Ok(PlayerId::One));
        assert_eq!(game.register_player("Grace"), Ok(PlayerId::Two));
        assert_eq!(game.side(PlayerId::One).unwrap().name(), "Ada");
        assert_eq!(game.side(PlayerId::Two).unwrap().name(), "Grace");
    }

    #[test]
    fn test_third_registration_rejected() {
        let mut game = fresh_game();
        assert_eq!(game.register_player("Edsger"), Err(GameError::RosterFull));
        assert_eq!(game.sides().len(), 2);
        assert_eq!(game.snapshot(), Board::new().slots());
    }

    #[test]
    fn test_move_requires_full_roster() {
        let mut game = Mancala::new();
        game.register_player("Ada").unwrap();
        assert_eq!(game.make_move(1, 1), Err(GameError::RosterIncomplete));
    }

    #[test]
    fn test_opening_move_into_store_grants_extra_turn() {
        let mut game = fresh_game();
        let outcome = game.make_move(1, 3).unwrap();
        assert_eq!(outcome.board, [4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
        assert!(outcome.extra_turn);
        assert_eq!(outcome.capture, None);
        assert_eq!(game.side(PlayerId::One).unwrap().values(), [4, 4, 0, 5, 5, 5, 1]);
    }

    #[test]
    fn test_player_two_extra_turn() {
        let mut game = fresh_game();
        let outcome = game.make_move(2, 3).unwrap();
        assert_eq!(outcome.board, [4, 4, 4, 4, 4, 4, 0, 4, 4, 0, 5, 5, 5, 1]);
        assert!(outcome.extra_turn);
    }

    #[test]
    fn test_invalid_pit_checked_before_invalid_player() {
        let mut game = fresh_game();
        assert_eq!(game.make_move(9, 7), Err(GameError::InvalidPit { pit: 7 }));
        assert_eq!(game.make_move(9, 0), Err(GameError::InvalidPit { pit: 0 }));
        assert_eq!(
            game.make_move(3, 2),
            Err(GameError::InvalidPlayer { player: 3 })
        );
        assert_eq!(game.snapshot(), Board::new().slots());
    }

    #[test]
    fn test_empty_pit_rejected() {
        let mut game = fresh_game();
        game.make_move(1, 3).unwrap();
        assert_eq!(
            game.make_move(1, 3),
            Err(GameError::EmptyPit {
                player: PlayerId::One,
                pit: 3
            })
        );
    }

    #[test]
    fn test_capture_takes_landing_seed_and_opposite_pit() {
        let mut game =
            Mancala::with_board(["Ada", "Grace"], [2, 0, 0, 4, 4, 4, 0, 1, 1, 1, 10, 1, 1, 0]);
        let outcome = game.make_move(1, 1).unwrap();
        assert_eq!(
            outcome.capture,
            Some(Capture {
                pit: 2,
                opposite: 10,
                captured: 11
            })
        );
        assert!(!outcome.extra_turn);
        assert_eq!(outcome.board, [0, 1, 0, 4, 4, 4, 11, 1, 1, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_capture_for_player_two() {
        let mut game =
            Mancala::with_board(["Ada", "Grace"], [4, 4, 4, 4, 4, 4, 0, 1, 1, 3, 0, 0, 0, 0]);
        let outcome = game.make_move(2, 3).unwrap();
        assert_eq!(
            outcome.capture,
            Some(Capture {
                pit: 12,
                opposite: 0,
                captured: 5
            })
        );
        assert_eq!(outcome.board, [0, 4, 4, 4, 4, 4, 0, 1, 1, 0, 1, 1, 0, 5]);
    }

    #[test]
    fn test_no_capture_when_landing_pit_was_occupied() {
        let mut game = fresh_game();
        // Pit 1 sows into pits 2-5, all occupied; no rule fires.
        let outcome = game.make_move(1, 1).unwrap();
        assert_eq!(outcome.capture, None);
        assert!(!outcome.extra_turn);
        assert_eq!(outcome.board, [0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sweep_ends_game_and_determines_winner() {
        let mut game =
            Mancala::with_board(["Ada", "Grace"], [0, 0, 0, 0, 0, 2, 5, 1, 1, 1, 1, 1, 1, 3]);
        let outcome = game.make_move(1, 6).unwrap();
        assert_eq!(outcome.board, [0, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 10]);
        assert!(game.is_ended());
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::Two)));
        assert_eq!(game.winner_report(), "Winner is player 2: Grace");
        assert_eq!(game.make_move(2, 1), Err(GameError::Ended));
    }

    #[test]
    fn test_tie_report() {
        let mut game =
            Mancala::with_board(["Ada", "Grace"], [0, 0, 0, 0, 0, 1, 23, 0, 0, 0, 0, 0, 0, 24]);
        game.make_move(1, 6).unwrap();
        assert_eq!(game.result(), Some(GameResult::Tie));
        assert_eq!(game.winner_report(), "It's a tie");
    }

    #[test]
    fn test_finished_position_starts_in_ended_phase() {
        let mut game = Mancala::with_board(
            ["Ada", "Grace"],
            [0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 18],
        );
        assert_eq!(game.phase(), Phase::Ended);
        assert!(game.is_ended());
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::One)));
        assert_eq!(game.make_move(1, 1), Err(GameError::Ended));
    }

    #[test]
    fn test_winner_query_before_end() {
        let game = fresh_game();
        assert!(!game.is_ended());
        assert_eq!(game.result(), None);
        assert_eq!(game.winner_report(), "Game has not ended");
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::Two);
        assert!(result.is_winner(PlayerId::Two));
        assert!(!result.is_winner(PlayerId::One));
        assert!(!GameResult::Tie.is_winner(PlayerId::One));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", GameError::InvalidPit { pit: 7 }),
            "invalid pit index 7, expected 1 through 6"
        );
        assert_eq!(format!("{}", GameError::Ended), "game is ended");
    }

    #[test]
    fn test_game_serialization() {
        let game = fresh_game();
        let json = serde_json::to_string(&game).unwrap();
        let deserialized: Mancala = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.snapshot(), game.snapshot());
        assert_eq!(deserialized.phase(), game.phase());
    }
}
