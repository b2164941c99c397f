//! Python bindings for the Mancala rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import mancala_engine as me
//!
//! game = me.Mancala()
//! game.create_player("Ada")
//! game.create_player("Grace")
//!
//! board, extra_turn = game.play(1, 3)
//! print(game.render())
//! if game.is_ended():
//!     print(game.winner())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rules::Mancala;

/// A two-player Mancala game.
#[pyclass(name = "Mancala")]
pub struct PyMancala {
    inner: Mancala,
}

#[pymethods]
impl PyMancala {
    #[new]
    fn new() -> Self {
        Self {
            inner: Mancala::new(),
        }
    }

    /// Register a player; returns the 1-based seat number.
    fn create_player(&mut self, name: &str) -> PyResult<u8> {
        self.inner
            .register_player(name)
            .map(|player| player.number())
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Resolve one move; returns the 14-slot board and the extra-turn flag.
    fn play(&mut self, player: u8, pit: u8) -> PyResult<(Vec<u32>, bool)> {
        self.inner
            .make_move(player, pit)
            .map(|outcome| (outcome.board.to_vec(), outcome.extra_turn))
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Snapshot of all fourteen slots in board order.
    fn board(&self) -> Vec<u32> {
        self.inner.snapshot().to_vec()
    }

    /// True once both players' pit rows are empty.
    fn is_ended(&self) -> bool {
        self.inner.is_ended()
    }

    /// User-facing winner text.
    fn winner(&self) -> String {
        self.inner.winner_report()
    }

    /// Text rendering of both sides of the board.
    fn render(&self) -> String {
        self.inner.board().to_string()
    }
}

/// mancala_engine: a rules engine for two-player Mancala.
#[pymodule]
fn mancala_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMancala>()?;
    Ok(())
}
