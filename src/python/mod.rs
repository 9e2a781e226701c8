//! Python bindings for the picmatch memory game.
//!
//! # Quick Start
//!
//! ```python
//! import picmatch
//!
//! game = picmatch.MemoryGame(seed=7)
//! game.click(0)
//! game.click(1)
//! game.advance(1000)      # let the pair resolve
//! print(game)             # MemoryGame(moves=2, ...)
//!
//! moves, won = picmatch.play_episode("memory", seed=3)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// picmatch: a picture flip match memory game.
#[pymodule]
fn picmatch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    m.add_function(wrap_pyfunction!(play_episode, m)?)?;
    Ok(())
}
