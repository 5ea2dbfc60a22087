//! Event types for the TUI event loop.

use crate::types::PostRecord;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    /// Completion of a list fetch. `generation` identifies which issued fetch
    /// produced the result; stale generations are discarded.
    ListLoaded {
        generation: u64,
        result: Result<Vec<PostRecord>, String>,
    },
    /// Completion of a delete request for the given identifier.
    DeleteFinished {
        id: String,
        result: Result<(), String>,
    },
}
