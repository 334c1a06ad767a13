//! Engine state management.
//!
//! Holds the current board position between commands and serves the TSI
//! protocol responses. The scoring engine itself is stateless; all that
//! persists here is the loaded board.

use std::io::Write;

use crate::board::repo::CellRepo;
use crate::protocol::notation::{parse_board, NotationError};
use crate::protocol::wire::NetworkScore;
use crate::score;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    board: CellRepo,
}

impl Engine {
    /// Creates a new engine holding the standard bordered board.
    pub fn new() -> Self {
        Engine {
            board: CellRepo::with_border_exits(),
        }
    }

    /// Returns the currently loaded board.
    pub fn board(&self) -> &CellRepo {
        &self.board
    }

    /// Loads a board position from its notation string. On failure the
    /// current position is left unchanged.
    pub fn set_board(&mut self, notation: &str) -> Result<(), NotationError> {
        self.board = parse_board(notation)?;
        Ok(())
    }

    /// Resets to the standard bordered board.
    pub fn new_board(&mut self) {
        self.board = CellRepo::with_border_exits();
    }

    /// Handles the TSI handshake: writes id lines and `tsiok`.
    pub fn handle_tsi<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name tracks-engine").unwrap();
        writeln!(out, "id author tracks-engine").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "tsiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Scores the current position and writes the reduced record as one
    /// JSON line.
    pub fn handle_score<W: Write>(&self, out: &mut W) {
        let score = score::get(&self.board);
        let wire = NetworkScore::from_score(&score);
        let json = serde_json::to_string(&wire).expect("wire score serializes");
        writeln!(out, "{}", json).unwrap();
        out.flush().unwrap();
    }

    /// Scores the current position and writes the scalar total.
    pub fn handle_sum<W: Write>(&self, out: &mut W) {
        let score = score::get(&self.board);
        writeln!(out, "{}", score::sum(&score)).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
