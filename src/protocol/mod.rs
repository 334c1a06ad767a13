//! TSI protocol handling.
//!
//! This module implements parsing and serialization for the TSI (Tracks
//! Score Interface) protocol: board-notation position encoding, the
//! reduced wire score, and the command parser for the main loop.

pub mod notation;
pub mod parser;
pub mod wire;

pub use notation::{encode_board, parse_board, NotationError};
pub use parser::{parse_command, Command};
pub use wire::NetworkScore;
