//! tracks-engine -- a scoring engine for the Tracks tile-laying game.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the TSI (Tracks Score Interface) convention.

use std::io::{self, BufRead};

use tracks_engine::engine::Engine;
use tracks_engine::protocol::parser::{parse_command, Command};

/// Runs the main TSI protocol loop, reading commands from stdin and
/// writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Tsi => {
                engine.handle_tsi(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::Board { notation } => {
                if let Err(e) = engine.set_board(&notation) {
                    eprintln!("{}", e);
                }
            }
            Command::NewBoard => {
                engine.new_board();
            }
            Command::Score => {
                engine.handle_score(&mut out);
            }
            Command::Sum => {
                engine.handle_sum(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
