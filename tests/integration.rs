//! Integration tests for the tracks-engine binary.
//!
//! Tests the full TSI protocol session flow by spawning the engine
//! process, sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

use tracks_engine::protocol::wire::NetworkScore;

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_tracks-engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start tracks-engine");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// A road column joining the top and bottom exits at x=2, with the
/// standard border exits spelled out as ordinary placements.
const ROAD_COLUMN_BOARD: &str = "20r-r-:4010,21r-r-:4010,22r-r-:4010,23r-r-:4010,24r-r-:4010,25r-r-:4010,26r-r-:4010,27r-r-:4010,28r-r-:4010";

#[test]
fn tsi_handshake() {
    let lines = run_engine(&["tsi", "quit"]);

    assert!(lines.iter().any(|l| l == "id name tracks-engine"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert!(lines.iter().any(|l| l == "tsiok"));

    // tsiok must close the handshake.
    let tsiok_idx = lines.iter().position(|l| l == "tsiok").unwrap();
    let proto_idx = lines
        .iter()
        .position(|l| l == "protocol_version 1")
        .unwrap();
    assert!(proto_idx < tsiok_idx);
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert!(lines.contains(&"readyok".to_string()));
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["frobnicate", "isready", "quit"]);
    assert!(lines.contains(&"readyok".to_string()));
}

#[test]
fn default_board_sums_to_zero() {
    let lines = run_engine(&["sum", "quit"]);
    assert_eq!(lines, vec!["0"]);
}

#[test]
fn loaded_board_is_scored() {
    let board_cmd = format!("board {}", ROAD_COLUMN_BOARD);
    let lines = run_engine(&[&board_cmd, "sum", "quit"]);
    // Exit group of 2 (4 points) plus a 7-cell road run.
    assert_eq!(lines, vec!["11"]);
}

#[test]
fn score_emits_parseable_json() {
    let board_cmd = format!("board {}", ROAD_COLUMN_BOARD);
    let lines = run_engine(&[&board_cmd, "score", "quit"]);
    assert_eq!(lines.len(), 1);

    let wire: NetworkScore = serde_json::from_str(&lines[0]).expect("score line is JSON");
    assert_eq!(wire.exits, 4);
    assert_eq!(wire.road, 7);
    assert_eq!(wire.rail, 0);
    assert_eq!(wire.deadends, 0);
    assert_eq!(wire.total, 11);
}

#[test]
fn malformed_board_keeps_the_previous_position() {
    let board_cmd = format!("board {}", ROAD_COLUMN_BOARD);
    let lines = run_engine(&[&board_cmd, "board 99xxxx", "sum", "quit"]);
    assert_eq!(lines, vec!["11"]);
}

#[test]
fn newboard_resets_to_the_bordered_board() {
    let board_cmd = format!("board {}", ROAD_COLUMN_BOARD);
    let lines = run_engine(&[&board_cmd, "newboard", "sum", "quit"]);
    assert_eq!(lines, vec!["0"]);
}

#[test]
fn session_handles_multiple_positions() {
    let board_cmd = format!("board {}", ROAD_COLUMN_BOARD);
    let lines = run_engine(&[
        "board 44llll",
        "sum",
        &board_cmd,
        "sum",
        "board -",
        "sum",
        "quit",
    ]);
    // Lone lake at the center: cluster of 1 plus one center cell.
    assert_eq!(lines, vec!["2", "11", "0"]);
}
