//! TSI command parser.
//!
//! Parses incoming TSI (Tracks Score Interface) commands from raw text
//! into structured `Command` variants that the main loop can dispatch on.

/// A parsed host-to-engine TSI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the TSI handshake.
    Tsi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Load a board position from its notation string.
    Board { notation: String },

    /// Reset to the standard bordered board.
    NewBoard,

    /// Emit the reduced score of the current position as one JSON line.
    Score,

    /// Emit the scalar total of the current position.
    Sum,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands, so unknown
/// input is ignored rather than fatal.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "tsi" => Some(Command::Tsi),
        "isready" => Some(Command::IsReady),
        "newboard" => Some(Command::NewBoard),
        "score" => Some(Command::Score),
        "sum" => Some(Command::Sum),
        "quit" => Some(Command::Quit),

        "board" => {
            if rest.is_empty() {
                eprintln!("malformed board command: expected 'board <notation>'");
                return None;
            }
            Some(Command::Board {
                notation: rest.to_string(),
            })
        }

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}
