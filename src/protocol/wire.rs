//! Reduced score record for transmission between players.
//!
//! The multiplayer layer exchanges plain counts rather than the engine's
//! structural `Score`: path lengths instead of cell sequences, the summed
//! exit bonus instead of group sizes. The engine guarantees the rich
//! record stays derivable from any snapshot; this is its wire reduction.

use serde::{Deserialize, Serialize};

use crate::score::{self, Score};

/// The flattened per-player score exchanged at game end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkScore {
    /// Summed exit-group bonus points.
    pub exits: i32,
    /// Longest road path length.
    pub road: usize,
    /// Longest rail path length.
    pub rail: usize,
    /// Tile-occupied center cells.
    pub center: usize,
    /// Number of dead-ended stubs (subtracted from the total).
    pub deadends: usize,
    /// Scored lake value (the smallest cluster, or 0).
    pub lakes: i32,
    /// Number of forest-adjacent cells.
    pub forests: usize,
    /// The final total, equal to `score::sum` of the source record.
    pub total: i32,
}

impl NetworkScore {
    /// Reduces a structural score record to its wire form.
    pub fn from_score(score: &Score) -> NetworkScore {
        NetworkScore {
            exits: score::map_exits(score).iter().sum(),
            road: score.road.len(),
            rail: score.rail.len(),
            center: score.center,
            deadends: score.deadends.len(),
            lakes: score::sum_lakes(score),
            forests: score.forests.len(),
            total: score::sum(score),
        }
    }
}
