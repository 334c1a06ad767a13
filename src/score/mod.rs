//! The scoring engine.
//!
//! Seven independent analyses over a finished board -- connected exits,
//! longest road, longest rail, dead ends, lake sizes, forest adjacency,
//! and filled center cells -- reduced to a single total by a fixed
//! formula. Every analysis is a pure function of the grid snapshot: the
//! engine never mutates the board and holds no state across calls.

pub mod deadends;
pub mod exits;
pub mod forests;
pub mod lakes;
pub mod longest;

pub use deadends::{get_deadends, Deadend};
pub use exits::get_exits;
pub use forests::get_forests;
pub use lakes::get_lakes;
pub use longest::get_longest;

use crate::board::cell::Coord;
use crate::board::edge::EdgeType;
use crate::board::repo::{CellRepo, EXIT_COUNT};

/// The structural metrics derived from one board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Connected exit group sizes, one per group of more than one exit.
    pub exits: Vec<usize>,
    /// Tile-occupied center cells.
    pub center: usize,
    /// Road/rail stubs that terminate without a match or the border.
    pub deadends: Vec<Deadend>,
    /// The single longest road path, in order.
    pub road: Vec<Coord>,
    /// The single longest rail path, in order.
    pub rail: Vec<Coord>,
    /// Lake cluster sizes in discovery order.
    pub lakes: Vec<usize>,
    /// Cells receiving forest-adjacency credit.
    pub forests: Vec<Coord>,
}

/// Bonus awarded when every exit joins a single group.
const ALL_EXITS_BONUS: i32 = 45;

/// Counts tile-occupied center cells.
pub fn center_count(cells: &CellRepo) -> usize {
    cells
        .iter()
        .filter(|c| c.center && c.tile.is_some())
        .count()
}

/// Runs all analyses over the board and assembles the score record.
pub fn get(cells: &CellRepo) -> Score {
    Score {
        exits: exits::get_exits(cells),
        center: center_count(cells),
        rail: longest::get_longest(EdgeType::Rail, cells),
        road: longest::get_longest(EdgeType::Road, cells),
        deadends: deadends::get_deadends(cells),
        lakes: lakes::get_lakes(cells),
        forests: forests::get_forests(cells),
    }
}

/// Like [`get`], with the analyses dispatched across rayon's thread pool.
///
/// The analyses share no mutable state and only read the grid, so they can
/// run concurrently; the result is identical to the sequential path.
pub fn get_parallel(cells: &CellRepo) -> Score {
    let ((exits, center), ((road, rail), (deadends, (lakes, forests)))) = rayon::join(
        || (exits::get_exits(cells), center_count(cells)),
        || {
            rayon::join(
                || {
                    rayon::join(
                        || longest::get_longest(EdgeType::Road, cells),
                        || longest::get_longest(EdgeType::Rail, cells),
                    )
                },
                || {
                    rayon::join(
                        || deadends::get_deadends(cells),
                        || rayon::join(|| lakes::get_lakes(cells), || forests::get_forests(cells)),
                    )
                },
            )
        },
    );

    Score {
        exits,
        center,
        deadends,
        road,
        rail,
        lakes,
        forests,
    }
}

/// Maps each exit group size to its bonus points.
///
/// The rule table is literal: a group of all twelve exits is worth a flat
/// 45; any other group of size `c` is worth `(c - 1) * 4`.
pub fn map_exits(score: &Score) -> Vec<i32> {
    score
        .exits
        .iter()
        .map(|&count| {
            if count == EXIT_COUNT {
                ALL_EXITS_BONUS
            } else {
                (count as i32 - 1) * 4
            }
        })
        .collect()
}

/// Returns the scored lake value: the smallest cluster size, or 0 when no
/// lake exists. The minimum, not the sum, is what the rules reward.
pub fn sum_lakes(score: &Score) -> i32 {
    score
        .lakes
        .iter()
        .copied()
        .min()
        .map_or(0, |smallest| smallest as i32)
}

/// Reduces a score record to the final total.
pub fn sum(score: &Score) -> i32 {
    let exit_score: i32 = map_exits(score).iter().sum();
    let lake_score = sum_lakes(score);

    exit_score + score.road.len() as i32 + score.rail.len() as i32 + score.center as i32
        - score.deadends.len() as i32
        + lake_score
        + score.forests.len() as i32
}
