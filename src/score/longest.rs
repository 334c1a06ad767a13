//! Longest-path search for roads and rails.
//!
//! Finds the longest simple path of a given edge type through the playable
//! interior. Explicit recursion with a backtracking visited set: a cell is
//! locked on entry and released on exit, so it can serve other branches of
//! the global search but never appears twice within one path.

use std::collections::HashSet;

use crate::board::cell::Coord;
use crate::board::direction::{Direction, DirectionSet};
use crate::board::edge::EdgeType;
use crate::board::repo::CellRepo;

/// Search state for one start cell. The locked set is local to a single
/// invocation of the search and never outlives it.
struct PathContext<'a> {
    cells: &'a CellRepo,
    edge_type: EdgeType,
    locked: HashSet<Coord>,
}

/// Returns the longest path starting at `coord`, entered through `from`
/// (`None` for a start cell, which has no wiring restriction).
fn longest_from(coord: Coord, from: Option<Direction>, ctx: &mut PathContext) -> Vec<Coord> {
    let Some(tile) = ctx.cells.get(coord).tile else {
        return Vec::new();
    };

    let out_directions = match from {
        Some(entry) => tile.edge(entry).connects,
        None => DirectionSet::FULL,
    };

    ctx.locked.insert(coord);
    let mut best: Vec<Coord> = Vec::new();

    for d in out_directions.iter() {
        if tile.edge(d).edge_type != ctx.edge_type {
            continue;
        }

        let neighbor = ctx.cells.neighbor(coord, d);
        // Paths terminate before the border; an exit is not path material.
        if neighbor.border {
            continue;
        }
        let Some(neighbor_tile) = neighbor.tile else {
            continue;
        };
        // Re-entering a locked cell would traverse the same tile twice
        // within this path.
        if ctx.locked.contains(&neighbor.coord) {
            continue;
        }

        let back = d.opposite();
        if neighbor_tile.edge(back).edge_type != ctx.edge_type {
            continue;
        }

        let subpath = longest_from(neighbor.coord, Some(back), ctx);
        if subpath.len() > best.len() {
            best = subpath;
        }
    }

    ctx.locked.remove(&coord);

    let mut path = Vec::with_capacity(best.len() + 1);
    path.push(coord);
    path.extend(best);
    path
}

/// Finds the single longest path of the given type across the whole grid.
///
/// Every interior, tile-occupied cell with at least one edge of the target
/// type is tried as a start, each with a fresh locked set. Ties are broken
/// by the first result found.
pub fn get_longest(edge_type: EdgeType, cells: &CellRepo) -> Vec<Coord> {
    let mut best: Vec<Coord> = Vec::new();

    for cell in cells.iter() {
        if cell.border {
            continue;
        }
        let Some(tile) = cell.tile else { continue };
        if !tile.has_edge(edge_type) {
            continue;
        }

        let mut ctx = PathContext {
            cells,
            edge_type,
            locked: HashSet::new(),
        };
        let path = longest_from(cell.coord, None, &mut ctx);
        if path.len() > best.len() {
            best = path;
        }
    }

    best
}
