//! Connected-exit analysis.
//!
//! Groups border cells that reach one another through continuous chains of
//! matching, tile-wired edges. Large contiguous exit groups earn a bonus;
//! an exit connected to nothing scores nothing.

use std::collections::{HashSet, VecDeque};

use crate::board::cell::Coord;
use crate::board::direction::{Direction, DirectionSet};
use crate::board::edge::EdgeType;
use crate::board::repo::CellRepo;

/// Canonical key for an undirected cell-pair edge: the lexicographically
/// smaller coordinate first, so the key is identical regardless of which
/// side the traversal reached first.
fn edge_key(a: Coord, b: Coord) -> (Coord, Coord) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Computes the connected component containing `start`.
///
/// Breadth-first traversal over matching edges. A cell entered through
/// direction `from` may only continue through the directions its tile
/// wires to that edge; the seed cell has no entry restriction. Each
/// undirected cell-pair edge is traversed at most once, which keeps the
/// walk cycle-safe while still allowing a cell to be re-entered through a
/// different edge (its wiring may open different exits). Membership is
/// recorded once per cell, in discovery order.
pub(crate) fn subgraph(start: Coord, cells: &CellRepo) -> Vec<Coord> {
    let mut members: Vec<Coord> = Vec::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut locked_edges: HashSet<(Coord, Coord)> = HashSet::new();
    let mut queue: VecDeque<(Coord, Option<Direction>)> = VecDeque::new();
    queue.push_back((start, None));

    while let Some((coord, from)) = queue.pop_front() {
        let cell = cells.get(coord);
        let Some(tile) = cell.tile else { continue };

        if seen.insert(coord) {
            members.push(coord);
        }

        let out_directions = match from {
            Some(entry) => tile.edge(entry).connects,
            None => DirectionSet::FULL,
        };

        for d in out_directions.iter() {
            let edge_type = tile.edge(d).edge_type;
            if edge_type == EdgeType::None {
                continue;
            }

            let neighbor = cells.neighbor(coord, d);
            let Some(neighbor_tile) = neighbor.tile else {
                continue;
            };

            let back = d.opposite();
            if neighbor_tile.edge(back).edge_type != edge_type {
                continue;
            }

            if !locked_edges.insert(edge_key(coord, neighbor.coord)) {
                continue;
            }
            queue.push_back((neighbor.coord, Some(back)));
        }
    }

    members
}

/// Returns the border cells in the connected component containing `start`.
fn connected_exits(start: Coord, cells: &CellRepo) -> Vec<Coord> {
    subgraph(start, cells)
        .into_iter()
        .filter(|&c| cells.get(c).border)
        .collect()
}

/// Partitions all tile-occupied border cells into connected exit groups
/// and returns the size of each group with more than one member.
pub fn get_exits(cells: &CellRepo) -> Vec<usize> {
    let mut remaining: Vec<Coord> = cells
        .iter()
        .filter(|c| c.border && c.tile.is_some())
        .map(|c| c.coord)
        .collect();

    let mut results = Vec::new();
    while !remaining.is_empty() {
        let seed = remaining[0];
        let connected = connected_exits(seed, cells);
        if connected.len() > 1 {
            results.push(connected.len());
        }
        let consumed: HashSet<Coord> = connected.into_iter().collect();
        remaining.retain(|c| !consumed.contains(c));
    }

    results
}
