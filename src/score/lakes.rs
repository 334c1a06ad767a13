//! Lake cluster sizing.
//!
//! Partitions all lake-edged cells into connected clusters via flood fill
//! and reports each cluster's size in discovery order.

use std::collections::VecDeque;

use crate::board::cell::Coord;
use crate::board::direction::ALL_DIRECTIONS;
use crate::board::edge::EdgeType;
use crate::board::repo::CellRepo;

/// Removes one cluster from `remaining`, seeded by its first cell, and
/// returns the cluster's members. A neighbor joins the cluster when both
/// facing edges are lake and it is still unclaimed.
fn extract_lake(remaining: &mut Vec<Coord>, cells: &CellRepo) -> Vec<Coord> {
    let mut pending: VecDeque<Coord> = VecDeque::new();
    pending.push_back(remaining.remove(0));
    let mut processed: Vec<Coord> = Vec::new();

    while let Some(coord) = pending.pop_front() {
        processed.push(coord);

        let Some(tile) = cells.get(coord).tile else {
            continue;
        };

        for direction in ALL_DIRECTIONS {
            if tile.edge(direction).edge_type != EdgeType::Lake {
                continue;
            }

            let neighbor = cells.neighbor(coord, direction);
            let Some(neighbor_tile) = neighbor.tile else {
                continue;
            };
            if neighbor_tile.edge(direction.opposite()).edge_type != EdgeType::Lake {
                continue;
            }

            let Some(index) = remaining.iter().position(|&c| c == neighbor.coord) else {
                continue;
            };
            remaining.remove(index);
            pending.push_back(neighbor.coord);
        }
    }

    processed
}

/// Returns the sizes of all connected lake clusters, in discovery order.
pub fn get_lakes(cells: &CellRepo) -> Vec<usize> {
    let mut remaining: Vec<Coord> = cells
        .iter()
        .filter(|c| c.tile.map_or(false, |t| t.has_edge(EdgeType::Lake)))
        .map(|c| c.coord)
        .collect();

    let mut sizes = Vec::new();
    while !remaining.is_empty() {
        sizes.push(extract_lake(&mut remaining, cells).len());
    }

    sizes
}
