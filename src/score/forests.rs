//! Forest adjacency credit.
//!
//! Credits interior cells that carry no forest edge of their own but sit
//! next to at least one neighbor whose facing edge is forest. Only the
//! neighbor's forest-facing edge matters; no type match is required.

use crate::board::cell::Coord;
use crate::board::direction::ALL_DIRECTIONS;
use crate::board::edge::EdgeType;
use crate::board::repo::CellRepo;

/// Returns all cells receiving forest-adjacency credit.
pub fn get_forests(cells: &CellRepo) -> Vec<Coord> {
    cells
        .iter()
        .filter(|cell| !cell.border)
        .filter(|cell| {
            cell.tile
                .map_or(false, |tile| !tile.has_edge(EdgeType::Forest))
        })
        .filter(|cell| {
            ALL_DIRECTIONS.into_iter().any(|direction| {
                let neighbor = cells.neighbor(cell.coord, direction);
                neighbor.tile.map_or(false, |neighbor_tile| {
                    neighbor_tile.edge(direction.opposite()).edge_type == EdgeType::Forest
                })
            })
        })
        .map(|cell| cell.coord)
        .collect()
}
