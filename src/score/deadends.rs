//! Dead-end detection.
//!
//! A road or rail edge that points at a non-border neighbor which is
//! either empty or carries a mismatched edge is a dead end and costs a
//! point. An edge pointing at the border is a legitimate exit, not a stub.

use crate::board::cell::Coord;
use crate::board::direction::{Direction, ALL_DIRECTIONS};
use crate::board::edge::EdgeType;
use crate::board::repo::CellRepo;

/// A road/rail stub that fails to continue: the cell it sits on and the
/// direction it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadend {
    pub coord: Coord,
    pub direction: Direction,
}

/// Scans every interior cell in row-major order, directions in N, E, S, W
/// order, and collects all dead-ended road/rail edges.
pub fn get_deadends(cells: &CellRepo) -> Vec<Deadend> {
    let mut deadends = Vec::new();

    for cell in cells.iter() {
        if cell.border {
            continue;
        }
        let Some(tile) = cell.tile else { continue };

        for direction in ALL_DIRECTIONS {
            let edge_type = tile.edge(direction).edge_type;
            if edge_type != EdgeType::Road && edge_type != EdgeType::Rail {
                continue;
            }

            let neighbor = cells.neighbor(cell.coord, direction);
            if neighbor.border {
                continue;
            }

            let open = match neighbor.tile {
                None => true,
                Some(neighbor_tile) => {
                    neighbor_tile.edge(direction.opposite()).edge_type != edge_type
                }
            };
            if open {
                deadends.push(Deadend {
                    coord: cell.coord,
                    direction,
                });
            }
        }
    }

    deadends
}
