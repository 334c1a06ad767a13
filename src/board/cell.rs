//! Cells and coordinates.

use super::direction::Direction;
use super::tile::Tile;

/// Integer grid coordinates identifying a cell.
///
/// Derives `Ord` so an undirected cell pair can be put in canonical order
/// when deduplicating traversal edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    /// Builds a coordinate pair.
    pub const fn new(x: i8, y: i8) -> Coord {
        Coord { x, y }
    }

    /// Returns the coordinate one step in the given direction.
    pub const fn step(self, direction: Direction) -> Coord {
        let (dx, dy) = direction.vector();
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One grid position.
///
/// Identity (coordinates, border/center flags) is fixed at grid
/// construction; only the tile slot changes, and only through the
/// repository's placement methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    /// True for the outermost ring, which represents map exit points.
    pub border: bool,
    /// True for the designated central region of the playable interior.
    pub center: bool,
    pub tile: Option<Tile>,
}
