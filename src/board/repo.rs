//! The cell repository: a fixed-size grid arena with border sentinels.
//!
//! The playable interior is surrounded by a one-cell border ring whose
//! positions represent map exits. Lookups outside the grid resolve to a
//! shared immutable border sentinel, so neighbor access at the edge never
//! needs a null check.

use super::cell::{Cell, Coord};
use super::direction::Direction;
use super::edge::EdgeType;
use super::tile::Tile;

/// Side length of the standard playable interior.
pub const BOARD_SIZE: usize = 7;

/// Number of exit positions on the standard border layout.
pub const EXIT_COUNT: usize = 12;

/// Shared sentinel returned for out-of-grid lookups. Its coordinates are
/// unobservable: traversals discard tile-less cells before recording them.
static BORDER_SENTINEL: Cell = Cell {
    coord: Coord { x: -1, y: -1 },
    border: true,
    center: false,
    tile: None,
};

/// Standard exit layout: three per side at offsets 2, 4 and 6 of the
/// 9-wide grid, alternating road and rail, corners left empty. Each entry
/// is (x, y, type, direction toward the interior).
const BORDER_EXITS: [(i8, i8, EdgeType, Direction); EXIT_COUNT] = [
    (2, 0, EdgeType::Road, Direction::South),
    (4, 0, EdgeType::Rail, Direction::South),
    (6, 0, EdgeType::Road, Direction::South),
    (8, 2, EdgeType::Rail, Direction::West),
    (8, 4, EdgeType::Road, Direction::West),
    (8, 6, EdgeType::Rail, Direction::West),
    (6, 8, EdgeType::Road, Direction::North),
    (4, 8, EdgeType::Rail, Direction::North),
    (2, 8, EdgeType::Road, Direction::North),
    (0, 6, EdgeType::Rail, Direction::East),
    (0, 4, EdgeType::Road, Direction::East),
    (0, 2, EdgeType::Rail, Direction::East),
];

/// A fixed-size 2D grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRepo {
    /// Playable interior side length.
    size: usize,
    /// Full grid side length including the border ring.
    grid: usize,
    cells: Vec<Cell>,
}

impl CellRepo {
    /// Creates an empty standard-size grid (no tiles placed).
    pub fn new() -> CellRepo {
        CellRepo::with_size(BOARD_SIZE)
    }

    /// Creates an empty grid with a playable interior of `size` x `size`
    /// cells, surrounded by a one-cell border ring.
    ///
    /// The center region is the central 3x3 block of the interior; grids
    /// smaller than 3x3 have no center cells.
    pub fn with_size(size: usize) -> CellRepo {
        let grid = size + 2;
        let mid = (grid / 2) as i8;
        let mut cells = Vec::with_capacity(grid * grid);
        for y in 0..grid {
            for x in 0..grid {
                let border = x == 0 || y == 0 || x == grid - 1 || y == grid - 1;
                let (x, y) = (x as i8, y as i8);
                let center = size >= 3
                    && !border
                    && (x - mid).abs() <= 1
                    && (y - mid).abs() <= 1;
                cells.push(Cell {
                    coord: Coord::new(x, y),
                    border,
                    center,
                    tile: None,
                });
            }
        }
        CellRepo { size, grid, cells }
    }

    /// Creates a standard-size grid with the twelve exit tiles placed on
    /// the border ring, each a straight segment facing the interior.
    pub fn with_border_exits() -> CellRepo {
        let mut repo = CellRepo::new();
        for (x, y, edge_type, facing) in BORDER_EXITS {
            let _placed = repo.place(x as i32, y as i32, Tile::straight(edge_type, facing));
            debug_assert!(_placed);
        }
        repo
    }

    /// Returns the playable interior side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the full grid side length including the border ring.
    pub fn grid_size(&self) -> usize {
        self.grid
    }

    /// Looks up the cell at the given coordinates.
    ///
    /// Out-of-grid coordinates resolve to a shared border sentinel, so the
    /// result is always a well-defined cell.
    pub fn at(&self, x: i32, y: i32) -> &Cell {
        if x < 0 || y < 0 || x >= self.grid as i32 || y >= self.grid as i32 {
            return &BORDER_SENTINEL;
        }
        &self.cells[y as usize * self.grid + x as usize]
    }

    /// Looks up the cell at a coordinate pair.
    pub fn get(&self, coord: Coord) -> &Cell {
        self.at(coord.x as i32, coord.y as i32)
    }

    /// Returns the neighbor of `coord` in the given direction.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> &Cell {
        self.get(coord.step(direction))
    }

    /// Places a tile on an empty cell. Returns false if the cell is
    /// occupied or the coordinates are off-grid.
    pub fn place(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        if x < 0 || y < 0 || x >= self.grid as i32 || y >= self.grid as i32 {
            return false;
        }
        let idx = y as usize * self.grid + x as usize;
        if self.cells[idx].tile.is_some() {
            return false;
        }
        self.cells[idx].tile = Some(tile);
        true
    }

    /// Removes and returns the tile at the given coordinates, if any.
    pub fn clear(&mut self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 || x >= self.grid as i32 || y >= self.grid as i32 {
            return None;
        }
        let idx = y as usize * self.grid + x as usize;
        self.cells[idx].tile.take()
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl Default for CellRepo {
    fn default() -> Self {
        CellRepo::new()
    }
}
