//! Tile representation.
//!
//! A tile is an immutable record of four typed, internally wired edges,
//! indexed by direction. Tiles are small `Copy` values; the board layer
//! owns placement and the scoring engine only reads them.

use super::direction::{Direction, DirectionSet, ALL_DIRECTIONS, DIRECTION_COUNT};
use super::edge::{Edge, EdgeType};

/// A placed game piece with one edge per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    edges: [Edge; DIRECTION_COUNT],
}

impl Tile {
    /// Builds a tile from explicit edges in N, E, S, W order.
    pub const fn new(edges: [Edge; DIRECTION_COUNT]) -> Tile {
        Tile { edges }
    }

    /// Returns the edge descriptor for the given direction.
    pub const fn edge(&self, direction: Direction) -> Edge {
        self.edges[direction as usize]
    }

    /// Returns true if any edge has the given type.
    pub fn has_edge(&self, edge_type: EdgeType) -> bool {
        ALL_DIRECTIONS
            .into_iter()
            .any(|d| self.edge(d).edge_type == edge_type)
    }

    /// Builds a tile with every edge of the given type, each wired to the
    /// three other directions.
    pub const fn uniform(edge_type: EdgeType) -> Tile {
        Tile {
            edges: [
                Edge::open(edge_type, Direction::North),
                Edge::open(edge_type, Direction::East),
                Edge::open(edge_type, Direction::South),
                Edge::open(edge_type, Direction::West),
            ],
        }
    }

    /// Builds a straight segment: two opposite edges of the given type,
    /// wired only to each other. `axis` names either end of the segment.
    pub const fn straight(edge_type: EdgeType, axis: Direction) -> Tile {
        let mut edges = [Edge::NONE; DIRECTION_COUNT];
        let a = axis;
        let b = axis.opposite();
        edges[a as usize] = Edge::new(edge_type, DirectionSet::EMPTY.with(b));
        edges[b as usize] = Edge::new(edge_type, DirectionSet::EMPTY.with(a));
        Tile { edges }
    }

    /// Builds a corner segment: edges at `from` and its clockwise neighbor,
    /// wired only to each other.
    pub const fn corner(edge_type: EdgeType, from: Direction) -> Tile {
        let mut edges = [Edge::NONE; DIRECTION_COUNT];
        let a = from;
        let b = from.rotated(1);
        edges[a as usize] = Edge::new(edge_type, DirectionSet::EMPTY.with(b));
        edges[b as usize] = Edge::new(edge_type, DirectionSet::EMPTY.with(a));
        Tile { edges }
    }

    /// Returns this tile rotated clockwise by the given quarter turns.
    ///
    /// Both edge positions and their wiring sets rotate together, so the
    /// tile's internal topology is preserved.
    pub fn rotated(&self, quarter_turns: u8) -> Tile {
        let mut edges = [Edge::NONE; DIRECTION_COUNT];
        for d in ALL_DIRECTIONS {
            let source = self.edge(d);
            let target = d.rotated(quarter_turns);
            edges[target as usize] = Edge {
                edge_type: source.edge_type,
                connects: source.connects.rotated(quarter_turns),
            };
        }
        Tile { edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_tile_is_fully_wired() {
        let tile = Tile::uniform(EdgeType::Road);
        for d in ALL_DIRECTIONS {
            let edge = tile.edge(d);
            assert_eq!(edge.edge_type, EdgeType::Road);
            assert!(!edge.connects.contains(d));
            assert_eq!(edge.connects.iter().count(), 3);
        }
    }

    #[test]
    fn straight_wires_opposite_ends_only() {
        let tile = Tile::straight(EdgeType::Rail, Direction::North);
        assert_eq!(tile.edge(Direction::North).edge_type, EdgeType::Rail);
        assert_eq!(tile.edge(Direction::South).edge_type, EdgeType::Rail);
        assert_eq!(tile.edge(Direction::East).edge_type, EdgeType::None);
        assert_eq!(tile.edge(Direction::West).edge_type, EdgeType::None);
        assert!(tile.edge(Direction::North).connects.contains(Direction::South));
        assert!(!tile.edge(Direction::North).connects.contains(Direction::East));
    }

    #[test]
    fn corner_wires_adjacent_ends() {
        let tile = Tile::corner(EdgeType::Road, Direction::North);
        assert_eq!(tile.edge(Direction::North).edge_type, EdgeType::Road);
        assert_eq!(tile.edge(Direction::East).edge_type, EdgeType::Road);
        assert!(tile.edge(Direction::North).connects.contains(Direction::East));
        assert!(tile.edge(Direction::East).connects.contains(Direction::North));
        assert_eq!(tile.edge(Direction::South).edge_type, EdgeType::None);
    }

    #[test]
    fn rotation_moves_edges_and_wiring() {
        let tile = Tile::straight(EdgeType::Road, Direction::North).rotated(1);
        assert_eq!(tile.edge(Direction::East).edge_type, EdgeType::Road);
        assert_eq!(tile.edge(Direction::West).edge_type, EdgeType::Road);
        assert_eq!(tile.edge(Direction::North).edge_type, EdgeType::None);
        assert!(tile.edge(Direction::East).connects.contains(Direction::West));
    }

    #[test]
    fn full_rotation_is_identity() {
        let tile = Tile::corner(EdgeType::Lake, Direction::West);
        assert_eq!(tile.rotated(4), tile);
    }

    #[test]
    fn has_edge_finds_any_side() {
        let tile = Tile::straight(EdgeType::Rail, Direction::East);
        assert!(tile.has_edge(EdgeType::Rail));
        assert!(tile.has_edge(EdgeType::None));
        assert!(!tile.has_edge(EdgeType::Lake));
    }
}
