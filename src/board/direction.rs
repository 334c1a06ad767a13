//! Compass directions and direction sets.
//!
//! The four directions index the edges of a tile and drive all neighbor
//! lookups. Per-edge internal wiring (`connects`) is represented as a
//! `DirectionSet` bitset for cheap containment checks.

/// The number of compass directions (and of edges on a tile).
pub const DIRECTION_COUNT: usize = 4;

/// A compass direction.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// All direction variants in index order.
pub const ALL_DIRECTIONS: [Direction; DIRECTION_COUNT] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Coordinate offset per direction, indexed by `Direction as usize`.
/// North decreases y, matching a row-major grid with row 0 on top.
pub const VECTORS: [(i8, i8); DIRECTION_COUNT] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Direction {
    /// Returns the coordinate offset `(dx, dy)` for this direction.
    pub const fn vector(self) -> (i8, i8) {
        VECTORS[self as usize]
    }

    /// Returns the opposite direction (the matching edge on a neighbor).
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the direction `quarter_turns` clockwise steps from this one.
    pub const fn rotated(self, quarter_turns: u8) -> Direction {
        Self::from_index((self as usize + quarter_turns as usize) % DIRECTION_COUNT)
    }

    /// Returns the direction with the given index (modulo the count).
    pub const fn from_index(index: usize) -> Direction {
        match index % DIRECTION_COUNT {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }
}

/// A set of directions packed into a u8 bitmask (bit i = direction i).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

/// Mask covering all four direction bits.
const FULL_MASK: u8 = (1 << DIRECTION_COUNT) - 1;

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: DirectionSet = DirectionSet(0);

    /// The set of all four directions.
    pub const FULL: DirectionSet = DirectionSet(FULL_MASK);

    /// Returns the set containing every direction except the given one.
    pub const fn all_except(direction: Direction) -> DirectionSet {
        DirectionSet(FULL_MASK & !(1 << direction as u8))
    }

    /// Returns a copy of this set with the given direction added.
    pub const fn with(self, direction: Direction) -> DirectionSet {
        DirectionSet(self.0 | (1 << direction as u8))
    }

    /// Returns true if the set contains the given direction.
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction as u8) != 0
    }

    /// Returns true if the set contains no directions.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw bitmask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from a raw bitmask, masking off unused high bits.
    pub const fn from_bits(bits: u8) -> DirectionSet {
        DirectionSet(bits & FULL_MASK)
    }

    /// Returns a copy of this set with every member rotated clockwise.
    pub const fn rotated(self, quarter_turns: u8) -> DirectionSet {
        let shift = (quarter_turns % DIRECTION_COUNT as u8) as u32;
        let doubled = (self.0 as u16) << shift;
        DirectionSet(((doubled | (doubled >> DIRECTION_COUNT)) as u8) & FULL_MASK)
    }

    /// Iterates over the member directions in index order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        ALL_DIRECTIONS.into_iter().filter(move |d| self.contains(*d))
    }
}
