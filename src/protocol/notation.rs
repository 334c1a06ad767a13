//! Board notation encoding and decoding.
//!
//! A compact single-line text form for a full board snapshot, used by the
//! TSI `board` command and by tests. An empty board is `-`; otherwise the
//! board is a comma-separated list of placements. Each placement is two
//! coordinate digits followed by four edge characters in N, E, S, W order
//! (`-` none, `r` road, `t` rail, `l` lake, `f` forest), optionally
//! followed by `:` and four hex digits giving each edge's wiring bitmask
//! (bit 0 = north .. bit 3 = west). A placement without a wiring suffix is
//! fully wired: every edge connects to the three other directions.
//!
//! Examples: `44r-r-` is a straight north-south road at (4, 4);
//! `44rtrt:4812` is an overpass whose road and rail axes stay separate.

use thiserror::Error;

use crate::board::direction::{DirectionSet, ALL_DIRECTIONS, DIRECTION_COUNT};
use crate::board::edge::{Edge, EdgeType};
use crate::board::repo::CellRepo;
use crate::board::tile::Tile;

/// Errors that can occur when parsing board notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("placement entry too short: '{0}'")]
    EntryTooShort(String),

    #[error("invalid coordinate character: '{0}'")]
    InvalidCoordinate(char),

    #[error("coordinate out of range: ({0}, {1})")]
    CoordinateOutOfRange(u8, u8),

    #[error("invalid edge character: '{0}'")]
    InvalidEdge(char),

    #[error("wiring suffix must be 4 hex digits: '{0}'")]
    MalformedWiring(String),

    #[error("invalid wiring digit: '{0}'")]
    InvalidWiringDigit(char),

    #[error("wiring for an edge includes its own direction: '{0}'")]
    SelfReferentialWiring(String),

    #[error("duplicate placement at ({0}, {1})")]
    DuplicatePlacement(u8, u8),
}

/// Parses a coordinate digit. Range checking happens in the caller once
/// both digits of the pair are known.
fn parse_coordinate(c: char) -> Result<u8, NotationError> {
    c.to_digit(10)
        .map(|d| d as u8)
        .ok_or(NotationError::InvalidCoordinate(c))
}

/// Parses one placement entry like `44r-r-` or `44rtrt:4812`.
fn parse_placement(entry: &str, grid: usize) -> Result<(u8, u8, Tile), NotationError> {
    let chars: Vec<char> = entry.chars().collect();
    if chars.len() < 2 + DIRECTION_COUNT {
        return Err(NotationError::EntryTooShort(entry.to_string()));
    }

    let x = parse_coordinate(chars[0])?;
    let y = parse_coordinate(chars[1])?;
    if x as usize >= grid || y as usize >= grid {
        return Err(NotationError::CoordinateOutOfRange(x, y));
    }

    let mut edges = [Edge::NONE; DIRECTION_COUNT];
    for (i, direction) in ALL_DIRECTIONS.into_iter().enumerate() {
        let c = chars[2 + i];
        let edge_type =
            EdgeType::from_notation_char(c).ok_or(NotationError::InvalidEdge(c))?;
        edges[i] = Edge::open(edge_type, direction);
    }

    let body_len = 2 + DIRECTION_COUNT;
    if chars.len() > body_len {
        if chars[body_len] != ':' || chars.len() != body_len + 1 + DIRECTION_COUNT {
            return Err(NotationError::MalformedWiring(entry.to_string()));
        }
        for (i, direction) in ALL_DIRECTIONS.into_iter().enumerate() {
            let c = chars[body_len + 1 + i];
            let bits = c
                .to_digit(16)
                .ok_or(NotationError::InvalidWiringDigit(c))? as u8;
            let connects = DirectionSet::from_bits(bits);
            if connects.contains(direction) {
                return Err(NotationError::SelfReferentialWiring(entry.to_string()));
            }
            edges[i].connects = connects;
        }
    }

    Ok((x, y, Tile::new(edges)))
}

/// Parses a board notation string into a cell repository.
///
/// Parsing starts from an empty standard-size grid; border exits are
/// ordinary placements in the notation, so any border arrangement is
/// expressible.
pub fn parse_board(s: &str) -> Result<CellRepo, NotationError> {
    let s = s.trim();
    let mut repo = CellRepo::new();
    if s == "-" || s.is_empty() {
        return Ok(repo);
    }

    for entry in s.split(',') {
        let (x, y, tile) = parse_placement(entry, repo.grid_size())?;
        if !repo.place(x as i32, y as i32, tile) {
            return Err(NotationError::DuplicatePlacement(x, y));
        }
    }

    Ok(repo)
}

/// Encodes one tile as its placement entry.
fn encode_placement(x: i8, y: i8, tile: &Tile) -> String {
    let mut entry = String::with_capacity(2 + 2 * DIRECTION_COUNT + 1);
    entry.push(char::from_digit(x as u32, 10).expect("coordinate fits a digit"));
    entry.push(char::from_digit(y as u32, 10).expect("coordinate fits a digit"));

    let mut fully_wired = true;
    for direction in ALL_DIRECTIONS {
        let edge = tile.edge(direction);
        entry.push(edge.edge_type.notation_char());
        if edge.connects != DirectionSet::all_except(direction) {
            fully_wired = false;
        }
    }

    if !fully_wired {
        entry.push(':');
        for direction in ALL_DIRECTIONS {
            let bits = tile.edge(direction).connects.bits();
            entry.push(char::from_digit(bits as u32, 16).expect("wiring fits a hex digit"));
        }
    }

    entry
}

/// Encodes a board as its canonical notation: placements in row-major
/// order, wiring suffixes only where a tile is not fully wired.
pub fn encode_board(cells: &CellRepo) -> String {
    let placements: Vec<String> = cells
        .iter()
        .filter_map(|cell| {
            cell.tile
                .as_ref()
                .map(|tile| encode_placement(cell.coord.x, cell.coord.y, tile))
        })
        .collect();

    if placements.is_empty() {
        "-".to_string()
    } else {
        placements.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::direction::Direction;

    #[test]
    fn empty_board_roundtrip() {
        let repo = parse_board("-").unwrap();
        assert!(repo.iter().all(|c| c.tile.is_none()));
        assert_eq!(encode_board(&repo), "-");
    }

    #[test]
    fn straight_road_roundtrip() {
        let mut expected = CellRepo::new();
        expected.place(4, 4, Tile::straight(EdgeType::Road, Direction::North));
        let notation = encode_board(&expected);
        assert_eq!(notation, "44r-r-:4010");
        assert_eq!(parse_board(&notation).unwrap(), expected);
    }

    #[test]
    fn fully_wired_tile_omits_wiring_suffix() {
        let mut repo = CellRepo::new();
        repo.place(3, 5, Tile::uniform(EdgeType::Lake));
        let notation = encode_board(&repo);
        assert_eq!(notation, "35llll");
        assert_eq!(parse_board(&notation).unwrap(), repo);
    }

    #[test]
    fn default_wiring_is_fully_connected() {
        let repo = parse_board("21rt-f").unwrap();
        let tile = repo.at(2, 1).tile.unwrap();
        for d in ALL_DIRECTIONS {
            assert_eq!(tile.edge(d).connects, DirectionSet::all_except(d));
        }
        assert_eq!(tile.edge(Direction::North).edge_type, EdgeType::Road);
        assert_eq!(tile.edge(Direction::East).edge_type, EdgeType::Rail);
        assert_eq!(tile.edge(Direction::South).edge_type, EdgeType::None);
        assert_eq!(tile.edge(Direction::West).edge_type, EdgeType::Forest);
    }

    #[test]
    fn standard_exits_board_roundtrips() {
        let repo = CellRepo::with_border_exits();
        let notation = encode_board(&repo);
        assert_eq!(parse_board(&notation).unwrap(), repo);
    }

    #[test]
    fn multiple_placements_roundtrip() {
        let mut repo = CellRepo::new();
        repo.place(1, 1, Tile::uniform(EdgeType::Road));
        repo.place(7, 7, Tile::corner(EdgeType::Rail, Direction::South));
        let notation = encode_board(&repo);
        assert_eq!(parse_board(&notation).unwrap(), repo);
    }

    #[test]
    fn rejects_bad_edge_character() {
        assert_eq!(
            parse_board("44x-r-"),
            Err(NotationError::InvalidEdge('x'))
        );
    }

    #[test]
    fn rejects_bad_coordinate() {
        assert_eq!(
            parse_board("4ar-r-"),
            Err(NotationError::InvalidCoordinate('a'))
        );
        assert_eq!(
            parse_board("94r-r-"),
            Err(NotationError::CoordinateOutOfRange(9, 4))
        );
    }

    #[test]
    fn rejects_short_entries() {
        assert_eq!(
            parse_board("44r"),
            Err(NotationError::EntryTooShort("44r".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_wiring() {
        assert_eq!(
            parse_board("44rrrr:12"),
            Err(NotationError::MalformedWiring("44rrrr:12".to_string()))
        );
        assert_eq!(
            parse_board("44rrrr:48x4"),
            Err(NotationError::InvalidWiringDigit('x'))
        );
    }

    #[test]
    fn rejects_self_referential_wiring() {
        // First digit 5 = {north, south}: the north edge wired to itself.
        assert_eq!(
            parse_board("44rrrr:5842"),
            Err(NotationError::SelfReferentialWiring(
                "44rrrr:5842".to_string()
            ))
        );
    }

    #[test]
    fn rejects_duplicate_placements() {
        assert_eq!(
            parse_board("44rrrr,44tttt"),
            Err(NotationError::DuplicatePlacement(4, 4))
        );
    }
}
