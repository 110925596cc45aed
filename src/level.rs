use std::collections::BTreeMap;
use std::str::FromStr;

use thiserror::Error;

use crate::components::{PelletKind, Position};

/// Built-in board: four ghosts in a central pen, power pellets in the corners.
pub const DEFAULT_LAYOUT: &str = "\
#####################
#o........#........o#
#.###.###.#.###.###.#
#...................#
#.###.#.#####.#.###.#
#.....#...#...#.....#
#####.### # ###.#####
#####.#  G G  #.#####
#####.# #G G# #.#####
#####.#########.#####
#.........P.........#
#.###.#.#####.#.###.#
#o..#...........#..o#
#...................#
#####################
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Pellet,
    PowerPellet,
}

impl Tile {
    pub fn is_passable(self) -> bool {
        self != Tile::Wall
    }

    pub fn pellet(self) -> Option<PelletKind> {
        match self {
            Tile::Pellet => Some(PelletKind::Normal),
            Tile::PowerPellet => Some(PelletKind::Power),
            Tile::Wall | Tile::Open => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {found:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, found: char },
    #[error("layout has no player spawn ('P')")]
    MissingPlayerSpawn,
    #[error("second player spawn at row {row}, column {col}")]
    DuplicatePlayerSpawn { row: usize, col: usize },
}

/// Immutable maze description.
///
/// Cells outside the grid read as walls, so callers never need bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    player_spawn: Position,
    ghost_spawns: Vec<Position>,
}

impl Layout {
    /// Parse a text grid.
    ///
    /// `#` wall, space open, `.` pellet, `o` power pellet, `P` player spawn,
    /// `G` ghost spawn. Spawn markers are open cells.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text.lines().collect();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut player_spawn = None;
        let mut ghost_spawns = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Wall,
                    ' ' => Tile::Open,
                    '.' => Tile::Pellet,
                    'o' => Tile::PowerPellet,
                    'P' => {
                        if player_spawn.is_some() {
                            return Err(LayoutError::DuplicatePlayerSpawn { row, col });
                        }
                        player_spawn = Some(Position::new(col, row));
                        Tile::Open
                    }
                    'G' => {
                        ghost_spawns.push(Position::new(col, row));
                        Tile::Open
                    }
                    found => return Err(LayoutError::UnknownTile { row, col, found }),
                };
                tiles.push(tile);
            }
        }

        let player_spawn = player_spawn.ok_or(LayoutError::MissingPlayerSpawn)?;
        log::debug!(
            "parsed {}x{} layout with {} ghost spawns",
            width,
            rows.len(),
            ghost_spawns.len()
        );

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
            player_spawn,
            ghost_spawns,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, pos: Position) -> Tile {
        if pos.col >= self.width || pos.row >= self.height {
            return Tile::Wall;
        }
        self.tiles[pos.row * self.width + pos.col]
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.tile(pos).is_passable()
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        !self.is_open(pos)
    }

    /// Resource originally placed at `pos`, regardless of whether it was eaten since.
    pub fn pellet_at(&self, pos: Position) -> Option<PelletKind> {
        self.tile(pos).pellet()
    }

    /// The full resource set a run starts with.
    pub fn pellets(&self) -> BTreeMap<Position, PelletKind> {
        self.positions()
            .filter_map(|pos| self.pellet_at(pos).map(|kind| (pos, kind)))
            .collect()
    }

    pub fn player_spawn(&self) -> Position {
        self.player_spawn
    }

    pub fn ghost_spawns(&self) -> &[Position] {
        &self.ghost_spawns
    }

    /// Every coordinate on the grid in reading order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(col, row)))
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_parses() {
        let layout = Layout::parse(DEFAULT_LAYOUT).unwrap();
        assert_eq!(layout.width(), 21);
        assert_eq!(layout.height(), 15);
        assert_eq!(layout.player_spawn(), Position::new(10, 10));
        assert_eq!(layout.ghost_spawns().len(), 4);
        assert_eq!(
            layout
                .pellets()
                .values()
                .filter(|k| **k == PelletKind::Power)
                .count(),
            4
        );
    }

    #[test]
    fn outside_bounds_is_wall() {
        let layout = Layout::parse("P.\n..").unwrap();
        assert!(layout.is_open(Position::new(1, 1)));
        assert!(layout.is_wall(Position::new(2, 0)));
        assert!(layout.is_wall(Position::new(0, 2)));
        assert_eq!(layout.tile(Position::new(99, 99)), Tile::Wall);
    }

    #[test]
    fn spawn_markers_are_open_without_pellets() {
        let layout = Layout::parse("#####\n#PGo#\n#####").unwrap();
        assert_eq!(layout.tile(Position::new(1, 1)), Tile::Open);
        assert_eq!(layout.tile(Position::new(2, 1)), Tile::Open);
        assert_eq!(layout.ghost_spawns(), &[Position::new(2, 1)]);
        assert_eq!(layout.pellet_at(Position::new(3, 1)), Some(PelletKind::Power));
        assert_eq!(layout.pellets().len(), 1);
    }

    #[test]
    fn crlf_and_trailing_newline_accepted() {
        let layout = Layout::parse("#P.#\r\n#..#\r\n").unwrap();
        assert_eq!(layout.height(), 2);
        assert_eq!(layout.width(), 4);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Layout::parse("#P#\n##\n###").unwrap_err();
        assert_eq!(
            err,
            LayoutError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Layout::parse("").unwrap_err(), LayoutError::Empty);
        assert_eq!(Layout::parse("\n").unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn unknown_tile_rejected() {
        let err = Layout::parse("#P#\n#x#").unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownTile {
                row: 1,
                col: 1,
                found: 'x'
            }
        );
    }

    #[test]
    fn player_spawn_must_be_unique() {
        assert_eq!(
            Layout::parse("#..#").unwrap_err(),
            LayoutError::MissingPlayerSpawn
        );
        assert_eq!(
            Layout::parse("#PP#").unwrap_err(),
            LayoutError::DuplicatePlayerSpawn { row: 0, col: 2 }
        );
    }
}
