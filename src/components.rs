use serde::{Deserialize, Serialize};

/// A cell coordinate on the maze grid.
///
/// Ordering is row-major so that sets of positions iterate in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed enumeration order used wherever candidates are scanned.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PelletKind {
    Normal,
    Power,
}

impl PelletKind {
    pub fn points(self) -> u32 {
        match self {
            PelletKind::Normal => crate::consts::PELLET_POINTS,
            PelletKind::Power => crate::consts::POWER_PELLET_POINTS,
        }
    }
}

/// Cosmetic identity of a ghost. Has no influence on its behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostKind {
    /// Kinds are handed out in spawn order and wrap after four ghosts.
    pub fn for_index(index: usize) -> GhostKind {
        match index % 4 {
            0 => GhostKind::Blinky,
            1 => GhostKind::Pinky,
            2 => GhostKind::Inky,
            _ => GhostKind::Clyde,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost {
    pub id: u32,
    pub kind: GhostKind,
    pub position: Position,
    pub spawn: Position,
    pub direction: Direction,
}

impl Ghost {
    pub fn new(id: u32, spawn: Position) -> Self {
        Self {
            id,
            kind: GhostKind::for_index(id as usize),
            position: spawn,
            spawn,
            direction: crate::consts::GHOST_START_DIRECTION,
        }
    }

    /// Send the ghost back to its spawn cell with the default heading.
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.direction = crate::consts::GHOST_START_DIRECTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn manhattan_sums_both_axes() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn positions_order_by_row_first() {
        assert!(Position::new(9, 0) < Position::new(0, 1));
        assert!(Position::new(0, 1) < Position::new(1, 1));
    }

    #[test]
    fn respawn_resets_position_and_heading() {
        let mut ghost = Ghost::new(2, Position::new(3, 3));
        ghost.position = Position::new(5, 1);
        ghost.direction = Direction::Right;
        ghost.respawn();
        assert_eq!(ghost.position, Position::new(3, 3));
        assert_eq!(ghost.direction, crate::consts::GHOST_START_DIRECTION);
        assert_eq!(ghost.kind, GhostKind::Inky);
    }
}
