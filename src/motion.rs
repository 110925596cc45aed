//! Wall-constrained movement on the layout grid.

use crate::components::{Direction, Position};
use crate::level::Layout;

/// The coordinate one cell away, or `None` when it would go below zero.
pub fn neighbour(pos: Position, dir: Direction) -> Option<Position> {
    let (dx, dy) = dir.delta();
    let col = pos.col.checked_add_signed(dx)?;
    let row = pos.row.checked_add_signed(dy)?;
    Some(Position::new(col, row))
}

pub fn can_move(layout: &Layout, pos: Position, dir: Direction) -> bool {
    neighbour(pos, dir).is_some_and(|next| layout.is_open(next))
}

/// Step one cell in `dir`. A blocked step leaves the position unchanged.
pub fn step(layout: &Layout, pos: Position, dir: Direction) -> Position {
    match neighbour(pos, dir) {
        Some(next) if layout.is_open(next) => next,
        _ => pos,
    }
}

/// Directions that lead to an open neighbour, in `Direction::ALL` order.
pub fn open_directions(layout: &Layout, pos: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|dir| can_move(layout, pos, *dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Layout {
        Layout::parse("#####\n#P..#\n#####").unwrap()
    }

    #[test]
    fn steps_into_open_cells() {
        let layout = corridor();
        let start = Position::new(1, 1);
        assert!(can_move(&layout, start, Direction::Right));
        assert_eq!(step(&layout, start, Direction::Right), Position::new(2, 1));
    }

    #[test]
    fn blocked_step_is_a_no_op() {
        let layout = corridor();
        let start = Position::new(1, 1);
        for dir in [Direction::Up, Direction::Down, Direction::Left] {
            assert!(!can_move(&layout, start, dir));
            assert_eq!(step(&layout, start, dir), start);
        }
    }

    #[test]
    fn grid_edge_counts_as_wall() {
        let layout = Layout::parse("P.\n..").unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(neighbour(origin, Direction::Up), None);
        assert!(!can_move(&layout, origin, Direction::Left));
        assert!(!can_move(&layout, Position::new(1, 1), Direction::Right));
        assert!(!can_move(&layout, Position::new(1, 1), Direction::Down));
    }

    #[test]
    fn open_directions_in_fixed_order() {
        let layout = Layout::parse("#.#\n.P.\n#.#").unwrap();
        assert_eq!(open_directions(&layout, Position::new(1, 1)), Direction::ALL.to_vec());
        assert_eq!(
            open_directions(&layout, Position::new(1, 0)),
            vec![Direction::Down]
        );
    }
}
