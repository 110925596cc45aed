use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{Direction, Ghost, Position};
use crate::level::Layout;
use crate::motion::{open_directions, step};

/// Pick the next heading for `ghost`.
///
/// Pursuing ghosts minimise the Manhattan distance to `target` after one step,
/// evading ghosts maximise it. Reversing is only allowed when it is the sole
/// legal move, and ties are broken uniformly with `rng`. A ghost with no legal
/// move keeps its current direction.
pub fn choose_direction<R: Rng + ?Sized>(
    layout: &Layout,
    ghost: &Ghost,
    target: Position,
    evading: bool,
    rng: &mut R,
) -> Direction {
    let mut candidates = open_directions(layout, ghost.position);
    if candidates.len() > 1 {
        let reverse = ghost.direction.opposite();
        candidates.retain(|dir| *dir != reverse);
    }

    let scored: Vec<(Direction, usize)> = candidates
        .into_iter()
        .map(|dir| (dir, step(layout, ghost.position, dir).manhattan(target)))
        .collect();

    let best = if evading {
        scored.iter().map(|(_, d)| *d).max()
    } else {
        scored.iter().map(|(_, d)| *d).min()
    };
    let Some(best) = best else {
        return ghost.direction;
    };

    let options: Vec<Direction> = scored
        .into_iter()
        .filter(|(_, d)| *d == best)
        .map(|(dir, _)| dir)
        .collect();
    options.choose(rng).copied().unwrap_or(ghost.direction)
}
