use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::components::Direction;
use crate::level::Layout;
use crate::state::{GameState, Snapshot, Status};
use crate::tick::{apply, Input};

/// Owns a layout, the current run and the seeded tie-break RNG.
///
/// All mutation goes through `&mut self`, one input at a time, so a tick is
/// never observed half-applied.
#[derive(Debug, Clone)]
pub struct Game {
    layout: Layout,
    state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl Game {
    pub fn new(layout: Layout, seed: u64) -> Self {
        let state = GameState::new(&layout);
        Self {
            layout,
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn apply(&mut self, input: Input) -> &GameState {
        apply(&self.layout, &mut self.state, input, &mut self.rng);
        &self.state
    }

    pub fn tick(&mut self) -> &GameState {
        self.apply(Input::Tick)
    }

    pub fn turn(&mut self, dir: Direction) -> &GameState {
        self.apply(Input::Turn(dir))
    }

    pub fn start(&mut self) -> &GameState {
        self.apply(Input::Start)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::DEFAULT_LAYOUT;

    fn play(seed: u64) -> Vec<Snapshot> {
        let layout = Layout::parse(DEFAULT_LAYOUT).unwrap();
        let mut game = Game::new(layout, seed);
        let script = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ];
        let mut snapshots = Vec::new();
        for i in 0..200 {
            if i % 25 == 0 {
                game.turn(script[(i / 25) % script.len()]);
            }
            game.tick();
            snapshots.push(game.snapshot());
        }
        snapshots
    }

    #[test]
    fn same_seed_replays_identically() {
        assert_eq!(play(99), play(99));
    }

    #[test]
    fn game_starts_on_first_turn() {
        let layout = Layout::parse(DEFAULT_LAYOUT).unwrap();
        let mut game = Game::new(layout, 1);
        assert_eq!(game.status(), Status::Ready);
        game.tick();
        assert_eq!(game.status(), Status::Ready);
        game.turn(Direction::Left);
        assert_eq!(game.status(), Status::Running);
        game.tick();
        assert_eq!(game.state().ticks, 1);
        assert_eq!(game.seed(), 1);
    }
}
