//! Discrete simulation step
//!
//! Applies one input to a state. The core has no clock: a host decides when
//! to send `Input::Tick`.

use rand::Rng;

use crate::collision::{check_win, collect_pellet, resolve_collisions};
use crate::components::Direction;
use crate::ghost::choose_direction;
use crate::level::Layout;
use crate::motion::{can_move, step as step_from};
use crate::state::{GameEvent, GameState, Status};

/// One event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Advance the simulation by one step
    Tick,
    /// Queue a heading; also starts or restarts the run
    Turn(Direction),
    /// Start from `Ready`, or restart after a finished run
    Start,
}

/// Pure form of [`apply`]: returns the successor state and leaves `state` untouched.
pub fn step<R: Rng + ?Sized>(
    layout: &Layout,
    state: &GameState,
    input: Input,
    rng: &mut R,
) -> GameState {
    let mut next = state.clone();
    apply(layout, &mut next, input, rng);
    next
}

/// Apply `input` to `state` in place.
///
/// `events` is replaced only by a tick or a (re)start, so turns sent between
/// ticks leave the previous tick's events readable.
pub fn apply<R: Rng + ?Sized>(layout: &Layout, state: &mut GameState, input: Input, rng: &mut R) {
    match (state.status, input) {
        (Status::Running, Input::Tick) => advance(layout, state, rng),
        (Status::Running, Input::Turn(dir)) => state.queued = Some(dir),
        (Status::Running, Input::Start) => {}
        (Status::Ready, Input::Tick) => {}
        (Status::Ready, Input::Start) => start(state),
        (Status::Ready, Input::Turn(dir)) => {
            start(state);
            state.queued = Some(dir);
        }
        (Status::Won | Status::GameOver, Input::Tick) => {}
        (Status::Won | Status::GameOver, Input::Start) => {
            *state = GameState::new(layout);
            start(state);
        }
        (Status::Won | Status::GameOver, Input::Turn(dir)) => {
            *state = GameState::new(layout);
            start(state);
            state.direction = dir;
            state.queued = Some(dir);
        }
    }
}

fn start(state: &mut GameState) {
    state.events.clear();
    state.status = Status::Running;
    state.message = String::from("Eat every pellet!");
    state.events.push(GameEvent::Started);
    log::info!("run started");
}

fn advance<R: Rng + ?Sized>(layout: &Layout, state: &mut GameState, rng: &mut R) {
    state.events.clear();
    state.ticks += 1;

    if state.power_ticks > 0 {
        state.power_ticks -= 1;
        if state.power_ticks == 0 {
            state.message = String::from("Power mode ended");
            state.events.push(GameEvent::PowerExpired);
        }
    }

    move_player(layout, state);

    collect_pellet(state);
    if resolve_collisions(state) || check_win(state) {
        return;
    }

    let target = state.player;
    let evading = state.power_active();
    for ghost in &mut state.ghosts {
        let dir = choose_direction(layout, ghost, target, evading, rng);
        ghost.direction = dir;
        if can_move(layout, ghost.position, dir) {
            ghost.position = step_from(layout, ghost.position, dir);
        }
    }

    if resolve_collisions(state) {
        return;
    }
    check_win(state);

    log::debug!(
        "tick {}: player {:?} score {} lives {} power {}",
        state.ticks,
        state.player,
        state.score,
        state.lives,
        state.power_ticks
    );
}

/// The queued heading wins when legal; otherwise keep going straight if possible.
fn move_player(layout: &Layout, state: &mut GameState) {
    if let Some(queued) = state.queued {
        if can_move(layout, state.player, queued) {
            state.direction = queued;
            state.queued = None;
            state.player = step_from(layout, state.player, queued);
            return;
        }
    }
    if can_move(layout, state.player, state.direction) {
        state.player = step_from(layout, state.player, state.direction);
    }
}
