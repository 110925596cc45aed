//! Pellet pickup, player/ghost collisions and the win check
//!
//! `resolve_collisions` and `check_win` return `true` when they moved the run
//! into a terminal status, so the tick driver can stop early. Pickup never ends
//! a run on its own.

use crate::components::PelletKind;
use crate::consts::{GHOST_POINTS, POWER_DURATION_TICKS};
use crate::state::{GameEvent, GameState, Status};

/// Eat the pellet under the player, if any.
pub fn collect_pellet(state: &mut GameState) {
    let at = state.player;
    let Some(kind) = state.pellets.remove(&at) else {
        return;
    };
    state.score += kind.points();
    match kind {
        PelletKind::Normal => state.events.push(GameEvent::PelletEaten { at }),
        PelletKind::Power => {
            state.power_ticks = POWER_DURATION_TICKS;
            state.message = String::from("Power mode! Hunt the ghosts");
            state.events.push(GameEvent::PowerPelletEaten { at });
        }
    }
}

/// Resolve every ghost sharing the player's cell.
///
/// In power mode each such ghost is sent home for a bonus. Otherwise the
/// player loses one life no matter how many ghosts overlap, and either the
/// run ends or everyone returns to their spawn.
pub fn resolve_collisions(state: &mut GameState) -> bool {
    let player = state.player;
    if !state.ghosts.iter().any(|g| g.position == player) {
        return false;
    }

    if state.power_active() {
        for ghost in state.ghosts.iter_mut().filter(|g| g.position == player) {
            ghost.respawn();
            state.score += GHOST_POINTS;
            state.events.push(GameEvent::GhostEaten { ghost: ghost.id });
            log::debug!("ghost {} eaten at {:?}", ghost.id, player);
        }
        state.message = format!("Ghost eaten! +{GHOST_POINTS}");
        return false;
    }

    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.status = Status::GameOver;
        state.message = format!("Game over! Final score: {}", state.score);
        state.events.push(GameEvent::GameOver);
        log::info!("game over with score {}", state.score);
        return true;
    }

    state.reset_positions();
    state.message = match state.lives {
        1 => String::from("Caught! Last life"),
        n => format!("Caught! {n} lives left"),
    };
    log::info!("life lost, {} remaining", state.lives);
    false
}

/// Finish the run once no pellets remain.
pub fn check_win(state: &mut GameState) -> bool {
    if !state.pellets.is_empty() {
        return false;
    }
    state.status = Status::Won;
    state.message = format!("Maze cleared! Final score: {}", state.score);
    state.events.push(GameEvent::Won);
    log::info!("maze cleared with score {}", state.score);
    true
}
