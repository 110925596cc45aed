//! Simulation state and the snapshot handed to hosts
//!
//! `GameState` is the only thing a tick mutates; everything it needs to be
//! replayed, other than the layout and the RNG, lives here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::{Direction, Ghost, GhostKind, PelletKind, Position};
use crate::consts::{PLAYER_START_DIRECTION, STARTING_LIVES};
use crate::level::Layout;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the first input; ticks are ignored
    Ready,
    Running,
    /// Every pellet eaten
    Won,
    /// Out of lives
    GameOver,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::GameOver)
    }
}

/// Something notable that happened while applying one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    PelletEaten { at: Position },
    PowerPelletEaten { at: Position },
    PowerExpired,
    GhostEaten { ghost: u32 },
    LifeLost { lives_left: u8 },
    Won,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub status: Status,
    pub player: Position,
    pub player_spawn: Position,
    pub direction: Direction,
    /// Heading requested by the player, applied as soon as it is legal
    pub queued: Option<Direction>,
    /// Ghosts in stable id order
    pub ghosts: Vec<Ghost>,
    /// Uncollected pellets
    pub pellets: BTreeMap<Position, PelletKind>,
    pub score: u32,
    pub lives: u8,
    /// Ticks of power mode left (0 = inactive)
    pub power_ticks: u32,
    pub message: String,
    /// Ticks applied while running
    pub ticks: u64,
    /// Events produced by the most recent tick or (re)start
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run at `Ready`: full pellet set, everyone at their spawn.
    pub fn new(layout: &Layout) -> Self {
        let ghosts = layout
            .ghost_spawns()
            .iter()
            .enumerate()
            .map(|(id, spawn)| Ghost::new(id as u32, *spawn))
            .collect();

        Self {
            status: Status::Ready,
            player: layout.player_spawn(),
            player_spawn: layout.player_spawn(),
            direction: PLAYER_START_DIRECTION,
            queued: None,
            ghosts,
            pellets: layout.pellets(),
            score: 0,
            lives: STARTING_LIVES,
            power_ticks: 0,
            message: String::from("Press an arrow key to start"),
            ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn power_active(&self) -> bool {
        self.power_ticks > 0
    }

    /// Put the player and every ghost back on their spawns and end power mode.
    pub fn reset_positions(&mut self) {
        self.player = self.player_spawn;
        self.direction = PLAYER_START_DIRECTION;
        self.queued = None;
        for ghost in &mut self.ghosts {
            ghost.respawn();
        }
        self.power_ticks = 0;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            player: self.player,
            direction: self.direction,
            ghosts: self
                .ghosts
                .iter()
                .map(|g| GhostView {
                    id: g.id,
                    kind: g.kind,
                    position: g.position,
                    direction: g.direction,
                })
                .collect(),
            pellets: self.pellets.iter().map(|(p, k)| (*p, *k)).collect(),
            score: self.score,
            lives: self.lives,
            power_ticks: self.power_ticks,
            message: self.message.clone(),
            ticks: self.ticks,
            events: self.events.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostView {
    pub id: u32,
    pub kind: GhostKind,
    pub position: Position,
    pub direction: Direction,
}

/// Read-only view of a state, for renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: Status,
    pub player: Position,
    pub direction: Direction,
    pub ghosts: Vec<GhostView>,
    /// Remaining pellets in reading order
    pub pellets: Vec<(Position, PelletKind)>,
    pub score: u32,
    pub lives: u8,
    pub power_ticks: u32,
    pub message: String,
    pub ticks: u64,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn pellet_at(&self, pos: Position) -> Option<PelletKind> {
        self.pellets
            .binary_search_by(|(p, _)| p.cmp(&pos))
            .ok()
            .map(|idx| self.pellets[idx].1)
    }

    pub fn ghost_at(&self, pos: Position) -> Option<&GhostView> {
        self.ghosts.iter().find(|g| g.position == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::DEFAULT_LAYOUT;

    #[test]
    fn new_state_starts_ready_at_spawns() {
        let layout = Layout::parse(DEFAULT_LAYOUT).unwrap();
        let state = GameState::new(&layout);
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.player, layout.player_spawn());
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.pellets, layout.pellets());
        let spawns: Vec<Position> = state.ghosts.iter().map(|g| g.position).collect();
        assert_eq!(spawns, layout.ghost_spawns());
        let ids: Vec<u32> = state.ghosts.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reset_positions_restores_spawns() {
        let layout = Layout::parse("######\n#P.G.#\n######").unwrap();
        let mut state = GameState::new(&layout);
        state.player = Position::new(2, 1);
        state.direction = Direction::Right;
        state.queued = Some(Direction::Left);
        state.ghosts[0].position = Position::new(4, 1);
        state.power_ticks = 12;

        state.reset_positions();

        assert_eq!(state.player, Position::new(1, 1));
        assert_eq!(state.direction, PLAYER_START_DIRECTION);
        assert_eq!(state.queued, None);
        assert_eq!(state.ghosts[0].position, Position::new(3, 1));
        assert_eq!(state.power_ticks, 0);
    }

    #[test]
    fn snapshot_lookups() {
        let layout = Layout::parse("######\n#P.Go#\n######").unwrap();
        let snapshot = GameState::new(&layout).snapshot();
        assert_eq!(snapshot.pellet_at(Position::new(2, 1)), Some(PelletKind::Normal));
        assert_eq!(snapshot.pellet_at(Position::new(4, 1)), Some(PelletKind::Power));
        assert_eq!(snapshot.pellet_at(Position::new(1, 1)), None);
        assert_eq!(snapshot.ghost_at(Position::new(3, 1)).map(|g| g.id), Some(0));
    }
}
