//! Maze Pursuit - a deterministic maze-chase simulation
//!
//! Core modules:
//! - `level`: Layout model parsed from a text grid
//! - `motion`: Wall-constrained movement
//! - `ghost`: Ghost direction policy (pursue / evade)
//! - `collision`: Pellet pickup, player/ghost collisions, win check
//! - `tick`: One discrete step of the state machine
//! - `game`: Owner of layout, state and seeded RNG
//!
//! Nothing here renders or schedules; a host feeds `Input`s and draws `Snapshot`s.

pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod ghost;
pub mod level;
pub mod motion;
pub mod state;
pub mod tick;

pub use components::{Direction, Ghost, GhostKind, PelletKind, Position};
pub use config::Settings;
pub use error::Error;
pub use game::Game;
pub use level::{Layout, LayoutError, Tile, DEFAULT_LAYOUT};
pub use state::{GameEvent, GameState, GhostView, Snapshot, Status};
pub use tick::{step, Input};

/// Gameplay constants
pub mod consts {
    use crate::components::Direction;

    pub const PELLET_POINTS: u32 = 10;
    pub const POWER_PELLET_POINTS: u32 = 50;
    /// Bonus for each ghost consumed during power mode
    pub const GHOST_POINTS: u32 = 200;
    /// Power mode length in ticks
    pub const POWER_DURATION_TICKS: u32 = 90;
    pub const STARTING_LIVES: u8 = 3;
    pub const PLAYER_START_DIRECTION: Direction = Direction::Left;
    pub const GHOST_START_DIRECTION: Direction = Direction::Up;
}
