//! Host settings read from the environment
//!
//! Only the terminal host uses these; the simulation itself has no clock.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;
use crate::level::{Layout, DEFAULT_LAYOUT};

const DEFAULT_TICK_MS: u64 = 120;
const DEFAULT_RENDER_FPS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    pub render_fps: u64,
    /// Seed for the ghost tie-break RNG
    pub seed: u64,
    /// Layout file; the built-in board when unset
    pub layout_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            render_fps: DEFAULT_RENDER_FPS,
            seed: clock_seed(),
            layout_path: None,
        }
    }
}

impl Settings {
    /// `MAZE_TICK_MS`, `MAZE_FPS`, `MAZE_SEED`, `MAZE_LAYOUT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            tick_ms: positive(&lookup, "MAZE_TICK_MS").unwrap_or(defaults.tick_ms),
            render_fps: positive(&lookup, "MAZE_FPS").unwrap_or(defaults.render_fps),
            seed: lookup("MAZE_SEED")
                .and_then(|v| parse_or_warn("MAZE_SEED", &v))
                .unwrap_or(defaults.seed),
            layout_path: lookup("MAZE_LAYOUT").filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn load_layout(&self) -> Result<Layout, Error> {
        let Some(path) = &self.layout_path else {
            return Ok(Layout::parse(DEFAULT_LAYOUT)?);
        };
        let text = std::fs::read_to_string(path).map_err(|source| Error::LayoutFile {
            path: path.clone(),
            source,
        })?;
        log::info!("loading layout from {path}");
        Ok(Layout::parse(&text)?)
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let value = parse_or_warn(key, &lookup(key)?)?;
    if value == 0 {
        log::warn!("{key} must be positive, using default");
        return None;
    }
    Some(value)
}

fn parse_or_warn(key: &str, raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a number");
            None
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
