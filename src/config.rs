//! Game configuration resolution for the runner
//!
//! Layers, later wins: built-in defaults, an optional JSON file, environment
//! variables, then command-line overrides. The result is validated before a
//! session is built from it.
//!
//! # Environment Variables
//!
//! - `SNAKE_GRID_SIZE`: cells per side (default: 20)
//! - `SNAKE_SEED`: RNG seed (default: 1); any integer, wrapped to 32 bits
//! - `SNAKE_OBSTACLE_EVERY`: ticks between obstacle spawn attempts (default: 18)
//! - `SNAKE_MAX_OBSTACLES`: obstacle cap (default: 6)
//!
//! Unparseable values are ignored with a warning, like unset ones.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::types::{lossy_seed, GameConfig};

pub const ENV_GRID_SIZE: &str = "SNAKE_GRID_SIZE";
pub const ENV_SEED: &str = "SNAKE_SEED";
pub const ENV_OBSTACLE_EVERY: &str = "SNAKE_OBSTACLE_EVERY";
pub const ENV_MAX_OBSTACLES: &str = "SNAKE_MAX_OBSTACLES";

/// Values given on the command line; `None` leaves the lower layer alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub grid_size: Option<u16>,
    pub seed: Option<u32>,
    pub obstacle_spawn_every: Option<u32>,
    pub max_obstacles: Option<u32>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GameConfig) {
        if let Some(v) = self.grid_size {
            config.grid_size = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.obstacle_spawn_every {
            config.obstacle_spawn_every = v;
        }
        if let Some(v) = self.max_obstacles {
            config.max_obstacles = v;
        }
    }
}

/// Read a JSON config file; missing fields keep their defaults
pub fn load_file(path: &Path) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Apply `SNAKE_*` variables from the process environment
pub fn apply_env(config: &mut GameConfig) {
    apply_env_with(config, |key| std::env::var(key).ok());
}

/// Apply `SNAKE_*` variables from an arbitrary lookup
pub fn apply_env_with(config: &mut GameConfig, lookup: impl Fn(&str) -> Option<String>) {
    let overrides = ConfigOverrides {
        grid_size: env_value(&lookup, ENV_GRID_SIZE),
        seed: env_value::<i64>(&lookup, ENV_SEED).map(lossy_seed),
        obstacle_spawn_every: env_value(&lookup, ENV_OBSTACLE_EVERY),
        max_obstacles: env_value(&lookup, ENV_MAX_OBSTACLES),
    };
    overrides.apply(config);
}

fn env_value<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

/// Resolve every layer against the process environment and validate
pub fn resolve(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<GameConfig> {
    resolve_layers(file, overrides, apply_env)
}

/// Like [`resolve`], reading the environment layer from `lookup`
pub fn resolve_with(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<GameConfig> {
    resolve_layers(file, overrides, |config| apply_env_with(config, lookup))
}

fn resolve_layers(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
    env_layer: impl FnOnce(&mut GameConfig),
) -> Result<GameConfig> {
    let mut config = match file {
        Some(path) => load_file(path)?,
        None => GameConfig::default(),
    };
    env_layer(&mut config);
    overrides.apply(&mut config);
    config.validate().context("invalid game config")?;
    log::debug!("resolved config: {:?}", config);
    Ok(config)
}
