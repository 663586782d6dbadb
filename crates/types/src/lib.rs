//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no behavior beyond small helpers, making them
//! usable in any context (core logic, drivers, recordings, render consumers).
//!
//! # Board
//!
//! The playfield is a square grid of `grid_size` x `grid_size` cells:
//!
//! - **Columns**: `x` in `0..grid_size` (left to right)
//! - **Rows**: `y` in `0..grid_size` (top to bottom)
//! - **Spawn**: head at `(grid_size / 2, grid_size / 2)`, body trailing left
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 20 | Cells per side |
//! | `DEFAULT_SEED` | 1 | RNG seed |
//! | `DEFAULT_OBSTACLE_SPAWN_EVERY` | 18 | Ticks between obstacle spawn attempts |
//! | `DEFAULT_MAX_OBSTACLES` | 6 | Obstacle cap |
//! | `TICK_MS` | 120 | Reference tick cadence for realtime drivers |
//!
//! # Examples
//!
//! ```
//! use grid_snake_types::{Direction, GameAction, Position};
//!
//! let head = Position::new(7, 7);
//! assert_eq!(head.step(Direction::Right), Position::new(8, 7));
//!
//! assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! let action = GameAction::from_str("restart:42").unwrap();
//! assert_eq!(action, GameAction::Restart { seed: 42 });
//! ```

use serde::{Deserialize, Serialize};

/// Default grid size in cells per side
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default RNG seed
pub const DEFAULT_SEED: u32 = 1;

/// Default number of ticks between obstacle spawn attempts
pub const DEFAULT_OBSTACLE_SPAWN_EVERY: u32 = 18;

/// Default obstacle cap
pub const DEFAULT_MAX_OBSTACLES: u32 = 6;

/// Reference tick cadence in milliseconds
pub const TICK_MS: u64 = 120;

/// Number of segments a freshly spawned snake has
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Smallest grid that fits the spawned snake
pub const MIN_GRID_SIZE: u16 = 4;

/// Coerce any integer seed to the 32-bit RNG state by wraparound.
///
/// `-1` becomes `u32::MAX` and `2^32 + 7` becomes `7`.
pub fn lossy_seed(seed: i64) -> u32 {
    seed as u32
}

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that a candidate head one step past the edge is
/// representable; on-board cells satisfy `0 <= x, y < grid_size`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check if the position lies on a `grid_size` x `grid_size` board
    pub fn in_bounds(self, grid_size: u16) -> bool {
        let n = i32::from(grid_size);
        self.x >= 0 && self.y >= 0 && self.x < n && self.y < n
    }

    /// Packed row-major key `y * grid_size + x`, or `None` when off the board
    pub fn index(self, grid_size: u16) -> Option<usize> {
        if !self.in_bounds(grid_size) {
            return None;
        }
        Some(self.y as usize * grid_size as usize + self.x as usize)
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Movement direction, applied as a unit (dx, dy) delta per tick.
///
/// `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction in a fixed order (used wherever ties must break deterministically)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when the two deltas cancel out (a 180° turn)
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Driver-level inputs, mapped onto the command functions of the core.
///
/// Actions serialize as compact strings (`"up"`, `"pause"`, `"restart:42"`) so
/// recordings stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GameAction {
    /// Queue a direction change for the next tick
    Turn(Direction),
    /// Toggle pause state
    TogglePause,
    /// Start over with a fresh seed
    Restart { seed: u32 },
}

impl GameAction {
    /// Parse action from its string form
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("right"), Some(GameAction::Turn(Direction::Right)));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("restart:7"), Some(GameAction::Restart { seed: 7 }));
    /// assert_eq!(GameAction::from_str("restart"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(dir) = Direction::from_str(s) {
            return Some(GameAction::Turn(dir));
        }
        if s.eq_ignore_ascii_case("pause") {
            return Some(GameAction::TogglePause);
        }
        let (name, seed) = s.split_once(':')?;
        if !name.eq_ignore_ascii_case("restart") {
            return None;
        }
        seed.trim()
            .parse::<i64>()
            .ok()
            .map(|seed| GameAction::Restart {
                seed: lossy_seed(seed),
            })
    }

    pub fn as_string(&self) -> String {
        match self {
            GameAction::Turn(dir) => dir.as_str().to_string(),
            GameAction::TogglePause => "pause".to_string(),
            GameAction::Restart { seed } => format!("restart:{seed}"),
        }
    }
}

impl From<GameAction> for String {
    fn from(action: GameAction) -> Self {
        action.as_string()
    }
}

impl TryFrom<String> for GameAction {
    type Error = ParseActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GameAction::from_str(&value).ok_or(ParseActionError(value))
    }
}

/// Unknown action string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0:?}")]
pub struct ParseActionError(pub String);

/// Initialization options for a game lineage.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: u16,
    /// RNG seed for the lineage
    pub seed: u32,
    /// Tick interval between obstacle spawn attempts
    pub obstacle_spawn_every: u32,
    /// Obstacle cap
    pub max_obstacles: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: DEFAULT_SEED,
            obstacle_spawn_every: DEFAULT_OBSTACLE_SPAWN_EVERY,
            max_obstacles: DEFAULT_MAX_OBSTACLES,
        }
    }
}

impl GameConfig {
    pub fn with_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }

    pub fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Check that a game built from this config can start and run.
    ///
    /// The core itself never rejects a config; drivers call this first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                grid_size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.obstacle_spawn_every == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        // Room must remain for the spawned snake and one food cell.
        let room = self.cell_count() - INITIAL_SNAKE_LENGTH - 1;
        if self.max_obstacles as usize > room {
            return Err(ConfigError::TooManyObstacles {
                max_obstacles: self.max_obstacles,
                room,
            });
        }
        Ok(())
    }
}

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size {grid_size} is below the minimum of {min}")]
    GridTooSmall { grid_size: u16, min: u16 },

    #[error("obstacle spawn interval must be a positive number of ticks")]
    ZeroSpawnInterval,

    #[error("max obstacles {max_obstacles} exceeds the {room} free cells of the board")]
    TooManyObstacles { max_obstacles: u32, room: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.seed, 1);
        assert_eq!(config.obstacle_spawn_every, 18);
        assert_eq!(config.max_obstacles, 6);
        assert_eq!(TICK_MS, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lossy_seed_wraps() {
        assert_eq!(lossy_seed(-1), u32::MAX);
        assert_eq!(lossy_seed(1 << 32), 0);
        assert_eq!(lossy_seed((1 << 32) + 7), 7);
        assert_eq!(lossy_seed(42), 42);
    }

    #[test]
    fn position_bounds_and_index() {
        assert!(Position::new(0, 0).in_bounds(4));
        assert!(Position::new(3, 3).in_bounds(4));
        assert!(!Position::new(4, 0).in_bounds(4));
        assert!(!Position::new(-1, 2).in_bounds(4));

        assert_eq!(Position::new(1, 2).index(4), Some(9));
        assert_eq!(Position::new(0, -1).index(4), None);
    }

    #[test]
    fn direction_deltas_are_unit_vectors() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn action_string_forms() {
        for action in [
            GameAction::Turn(Direction::Up),
            GameAction::TogglePause,
            GameAction::Restart { seed: 99 },
        ] {
            assert_eq!(GameAction::from_str(&action.as_string()), Some(action));
        }
        assert_eq!(GameAction::from_str("jump"), None);
        assert_eq!(
            GameAction::from_str("restart:-3"),
            Some(GameAction::Restart { seed: u32::MAX - 2 })
        );
        assert_eq!(GameAction::from_str("restart:x"), None);
    }

    #[test]
    fn action_serializes_as_string() {
        let json = serde_json::to_string(&GameAction::Restart { seed: 5 }).unwrap();
        assert_eq!(json, "\"restart:5\"");

        let parsed: GameAction = serde_json::from_str("\"LEFT\"").unwrap();
        assert_eq!(parsed, GameAction::Turn(Direction::Left));

        assert!(serde_json::from_str::<GameAction>("\"north\"").is_err());
    }

    #[test]
    fn config_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"grid_size": 14}"#).unwrap();
        assert_eq!(config.grid_size, 14);
        assert_eq!(config.max_obstacles, DEFAULT_MAX_OBSTACLES);
    }

    #[test]
    fn config_validation() {
        let small = GameConfig {
            grid_size: 3,
            ..GameConfig::default()
        };
        assert!(matches!(
            small.validate(),
            Err(ConfigError::GridTooSmall { grid_size: 3, .. })
        ));

        let zero = GameConfig {
            obstacle_spawn_every: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroSpawnInterval));

        let crowded = GameConfig {
            grid_size: 4,
            max_obstacles: 13,
            ..GameConfig::default()
        };
        assert!(matches!(
            crowded.validate(),
            Err(ConfigError::TooManyObstacles { room: 12, .. })
        ));

        let packed = GameConfig {
            grid_size: 4,
            max_obstacles: 12,
            ..GameConfig::default()
        };
        assert!(packed.validate().is_ok());
    }
}
