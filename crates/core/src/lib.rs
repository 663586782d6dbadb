//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state transitions, and placement logic.
//! It has **zero dependencies** on rendering, input devices, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every transition is a pure function from state to state
//! - **Portable**: Runs anywhere a driver can call a function (terminal, web, headless)
//!
//! # Module Structure
//!
//! - [`board`]: grid occupancy and open-cell enumeration
//! - [`game_state`]: the game aggregate, the tick transition, and the command functions
//! - [`place`]: random food and obstacle placement
//! - [`rng`]: seeded LCG
//! - [`snapshot`]: flattened read-only view for render consumers
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its queued direction
//! - Leaving the grid, touching any segment (tail included), or touching an
//!   obstacle ends the game; a finished game ignores further ticks
//! - Eating food grows the snake by one and scores one point
//! - Every `obstacle_spawn_every` ticks an obstacle spawns on a free cell,
//!   up to `max_obstacles`
//! - A multi-segment snake cannot reverse into itself
//!
//! # Example
//!
//! ```
//! use grid_snake_core::{set_direction, step, GameState, Lcg};
//! use grid_snake_types::{Direction, GameConfig};
//!
//! let config = GameConfig { grid_size: 14, seed: 42, ..GameConfig::default() };
//! let mut rng = Lcg::new(config.seed);
//! let state = GameState::new(&config);
//!
//! let state = set_direction(&state, Some(Direction::Down));
//! let state = step(&state, &mut rng);
//!
//! assert_eq!(state.ticks, 1);
//! assert_eq!(state.dir, Direction::Down);
//! assert!(!state.game_over);
//! ```

pub mod board;
pub mod game_state;
pub mod place;
pub mod rng;
pub mod snapshot;

pub use grid_snake_types as types;

// Re-export commonly used types for convenience
pub use board::{find_open_cells, Occupancy};
pub use game_state::{
    reset, set_direction, step, step_with_outcome, toggle_pause, Collision, GameState,
    StepOutcome, StepReport,
};
pub use place::{place_food, place_obstacle, FOOD_FALLBACK};
pub use rng::{Lcg, RandomSource};
pub use snapshot::{fnv1a64, CellKind, GameSnapshot};
