//! Game state module - the immutable game aggregate and its transitions
//!
//! Every transition takes a `&GameState` and returns a new one; nothing is
//! mutated in place. The RNG is not part of the state: the driver owns it and
//! passes it to [`step`], so a stored state plus a reseeded RNG is what it
//! takes to reproduce a run.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::place::{place_food, place_obstacle};
use crate::rng::{Lcg, RandomSource};
use crate::types::{Direction, GameConfig, Position, INITIAL_SNAKE_LENGTH};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cells per side, fixed for the lifetime of the lineage
    pub grid_size: u16,
    /// Segments, head first
    pub snake: VecDeque<Position>,
    /// Direction applied on the last tick
    pub dir: Direction,
    /// Direction queued for the next tick (`None` keeps `dir`)
    pub next_dir: Option<Direction>,
    pub food: Position,
    /// Obstacles in spawn order; never removed
    pub obstacles: Vec<Position>,
    pub obstacle_spawn_every: u32,
    pub max_obstacles: u32,
    /// Ticks advanced since the last reset
    pub ticks: u64,
    /// Food eaten since the last reset
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    /// Seed this lineage was created with (not the live RNG state)
    pub seed: u32,
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Body,
    Obstacle,
}

/// Result of one tick, for drivers that report events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Paused or already over; nothing changed
    Idle,
    /// Advanced one cell without eating
    Moved,
    /// Advanced onto the food and grew
    Ate,
    /// The move was fatal; the game is now over
    Blocked(Collision),
}

/// Everything a tick produced besides the new state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub outcome: StepOutcome,
    /// Obstacle added this tick, if any
    pub spawned: Option<Position>,
}

impl GameState {
    /// Create a new game from a config.
    ///
    /// The snake spawns at the center heading right, with its body trailing
    /// left. Food is placed with a private RNG seeded from `config.seed`.
    /// Never fails: configs that cannot host the snake (see
    /// [`GameConfig::validate`]) produce a state that is simply unplayable.
    pub fn new(config: &GameConfig) -> Self {
        let center = i32::from(config.grid_size / 2);
        let snake: VecDeque<Position> = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| Position::new(center - i, center))
            .collect();

        let mut rng = Lcg::new(config.seed);
        let obstacles = Vec::new();
        let food = place_food(&snake, &obstacles, config.grid_size, &mut rng);

        Self {
            grid_size: config.grid_size,
            snake,
            dir: Direction::Right,
            next_dir: Some(Direction::Right),
            food,
            obstacles,
            obstacle_spawn_every: config.obstacle_spawn_every,
            max_obstacles: config.max_obstacles,
            ticks: 0,
            score: 0,
            game_over: false,
            paused: false,
            seed: config.seed,
        }
    }

    /// The config that would recreate this lineage from scratch
    pub fn config(&self) -> GameConfig {
        GameConfig {
            grid_size: self.grid_size,
            seed: self.seed,
            obstacle_spawn_every: self.obstacle_spawn_every,
            max_obstacles: self.max_obstacles,
        }
    }

    pub fn head(&self) -> Position {
        self.snake.front().copied().unwrap_or(Position::ORIGIN)
    }

    /// Direction the next tick will move in
    pub fn effective_dir(&self) -> Direction {
        self.next_dir.unwrap_or(self.dir)
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Check if a cell holds any snake segment (tail included)
    pub fn snake_covers(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub fn has_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Classify what a head moving onto `pos` would hit, in check order:
    /// wall, then body, then obstacle.
    pub fn collision_at(&self, pos: Position) -> Option<Collision> {
        if !pos.in_bounds(self.grid_size) {
            Some(Collision::Wall)
        } else if self.snake_covers(pos) {
            Some(Collision::Body)
        } else if self.has_obstacle(pos) {
            Some(Collision::Obstacle)
        } else {
            None
        }
    }

    fn spawn_due(&self, ticks: u64) -> bool {
        let every = u64::from(self.obstacle_spawn_every);
        every != 0 && ticks % every == 0 && self.obstacles.len() < self.max_obstacles as usize
    }
}

/// Advance the game by one tick.
///
/// Returns an equal state when the game is paused or over.
pub fn step<R>(state: &GameState, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    step_with_outcome(state, rng).0
}

/// Advance the game by one tick and report what happened.
pub fn step_with_outcome<R>(state: &GameState, rng: &mut R) -> (GameState, StepReport)
where
    R: RandomSource + ?Sized,
{
    if !state.playable() {
        let report = StepReport {
            outcome: StepOutcome::Idle,
            spawned: None,
        };
        return (state.clone(), report);
    }

    let dir = state.effective_dir();
    let next = state.head().step(dir);

    if let Some(collision) = state.collision_at(next) {
        log::debug!("game over at {:?}: {:?} after {} ticks", next, collision, state.ticks);
        let over = GameState {
            dir,
            game_over: true,
            ..state.clone()
        };
        let report = StepReport {
            outcome: StepOutcome::Blocked(collision),
            spawned: None,
        };
        return (over, report);
    }

    let ate_food = next == state.food;
    let mut snake = state.snake.clone();
    snake.push_front(next);
    if !ate_food {
        snake.pop_back();
    }

    let (food, score) = if ate_food {
        let food = place_food(&snake, &state.obstacles, state.grid_size, rng);
        log::debug!("food eaten at {:?}, next food at {:?}", next, food);
        (food, state.score + 1)
    } else {
        (state.food, state.score)
    };

    let ticks = state.ticks + 1;
    let mut obstacles = state.obstacles.clone();
    let mut spawned = None;
    if state.spawn_due(ticks) {
        spawned = place_obstacle(&snake, food, &obstacles, state.grid_size, rng);
        match spawned {
            Some(pos) => {
                log::debug!("obstacle spawned at {:?} on tick {}", pos, ticks);
                obstacles.push(pos);
            }
            None => log::trace!("no open cell for an obstacle on tick {}", ticks),
        }
    }

    let next_state = GameState {
        dir,
        snake,
        food,
        obstacles,
        ticks,
        score,
        ..state.clone()
    };
    let report = StepReport {
        outcome: if ate_food {
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        },
        spawned,
    };
    (next_state, report)
}

/// Queue a direction for the next tick.
///
/// Ignored when `dir` is `None`, or when it would reverse a snake longer than
/// one segment onto itself. The reversal guard compares against the direction
/// of the last tick, not the queued one.
pub fn set_direction(state: &GameState, dir: Option<Direction>) -> GameState {
    let Some(dir) = dir else {
        return state.clone();
    };
    if state.snake.len() > 1 && dir.is_opposite(state.dir) {
        return state.clone();
    }
    GameState {
        next_dir: Some(dir),
        ..state.clone()
    }
}

/// Flip the pause flag; a finished game stays as it is.
pub fn toggle_pause(state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }
    GameState {
        paused: !state.paused,
        ..state.clone()
    }
}

/// Start a fresh game on the same board settings with a new seed.
pub fn reset(state: &GameState, seed: u32) -> GameState {
    GameState::new(&state.config().with_seed(seed))
}
