//! Greedy autopilot for headless runs
//!
//! Looks one move ahead: drops every direction that reverses, leaves the grid,
//! or lands on a segment or obstacle, then heads for the food by Manhattan
//! distance. Ties break in [`Direction::ALL`] order, so choices are
//! deterministic.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::types::Direction;

/// Directions whose next cell is not immediately fatal
pub fn safe_moves(state: &GameState) -> ArrayVec<Direction, 4> {
    let head = state.head();
    Direction::ALL
        .into_iter()
        .filter(|&dir| !(state.snake.len() > 1 && dir.is_opposite(state.dir)))
        .filter(|&dir| state.collision_at(head.step(dir)).is_none())
        .collect()
}

/// Pick the next direction, or `None` when no move is safe (or the game is
/// not running).
pub fn choose(state: &GameState) -> Option<Direction> {
    if !state.playable() {
        return None;
    }
    let head = state.head();
    safe_moves(state)
        .into_iter()
        .min_by_key(|&dir| head.step(dir).manhattan(state.food))
}
