//! Placement of food and obstacles on open cells
//!
//! Both placements scan the open cells in board order and pick
//! `open[floor(r * open.len())]` for one draw `r` from the RNG. When no cell is
//! open no randomness is consumed.

use crate::board::{find_open_cells, Occupancy};
use crate::rng::RandomSource;
use crate::types::Position;

/// Cell food falls back to when the board is full.
///
/// The fallback is not checked against the snake or obstacles, so on a full
/// board food can overlap them. Callers that care must check for a full board
/// themselves.
pub const FOOD_FALLBACK: Position = Position::ORIGIN;

/// Pick a uniformly random cell not covered by the snake or an obstacle.
///
/// Returns [`FOOD_FALLBACK`] when every cell is taken.
pub fn place_food<'a, R>(
    snake: impl IntoIterator<Item = &'a Position>,
    obstacles: &[Position],
    grid_size: u16,
    rng: &mut R,
) -> Position
where
    R: RandomSource + ?Sized,
{
    let mut occupied = Occupancy::from_positions(grid_size, snake);
    occupied.extend(obstacles);
    pick_open(grid_size, &occupied, rng).unwrap_or(FOOD_FALLBACK)
}

/// Pick a uniformly random cell not covered by the snake, the food or an
/// existing obstacle.
///
/// Returns `None` when every cell is taken, meaning no obstacle spawns.
pub fn place_obstacle<'a, R>(
    snake: impl IntoIterator<Item = &'a Position>,
    food: Position,
    obstacles: &[Position],
    grid_size: u16,
    rng: &mut R,
) -> Option<Position>
where
    R: RandomSource + ?Sized,
{
    let mut occupied = Occupancy::from_positions(grid_size, snake);
    occupied.extend(obstacles);
    occupied.insert(food);
    pick_open(grid_size, &occupied, rng)
}

fn pick_open<R>(grid_size: u16, occupied: &Occupancy, rng: &mut R) -> Option<Position>
where
    R: RandomSource + ?Sized,
{
    let open = find_open_cells(grid_size, occupied);
    if open.is_empty() {
        return None;
    }
    let idx = (rng.next_f64() * open.len() as f64).floor() as usize;
    open.get(idx.min(open.len() - 1)).copied()
}
