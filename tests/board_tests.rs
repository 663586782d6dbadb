//! Board tests - occupancy, open-cell scan and placement

use grid_snake::core::{
    find_open_cells, place_food, place_obstacle, Lcg, Occupancy, RandomSource, FOOD_FALLBACK,
};
use grid_snake::types::Position;

/// Fixed draws, consumed front to back
struct Draws(Vec<f64>);

impl RandomSource for Draws {
    fn next_f64(&mut self) -> f64 {
        self.0.remove(0)
    }
}

fn row(y: i32, n: i32) -> Vec<Position> {
    (0..n).map(|x| Position::new(x, y)).collect()
}

#[test]
fn test_occupancy_new_empty() {
    let occ = Occupancy::new(5);
    assert_eq!(occ.grid_size(), 5);
    assert!(occ.is_empty());
    assert!(!occ.is_full());

    for y in 0..5 {
        for x in 0..5 {
            assert!(!occ.contains(Position::new(x, y)), "Cell ({}, {}) should be open", x, y);
        }
    }
}

#[test]
fn test_occupancy_ignores_off_board() {
    let mut occ = Occupancy::new(3);
    assert!(!occ.insert(Position::new(-1, 0)));
    assert!(!occ.insert(Position::new(0, 3)));
    assert!(occ.is_empty());
    assert!(!occ.contains(Position::new(3, 3)));
}

#[test]
fn test_occupancy_counts_duplicates_once() {
    let cells = [Position::new(1, 1), Position::new(1, 1), Position::new(2, 0)];
    let occ = Occupancy::from_positions(3, &cells);
    assert_eq!(occ.len(), 2);
}

#[test]
fn test_open_cells_row_major() {
    let occ = Occupancy::from_positions(3, &[Position::new(1, 0), Position::new(0, 1)]);
    let open = find_open_cells(3, &occ);
    assert_eq!(
        open,
        vec![
            Position::new(0, 0),
            Position::new(2, 0),
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ]
    );
}

#[test]
fn test_open_cells_full_and_empty_board() {
    let all: Vec<Position> = (0..4).flat_map(|y| row(y, 4)).collect();
    let full = Occupancy::from_positions(4, &all);
    assert!(full.is_full());
    assert!(find_open_cells(4, &full).is_empty());

    assert_eq!(find_open_cells(4, &Occupancy::new(4)).len(), 16);
    assert!(find_open_cells(0, &Occupancy::new(0)).is_empty());
}

#[test]
fn test_food_avoids_snake_and_obstacles() {
    let snake = row(0, 6);
    let obstacles = row(1, 6);
    let mut rng = Lcg::new(11);
    for _ in 0..200 {
        let food = place_food(&snake, &obstacles, 6, &mut rng);
        assert!(food.in_bounds(6));
        assert!(food.y >= 2, "food {:?} landed on an occupied row", food);
    }
}

#[test]
fn test_food_single_open_cell() {
    let mut taken: Vec<Position> = (0..3).flat_map(|y| row(y, 3)).collect();
    taken.retain(|&p| p != Position::new(2, 2));
    let mut rng = Draws(vec![0.999]);
    assert_eq!(place_food(&taken, &[], 3, &mut rng), Position::new(2, 2));
}

#[test]
fn test_food_full_board_fallback() {
    let snake: Vec<Position> = (0..3).flat_map(|y| row(y, 3)).collect();
    let mut rng = Lcg::new(4);
    assert_eq!(place_food(&snake, &[], 3, &mut rng), FOOD_FALLBACK);
    assert_eq!(rng, Lcg::new(4));
}

#[test]
fn test_obstacle_never_on_food() {
    let snake = row(0, 5);
    let food = Position::new(4, 4);
    let mut rng = Lcg::new(2);
    for _ in 0..200 {
        let pos = place_obstacle(&snake, food, &[], 5, &mut rng).unwrap();
        assert_ne!(pos, food);
        assert!(pos.y > 0);
    }
}

#[test]
fn test_obstacle_none_when_only_food_is_open() {
    let mut snake: Vec<Position> = (0..3).flat_map(|y| row(y, 3)).collect();
    let food = snake.pop().unwrap();
    let mut rng = Draws(Vec::new());
    assert_eq!(place_obstacle(&snake, food, &[], 3, &mut rng), None);
}

#[test]
fn test_draw_maps_to_index() {
    // 4 open cells on a 2x2 board.
    let mut rng = Draws(vec![0.0, 0.25, 0.5, 0.75]);
    let picks: Vec<Position> = (0..4)
        .map(|_| place_food(&[], &[], 2, &mut rng))
        .collect();
    assert_eq!(
        picks,
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]
    );
}
