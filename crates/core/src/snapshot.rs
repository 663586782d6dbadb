//! Read-only view of a game for render consumers
//!
//! A snapshot flattens the state into a row-major cell grid plus the counters a
//! HUD needs. `capture_into` reuses the caller's buffers so a driver can take
//! one every frame without reallocating.

use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::types::Position;

/// Per-cell contents, stored as `u8` in [`GameSnapshot::cells`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    Empty = 0,
    Head = 1,
    Body = 2,
    Food = 3,
    Obstacle = 4,
}

impl CellKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CellKind::Empty),
            1 => Some(CellKind::Head),
            2 => Some(CellKind::Body),
            3 => Some(CellKind::Food),
            4 => Some(CellKind::Obstacle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid_size: u16,
    /// Row-major cell codes (`y * grid_size + x`), see [`CellKind`]
    pub cells: Vec<u8>,
    /// FNV-1a 64 hash of `cells`
    pub board_hash: u64,
    pub snake: Vec<Position>,
    pub food: Position,
    pub obstacles: Vec<Position>,
    pub ticks: u64,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut snap = Self::default();
        snap.capture_into(state);
        snap
    }

    pub fn capture_into(&mut self, state: &GameState) {
        let n = state.grid_size as usize;
        self.grid_size = state.grid_size;
        self.cells.clear();
        self.cells.resize(n * n, CellKind::Empty as u8);

        // Later writes win: a full-board food fallback under the snake shows
        // the snake.
        self.paint(state.food, CellKind::Food);
        for &pos in &state.obstacles {
            self.paint(pos, CellKind::Obstacle);
        }
        for &pos in state.snake.iter().skip(1) {
            self.paint(pos, CellKind::Body);
        }
        if let Some(&head) = state.snake.front() {
            self.paint(head, CellKind::Head);
        }
        self.board_hash = fnv1a64(&self.cells);

        self.snake.clear();
        self.snake.extend(state.snake.iter().copied());
        self.food = state.food;
        self.obstacles.clear();
        self.obstacles.extend_from_slice(&state.obstacles);
        self.ticks = state.ticks;
        self.score = state.score;
        self.game_over = state.game_over;
        self.paused = state.paused;
        self.seed = state.seed;
    }

    fn paint(&mut self, pos: Position, kind: CellKind) {
        if let Some(idx) = pos.index(self.grid_size) {
            self.cells[idx] = kind as u8;
        }
    }

    /// Cell contents at (x, y), `None` when off the board
    pub fn cell(&self, x: i32, y: i32) -> Option<CellKind> {
        Position::new(x, y)
            .index(self.grid_size)
            .and_then(|idx| self.cells.get(idx))
            .and_then(|&v| CellKind::from_u8(v))
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

/// FNV-1a 64-bit hash
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
