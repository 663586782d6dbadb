//! Grid Snake (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `grid_snake::{core, engine, types}` and carries the
//! headless runner's argument and config handling.

pub mod cli;
pub mod config;

pub use grid_snake_core as core;
pub use grid_snake_engine as engine;
pub use grid_snake_types as types;
