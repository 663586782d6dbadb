//! Engine - drivers built on the pure core
//!
//! The core only knows how to turn one state into the next. This crate holds
//! the pieces a running game needs around that:
//!
//! - [`session`]: owns the live `(GameState, Lcg)` pair and applies actions and ticks
//! - [`replay`]: input recordings and bit-exact replay
//! - [`autopilot`]: a greedy one-step-lookahead controller for headless runs

pub mod autopilot;
pub mod replay;
pub mod session;

pub use grid_snake_core as core;
pub use grid_snake_types as types;

pub use replay::{replay, replay_session, RecordedInput, Recording, ReplayError};
pub use session::Session;
