//! Recordings of driver input, and deterministic replay
//!
//! A recording is the config plus every action a driver applied, stamped with
//! the frame it was applied before. Because the core is pure and the RNG is
//! seeded from the config, feeding the same inputs back reproduces the run
//! exactly.

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::session::Session;
use crate::types::{ConfigError, GameAction, GameConfig};

/// One action, applied before the tick of `frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedInput {
    pub frame: u64,
    pub action: GameAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub config: GameConfig,
    /// Number of ticks the driver ran
    pub frames: u64,
    /// Inputs in application order
    #[serde(default)]
    pub inputs: Vec<RecordedInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("recording has an invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("input {index} is stamped frame {frame}, before frame {previous} of the input preceding it")]
    OutOfOrder { index: usize, frame: u64, previous: u64 },

    #[error("input {index} is stamped frame {frame}, past the last frame {frames}")]
    PastEnd { index: usize, frame: u64, frames: u64 },
}

impl Recording {
    /// Check the config and that inputs are in frame order within the run.
    pub fn validate(&self) -> Result<(), ReplayError> {
        self.config.validate()?;
        let mut previous = 0;
        for (index, input) in self.inputs.iter().enumerate() {
            if input.frame < previous {
                return Err(ReplayError::OutOfOrder {
                    index,
                    frame: input.frame,
                    previous,
                });
            }
            if input.frame > self.frames {
                return Err(ReplayError::PastEnd {
                    index,
                    frame: input.frame,
                    frames: self.frames,
                });
            }
            previous = input.frame;
        }
        Ok(())
    }
}

/// Re-run a recording and return the final state.
pub fn replay(recording: &Recording) -> Result<GameState, ReplayError> {
    replay_session(recording).map(|session| session.state().clone())
}

/// Re-run a recording and return the whole session (state, RNG, frame count).
pub fn replay_session(recording: &Recording) -> Result<Session, ReplayError> {
    recording.validate()?;

    let mut session = Session::new(recording.config);
    let mut inputs = recording.inputs.iter().peekable();
    for frame in 0..=recording.frames {
        while let Some(input) = inputs.next_if(|input| input.frame == frame) {
            session.apply(input.action);
        }
        // Paused or finished with nothing left to apply: every remaining tick is a no-op.
        if !session.state().playable() && inputs.peek().is_none() {
            session.skip_idle_frames(recording.frames - frame);
            break;
        }
        if frame < recording.frames {
            session.tick();
        }
    }
    log::debug!(
        "replayed {} frames and {} inputs",
        recording.frames,
        recording.inputs.len()
    );
    Ok(session)
}
