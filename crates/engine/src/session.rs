//! Session - the driver that owns the live game and its RNG
//!
//! A session holds exactly one `(GameState, Lcg)` pair and threads it through
//! every transition. All transitions take `&mut self`, so there is never more
//! than one in flight.

use crate::core::{
    reset, set_direction, step_with_outcome, toggle_pause, GameSnapshot, GameState, Lcg,
    StepOutcome, StepReport,
};
use crate::replay::{RecordedInput, Recording};
use crate::types::{GameAction, GameConfig};

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    rng: Lcg,
    /// Driver frames since the session started (advances even while paused)
    frame: u64,
    config: GameConfig,
    recording: Option<Vec<RecordedInput>>,
}

impl Session {
    /// Start a game from `config`, with the driver RNG seeded from `config.seed`
    pub fn new(config: GameConfig) -> Self {
        log::info!(
            "new session: grid={} seed={} obstacle_every={} max_obstacles={}",
            config.grid_size,
            config.seed,
            config.obstacle_spawn_every,
            config.max_obstacles
        );
        Self {
            state: GameState::new(&config),
            rng: Lcg::new(config.seed),
            frame: 0,
            config,
            recording: None,
        }
    }

    /// Start a session that logs every applied action for replay
    pub fn recording(config: GameConfig) -> Self {
        let mut session = Self::new(config);
        session.recording = Some(Vec::new());
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rng(&self) -> &Lcg {
        &self.rng
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Config the session was created with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.capture_into(&self.state);
    }

    /// Apply a driver action before the next tick.
    ///
    /// Returns whether the state changed. Rejected turns (reversals) are still
    /// recorded so a replay sees the same input stream.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if let Some(inputs) = self.recording.as_mut() {
            inputs.push(RecordedInput {
                frame: self.frame,
                action,
            });
        }

        match action {
            GameAction::Turn(dir) => {
                let next = set_direction(&self.state, Some(dir));
                let changed = next != self.state;
                self.state = next;
                changed
            }
            GameAction::TogglePause => {
                let next = toggle_pause(&self.state);
                let changed = next != self.state;
                if changed {
                    log::info!("paused={}", next.paused);
                }
                self.state = next;
                changed
            }
            GameAction::Restart { seed } => {
                self.restart(seed);
                true
            }
        }
    }

    /// Advance one frame: one `step` on the live state.
    pub fn tick(&mut self) -> StepReport {
        let (next, report) = step_with_outcome(&self.state, &mut self.rng);
        self.frame += 1;

        match report.outcome {
            StepOutcome::Blocked(collision) => log::info!(
                "game over: {:?} on tick {} with score {}",
                collision,
                next.ticks,
                next.score
            ),
            StepOutcome::Ate => log::debug!("score {} at tick {}", next.score, next.ticks),
            StepOutcome::Moved | StepOutcome::Idle => {}
        }
        if let Some(pos) = report.spawned {
            log::debug!("obstacle {} of {} at {:?}", next.obstacles.len(), next.max_obstacles, pos);
        }

        self.state = next;
        report
    }

    /// Advance the frame counter by `frames` ticks that would not change the
    /// game. Does nothing while the game is still running.
    pub(crate) fn skip_idle_frames(&mut self, frames: u64) {
        if self.state.playable() {
            return;
        }
        self.frame += frames;
    }

    /// Replace the game with a fresh one and reseed the RNG.
    pub fn restart(&mut self, seed: u32) {
        log::info!(
            "restart with seed {} (previous score {}, ticks {})",
            seed,
            self.state.score,
            self.state.ticks
        );
        self.state = reset(&self.state, seed);
        self.rng = Lcg::new(seed);
    }

    /// Recording of everything applied so far, if recording is on
    pub fn to_recording(&self) -> Option<Recording> {
        self.recording.as_ref().map(|inputs| Recording {
            config: self.config,
            frames: self.frame,
            inputs: inputs.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Position};

    fn config() -> GameConfig {
        GameConfig {
            grid_size: 10,
            seed: 7,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_new_session_matches_core_initializer() {
        let session = Session::new(config());
        assert_eq!(session.state(), &GameState::new(&config()));
        assert_eq!(session.rng(), &Lcg::new(7));
        assert_eq!(session.frame(), 0);
        assert!(session.to_recording().is_none());
    }

    #[test]
    fn test_apply_turn_and_reversal() {
        let mut session = Session::new(config());
        assert!(!session.apply(GameAction::Turn(Direction::Left)));
        assert!(session.apply(GameAction::Turn(Direction::Up)));
        assert_eq!(session.state().next_dir, Some(Direction::Up));
    }

    #[test]
    fn test_pause_stops_ticks_but_not_frames() {
        let mut session = Session::new(config());
        assert!(session.apply(GameAction::TogglePause));
        let report = session.tick();
        assert_eq!(report.outcome, StepOutcome::Idle);
        assert_eq!(session.state().ticks, 0);
        assert_eq!(session.frame(), 1);
    }

    #[test]
    fn test_restart_reseeds() {
        let mut session = Session::new(config());
        session.tick();
        session.tick();
        session.apply(GameAction::Restart { seed: 99 });

        assert_eq!(session.state(), &GameState::new(&config().with_seed(99)));
        assert_eq!(session.rng(), &Lcg::new(99));
        assert_eq!(session.config().seed, 7);
    }

    #[test]
    fn test_game_over_through_session() {
        let mut session = Session::new(config());
        session.apply(GameAction::Turn(Direction::Up));
        let mut last = StepOutcome::Idle;
        for _ in 0..10 {
            last = session.tick().outcome;
            if session.state().game_over {
                break;
            }
        }
        assert!(session.state().game_over);
        assert!(matches!(last, StepOutcome::Blocked(_)));
        assert_eq!(session.state().head(), Position::new(5, 0));
    }

    #[test]
    fn test_recording_captures_frames() {
        let mut session = Session::recording(config());
        session.apply(GameAction::Turn(Direction::Down));
        session.tick();
        session.tick();
        session.apply(GameAction::TogglePause);
        session.tick();

        let recording = session.to_recording().unwrap();
        assert_eq!(recording.frames, 3);
        assert_eq!(
            recording.inputs,
            vec![
                RecordedInput {
                    frame: 0,
                    action: GameAction::Turn(Direction::Down)
                },
                RecordedInput {
                    frame: 2,
                    action: GameAction::TogglePause
                },
            ]
        );
    }
}
