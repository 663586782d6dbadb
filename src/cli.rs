//! Command-line parsing for the headless runner.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::config::ConfigOverrides;
use crate::core::GameState;
use crate::types::lossy_seed;

pub const DEFAULT_TICKS: u64 = 1000;

pub const USAGE: &str = "\
usage:
  grid-snake run [--ticks N] [--seed S|now] [--grid N] [--obstacle-every N]
                 [--max-obstacles N] [--config FILE] [--record FILE]
                 [--realtime] [--json]
  grid-snake replay FILE [--json]
  grid-snake help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunArgs),
    Replay(ReplayArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Upper bound on ticks; the run also stops at game over
    pub ticks: u64,
    pub overrides: ConfigOverrides,
    pub config: Option<PathBuf>,
    pub record: Option<PathBuf>,
    /// Sleep `TICK_MS` between ticks
    pub realtime: bool,
    /// Print a JSON snapshot after every tick
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            overrides: ConfigOverrides::default(),
            config: None,
            record: None,
            realtime: false,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayArgs {
    pub recording: PathBuf,
    pub json: bool,
}

/// Parse arguments (without the program name). No arguments means `run`.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Run(RunArgs::default()));
    };
    match first.as_str() {
        "run" => parse_run(&args[1..]).map(Command::Run),
        "replay" => parse_replay(&args[1..]).map(Command::Replay),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(anyhow!("unknown command: {}\n{}", other, USAGE)),
    }
}

fn parse_run(args: &[String]) -> Result<RunArgs> {
    let mut run = RunArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                run.ticks = parse_number(args.get(i), "--ticks")?;
            }
            "--seed" => {
                i += 1;
                let v = value(args.get(i), "--seed")?;
                run.overrides.seed = Some(if v == "now" {
                    seed_from_clock()
                } else {
                    lossy_seed(parse_value(v, "--seed")?)
                });
            }
            "--grid" => {
                i += 1;
                run.overrides.grid_size = Some(parse_number(args.get(i), "--grid")?);
            }
            "--obstacle-every" => {
                i += 1;
                run.overrides.obstacle_spawn_every =
                    Some(parse_number(args.get(i), "--obstacle-every")?);
            }
            "--max-obstacles" => {
                i += 1;
                run.overrides.max_obstacles = Some(parse_number(args.get(i), "--max-obstacles")?);
            }
            "--config" => {
                i += 1;
                run.config = Some(PathBuf::from(value(args.get(i), "--config")?));
            }
            "--record" => {
                i += 1;
                run.record = Some(PathBuf::from(value(args.get(i), "--record")?));
            }
            "--realtime" => run.realtime = true,
            "--json" => run.json = true,
            other => return Err(anyhow!("run: unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(run)
}

fn parse_replay(args: &[String]) -> Result<ReplayArgs> {
    let mut recording = None;
    let mut json = false;
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                return Err(anyhow!("replay: unknown argument: {}", flag));
            }
            path if recording.is_none() => recording = Some(PathBuf::from(path)),
            extra => return Err(anyhow!("replay: unexpected argument: {}", extra)),
        }
    }
    let recording = recording.ok_or_else(|| anyhow!("replay: missing recording file"))?;
    Ok(ReplayArgs { recording, json })
}

fn value<'a>(arg: Option<&'a String>, flag: &str) -> Result<&'a str> {
    arg.map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_number<T: std::str::FromStr>(arg: Option<&String>, flag: &str) -> Result<T> {
    parse_value(value(arg, flag)?, flag)
}

fn parse_value<T: std::str::FromStr>(v: &str, flag: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// Wall-clock seed in `0..100_000`, for runs that should differ each time
pub fn seed_from_clock() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis % 100_000) as u32
}

/// One-line result of a run
pub fn summary_line(state: &GameState) -> String {
    format!(
        "seed={} ticks={} score={} length={} obstacles={} game_over={}",
        state.seed,
        state.ticks,
        state.score,
        state.snake.len(),
        state.obstacles.len(),
        state.game_over
    )
}
