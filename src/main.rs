//! Headless Snake runner (default binary).
//!
//! `run` plays a game with the greedy autopilot and prints a summary (or one
//! JSON snapshot per tick); `replay` re-runs a recorded game. Logging goes to
//! stderr through `env_logger`, filtered by `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use grid_snake::cli::{parse_args, summary_line, Command, ReplayArgs, RunArgs, USAGE};
use grid_snake::config;
use grid_snake::engine::{autopilot, replay_session, Recording, Session};
use grid_snake::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args)? {
        Command::Run(run_args) => run(&run_args),
        Command::Replay(replay_args) => replay(&replay_args),
        Command::Help => {
            print!("{}", USAGE);
            Ok(())
        }
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let config = config::resolve(args.config.as_deref(), &args.overrides)?;
    let mut session = if args.record.is_some() {
        Session::recording(config)
    } else {
        Session::new(config)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let tick_duration = Duration::from_millis(TICK_MS);

    for _ in 0..args.ticks {
        if let Some(dir) = autopilot::choose(session.state()) {
            if dir != session.state().effective_dir() {
                session.apply(GameAction::Turn(dir));
            }
        }
        session.tick();

        if args.json {
            serde_json::to_writer(&mut out, &session.snapshot())?;
            writeln!(out)?;
        }
        if session.state().game_over {
            break;
        }
        if args.realtime {
            thread::sleep(tick_duration);
        }
    }

    if !args.json {
        writeln!(out, "{}", summary_line(session.state()))?;
    }

    if let (Some(path), Some(recording)) = (&args.record, session.to_recording()) {
        let file = File::create(path)
            .with_context(|| format!("creating recording {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &recording)
            .with_context(|| format!("writing recording {}", path.display()))?;
        writer.flush()?;
        log::info!(
            "recorded {} frames, {} inputs to {}",
            recording.frames,
            recording.inputs.len(),
            path.display()
        );
    }
    Ok(())
}

fn replay(args: &ReplayArgs) -> Result<()> {
    let path = &args.recording;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading recording {}", path.display()))?;
    let recording: Recording = serde_json::from_str(&text)
        .with_context(|| format!("parsing recording {}", path.display()))?;

    let session = replay_session(&recording)
        .with_context(|| format!("replaying {}", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer(&mut out, &session.snapshot())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", summary_line(session.state()))?;
    }
    Ok(())
}
