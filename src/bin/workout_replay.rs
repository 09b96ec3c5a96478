// ABOUTME: Command-line replay of recorded pose frames through a workout session
// ABOUTME: Prints one report per frame and a session summary with the most common form issues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Frame replay tool.
//!
//! Usage:
//! ```bash
//! # Replay a squat recording with text output
//! cargo run --bin workout-replay -- --exercise squat --input squat.jsonl
//!
//! # Plank with a 30 second target, JSON reports on stdout
//! cargo run --bin workout-replay -- --exercise plank --input plank.jsonl \
//!     --target-duration 30 --format json
//!
//! # Two-minute jumping jack set
//! cargo run --bin workout-replay -- --exercise jumping-jacks --input jacks.jsonl \
//!     --target-duration 120
//!
//! # Frames from stdin, custom thresholds, debug logging
//! cat curls.jsonl | cargo run --bin workout-replay -- --exercise curl \
//!     --thresholds thresholds.json -v
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use workout_core::config::min_visibility;
use workout_tracker::config::TrackerSettings;
use workout_tracker::logging::LoggingConfig;
use workout_tracker::replay::{parse_frames, read_frames, replay_frames, FrameRecord};
use workout_tracker::session::{ExerciseTargets, SessionSnapshot, WorkoutSession};
use workout_tracker::{ExerciseKind, ManualClock, ThresholdConfig};

/// Number of common issues shown in the summary
const SUMMARY_ISSUES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per frame
    Json,
    /// Human readable lines
    Text,
}

#[derive(Parser)]
#[command(
    name = "workout-replay",
    about = "Replay recorded pose frames through the exercise analyzers",
    long_about = "Feed newline-delimited JSON landmark frames through a workout session and print rep counts, hold timers and form feedback"
)]
struct ReplayArgs {
    /// Exercise name (squat, curl, plank, pushup, lunge, jumping-jack, ...)
    #[arg(long, short = 'e')]
    exercise: String,

    /// Frame file; reads stdin when omitted
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// JSON threshold file merged over the environment configuration
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Target duration in seconds (plank holds, timed jumping jack sets)
    #[arg(long)]
    target_duration: Option<f64>,

    /// Target reps per set
    #[arg(long)]
    target_reps: Option<u32>,

    /// Target number of sets
    #[arg(long)]
    target_sets: Option<u32>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = ReplayArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let exercise = ExerciseKind::from_name(&args.exercise).map_err(|e| anyhow!("{e}"))?;
    let settings =
        TrackerSettings::from_env().map_err(|e| anyhow!("Failed to load configuration: {e}"))?;
    let thresholds = load_thresholds(settings.thresholds, args.thresholds.as_deref())?;
    let visibility = min_visibility(&thresholds);

    let frames = load_frames(args.input.as_deref())?;
    info!(exercise = %exercise, frames = frames.len(), "Replaying frames");

    let targets = ExerciseTargets {
        reps: args.target_reps,
        sets: args.target_sets,
        duration_seconds: args.target_duration,
    };
    let clock = ManualClock::new();
    let mut session =
        WorkoutSession::new(exercise, thresholds, clock.shared()).with_targets(targets);
    let snapshots = replay_frames(&mut session, &frames, &clock, visibility);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for snapshot in &snapshots {
        print_snapshot(&mut out, snapshot, args.format)?;
    }
    print_summary(&mut out, &session, snapshots.last(), args.format)?;
    Ok(())
}

fn load_thresholds(
    mut base: ThresholdConfig,
    override_file: Option<&Path>,
) -> Result<ThresholdConfig> {
    if let Some(path) = override_file {
        let file = ThresholdConfig::from_json_file(path)
            .map_err(|e| anyhow!("Failed to load thresholds from {}: {e}", path.display()))?;
        base.merge(file);
    }
    Ok(base)
}

fn load_frames(input: Option<&Path>) -> Result<Vec<FrameRecord>> {
    match input {
        Some(path) => {
            read_frames(path).map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))
        }
        None => parse_frames(io::stdin().lock()).map_err(|e| anyhow!("Failed to read stdin: {e}")),
    }
}

fn print_snapshot(
    out: &mut impl Write,
    snapshot: &SessionSnapshot,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(snapshot)
                .map_err(|e| anyhow!("Failed to serialize frame report: {e}"))?;
            writeln!(out, "{line}")?;
        }
        OutputFormat::Text => {
            let progress = match (snapshot.elapsed_seconds, snapshot.remaining_seconds) {
                (Some(elapsed), Some(remaining)) => {
                    format!("held {elapsed:.1}s, {remaining:.1}s left")
                }
                (Some(elapsed), None) => format!("held {elapsed:.1}s"),
                _ => format!("reps {} (errors {})", snapshot.rep_count, snapshot.error_reps),
            };
            let feedback: Vec<String> = snapshot.feedback.iter().map(ToString::to_string).collect();
            writeln!(
                out,
                "#{:<5} {:<14} set {} | {} | {}",
                snapshot.frame_index,
                snapshot.state,
                snapshot.current_set,
                progress,
                feedback.join("; ")
            )?;
        }
    }
    Ok(())
}

fn print_summary(
    out: &mut impl Write,
    session: &WorkoutSession,
    last: Option<&SessionSnapshot>,
    format: OutputFormat,
) -> Result<()> {
    let issues = session.stats().common_issues(None, SUMMARY_ISSUES);
    let completions = last.map_or(0, |s| s.rep_count);
    let error_reps = last.map_or(0, |s| s.error_reps);

    match format {
        OutputFormat::Json => {
            let summary = json!({
                "summary": {
                    "session_id": session.id(),
                    "started_at": session.started_at(),
                    "exercise": session.exercise(),
                    "frames": session.frames_processed(),
                    "completions": completions,
                    "error_reps": error_reps,
                    "current_set": session.current_set(),
                    "common_issues": issues,
                }
            });
            writeln!(out, "{summary}")?;
        }
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(
                out,
                "{}: {} frames, {} completed ({} with form errors), set {}",
                session.exercise().display_name(),
                session.frames_processed(),
                completions,
                error_reps,
                session.current_set()
            )?;
            for issue in &issues {
                writeln!(out, "  {}x {}", issue.count, issue.text)?;
            }
        }
    }
    Ok(())
}
