//! Timestamp log analysis command.

use anyhow::Context;
use clap::Args;
use pulso_core::{TapData, TempoConfig, update_adaptive};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

use crate::common::resolve_config;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Timestamp log: one millisecond value per line ("-" for stdin).
    /// Blank lines and lines starting with '#' are skipped.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Tuning profile name or path
    #[arg(short, long)]
    profile: Option<String>,

    /// Override the profile's window capacity
    #[arg(long)]
    max_taps: Option<usize>,

    /// Override the profile's smoothing factor
    #[arg(long)]
    smoothing_factor: Option<f64>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// One engine update in the report.
#[derive(Debug, Serialize)]
struct TapStep {
    index: usize,
    timestamp_ms: f64,
    bpm: Option<f64>,
    raw_bpm: Option<f64>,
    tempo_change: bool,
}

/// Full analysis report.
#[derive(Debug, Serialize)]
struct Report {
    taps: usize,
    bpm: Option<f64>,
    raw_bpm: Option<f64>,
    variance: Option<f64>,
    tempo_changes: usize,
    steps: Vec<TapStep>,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = resolve_config(
        args.profile.as_deref(),
        args.max_taps,
        args.smoothing_factor,
    )?;

    let content = read_input(&args.input)?;
    let timestamps = parse_timestamps(&content)?;
    if timestamps.is_empty() {
        anyhow::bail!("no timestamps in input");
    }

    tracing::debug!(taps = timestamps.len(), "analyzing timestamp log");

    let report = analyze(&timestamps, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Analyzing {} taps...\n", report.taps);
    for step in &report.steps {
        let bpm = step
            .bpm
            .map_or_else(|| "-".to_string(), |b| format!("{b:.2}"));
        let marker = if step.tempo_change { "  (tempo change)" } else { "" };
        println!(
            "  tap {:3} @ {:10.1} ms   bpm {:>8}{}",
            step.index + 1,
            step.timestamp_ms,
            bpm,
            marker
        );
    }

    println!();
    match report.bpm {
        Some(bpm) => println!("Tempo: {bpm} BPM"),
        None => println!("Tempo: not enough taps for an estimate"),
    }
    if let Some(raw) = report.raw_bpm {
        println!("  last interval: {raw} BPM");
    }
    if let Some(variance) = report.variance {
        println!("  interval variance: {variance:.1} ms^2");
    }
    println!("  tempo changes: {}", report.tempo_changes);

    Ok(())
}

fn read_input(input: &PathBuf) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))
    }
}

/// Parse one timestamp per line, skipping blanks and '#' comments.
fn parse_timestamps(content: &str) -> anyhow::Result<Vec<f64>> {
    let mut timestamps = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value: f64 = line
            .parse()
            .with_context(|| format!("line {}: invalid timestamp '{}'", line_no + 1, line))?;
        if !value.is_finite() {
            anyhow::bail!("line {}: non-finite timestamp '{}'", line_no + 1, line);
        }
        timestamps.push(value);
    }
    Ok(timestamps)
}

fn analyze(timestamps: &[f64], config: &TempoConfig) -> Report {
    let mut data = TapData::new();
    let mut steps = Vec::with_capacity(timestamps.len());
    let mut tempo_changes = 0;

    for (index, &timestamp_ms) in timestamps.iter().enumerate() {
        data = update_adaptive(&data, timestamp_ms, config);
        if data.tempo_change_detected {
            tempo_changes += 1;
        }
        steps.push(TapStep {
            index,
            timestamp_ms,
            bpm: data.bpm,
            raw_bpm: data.raw_bpm,
            tempo_change: data.tempo_change_detected,
        });
    }

    Report {
        taps: timestamps.len(),
        bpm: data.bpm,
        raw_bpm: data.raw_bpm,
        variance: data.variance,
        tempo_changes,
        steps,
    }
}
