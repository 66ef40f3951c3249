//! Interactive tap command.

use clap::Args;
use pulso_core::TapTempo;
use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::resolve_config;

#[derive(Args)]
pub struct TapArgs {
    /// Tuning profile name or path
    #[arg(short, long)]
    profile: Option<String>,

    /// Override the profile's window capacity
    #[arg(long)]
    max_taps: Option<usize>,
}

pub fn run(args: TapArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.profile.as_deref(), args.max_taps, None)?;
    let mut tapper = TapTempo::new(config);

    println!("Tap Enter to the beat. 'r' + Enter resets, 'q' + Enter quits.");
    println!("Press Ctrl+C to stop...\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while running.load(Ordering::SeqCst) {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            // Interrupted by the Ctrl+C handler, or stdin closed
            Some(Err(_)) | None => break,
        };

        match line.trim() {
            "q" => break,
            "r" => {
                tapper.reset();
                println!("  (reset)");
                continue;
            }
            _ => {}
        }

        let _ = tapper.tap(now_ms()?);
        print_status(&tapper);
    }

    println!();
    match tapper.bpm() {
        Some(bpm) => println!("Final tempo: {bpm} BPM over {} taps", tapper.data().timestamps.len()),
        None => println!("Not enough taps for an estimate."),
    }

    Ok(())
}

/// Wall-clock time in milliseconds since the Unix epoch.
fn now_ms() -> anyhow::Result<f64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("system clock is before the Unix epoch: {e}"))?;
    Ok(elapsed.as_secs_f64() * 1000.0)
}

fn print_status(tapper: &TapTempo) {
    let data = tapper.data();
    match data.bpm {
        None => println!("  tap {}: waiting for more taps", data.timestamps.len()),
        Some(bpm) => {
            let marker = if data.tempo_change_detected {
                "  (tempo change)"
            } else {
                ""
            };
            println!("  {bpm:>7.2} BPM{marker}");
        }
    }
}
