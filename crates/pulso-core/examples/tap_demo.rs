//! Demonstration of the tap-tempo engine
//!
//! This example shows both the functional update API (explicit state
//! threading) and the TapTempo convenience wrapper, including what the
//! adaptive engine does when the tapper changes tempo mid-stream.
//!
//! Run with: cargo run --example tap_demo

use pulso_core::{TapData, TapTempo, TempoConfig, update_adaptive, update_tap_data};

fn main() {
    println!("Pulso Tap-Tempo Demo");
    println!("====================\n");

    // Example 1: functional threading through the basic engine
    println!("1. Basic Engine (full-window average)");
    println!("-------------------------------------");

    let mut data = TapData::new();
    for t in [1000.0, 1500.0, 2000.0, 2500.0, 3000.0] {
        data = update_tap_data(&data, t, 10);
        match data.bpm {
            Some(bpm) => println!("  tap @ {t:6.0} ms  ->  {bpm} BPM"),
            None => println!("  tap @ {t:6.0} ms  ->  waiting"),
        }
    }

    // Example 2: the adaptive engine tracking a deliberate slowdown
    println!("\n2. Adaptive Engine (smoothing + change detection)");
    println!("-------------------------------------------------");

    let config = TempoConfig::default();
    let mut data = TapData::new();

    // 120 BPM taps, then a switch to 60 BPM
    let taps = [
        0.0, 500.0, 1000.0, 1500.0, 2000.0, // steady 120
        3000.0, 4000.0, 5000.0, 6000.0, // slow to 60
    ];
    for t in taps {
        data = update_adaptive(&data, t, &config);
        let bpm = data.bpm.map_or_else(|| "waiting".to_string(), |b| format!("{b} BPM"));
        let marker = if data.tempo_change_detected {
            "  <- tempo change"
        } else {
            ""
        };
        println!("  tap @ {t:6.0} ms  ->  {bpm:>10}{marker}");
    }

    // Example 3: the convenience wrapper
    println!("\n3. TapTempo Wrapper");
    println!("-------------------");

    let mut tapper = TapTempo::new(TempoConfig::default().with_max_taps(4));
    for t in [0.0, 400.0, 800.0, 1200.0] {
        let _ = tapper.tap(t);
    }
    if let Some(bpm) = tapper.bpm() {
        println!("  four taps, 400 ms apart: {bpm} BPM");
    }
}
