//! Pulso Core - tap-tempo estimation engine
//!
//! This crate turns a stream of tap timestamps (milliseconds of wall-clock
//! time) into a beats-per-minute estimate. It is a pure library: no clock,
//! no I/O, no threads. The caller supplies timestamps; the engine returns
//! new state.
//!
//! # Core Abstractions
//!
//! ## State
//!
//! - [`TapData`] - Value type holding the retained timestamps and the
//!   current estimate. Updates never mutate their input; each update
//!   returns a fresh value that the caller threads into the next call.
//! - [`TempoConfig`] - Tuning knobs: window capacity, rounding precision,
//!   smoothing weight, tempo-change and pause thresholds.
//!
//! ## Update Steps
//!
//! - [`update_tap_data`] - Basic step: sliding window, full-window average,
//!   interval-to-BPM conversion.
//! - [`update_adaptive`] - Adaptive step: adds an instantaneous estimate,
//!   exponential smoothing, pause-triggered resets, and tempo-change
//!   detection.
//! - [`TapTempo`] - Mutable convenience wrapper that owns the state and
//!   threads updates internally.
//!
//! ## Primitives
//!
//! - [`intervals`] / [`mean`] / [`mean_squared_deviation`] - Interval
//!   statistics over timestamp sequences.
//! - [`interval_to_bpm`] / [`bpm_to_interval`] - Tempo unit conversions.
//! - [`push_bounded`] - Persistent sliding-window append.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (allocation is still required for the
//! timestamp window). Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! pulso-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use pulso_core::{TapData, TempoConfig, update_adaptive};
//!
//! let config = TempoConfig::default();
//! let mut data = TapData::new();
//!
//! // Four taps, 500 ms apart: 120 BPM
//! for t in [1000.0, 1500.0, 2000.0, 2500.0] {
//!     data = update_adaptive(&data, t, &config);
//! }
//! assert_eq!(data.bpm, Some(120.0));
//! ```
//!
//! # Design Principles
//!
//! - **Pure updates**: identical inputs produce identical outputs, and the
//!   previous state is never touched
//! - **Total functions**: no update can fail or panic on any input stream
//! - **No dependencies on std**: `libm` for float math

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod adaptive;
pub mod config;
pub mod math;
pub mod stats;
pub mod tap;
pub mod tapper;
pub mod window;

// Re-export main types at crate root
pub use adaptive::{FAST_ADAPT_BOOST, update_adaptive};
pub use config::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_MAX_TAPS, DEFAULT_PAUSE_THRESHOLD_MS,
    DEFAULT_SMOOTHING_FACTOR, DEFAULT_TEMPO_CHANGE_THRESHOLD, TempoConfig,
};
pub use math::{bpm_to_interval, interval_to_bpm, round_to_places};
pub use stats::{intervals, mean, mean_squared_deviation};
pub use tap::{TapData, calculate_bpm, update_tap_data};
pub use tapper::TapTempo;
pub use window::push_bounded;
