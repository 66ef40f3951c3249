//! Persistent sliding-window append for timestamp buffers.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Append a timestamp to a window, keeping at most the newest `max_len`
/// entries.
///
/// Returns a new vector; the input slice is never modified. Entries stay in
/// their original chronological order, and eviction is strictly from the
/// front (oldest first). A `max_len` of zero is treated as one, so the
/// newest timestamp is always retained.
///
/// # Example
/// ```rust
/// use pulso_core::push_bounded;
///
/// let window = push_bounded(&[1000.0, 1500.0, 2000.0], 2500.0, 3);
/// assert_eq!(window, vec![1500.0, 2000.0, 2500.0]);
/// ```
pub fn push_bounded(timestamps: &[f64], timestamp_ms: f64, max_len: usize) -> Vec<f64> {
    let max_len = max_len.max(1);
    let skip = (timestamps.len() + 1).saturating_sub(max_len);
    let mut window = Vec::with_capacity((timestamps.len() + 1).min(max_len));
    window.extend_from_slice(&timestamps[skip.min(timestamps.len())..]);
    window.push(timestamp_ms);
    window
}
