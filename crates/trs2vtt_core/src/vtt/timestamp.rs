//! WebVTT timestamps.
//!
//! # Precision
//!
//! Source times are decimal seconds. They are rounded to the nearest
//! microsecond first (so `1.001` stays `1.001` despite float error) and then
//! truncated to whole milliseconds.

/// Format seconds as a WebVTT timestamp (`HH:MM:SS.mmm`).
///
/// Hours are padded to two digits and grow beyond that if needed.
/// Negative input is clamped to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let micros = (seconds.max(0.0) * 1_000_000.0).round() as u64;

    let millis = (micros / 1000) % 1000;
    let total_secs = micros / 1_000_000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
}

/// Format a cue timing line (`HH:MM:SS.mmm --> HH:MM:SS.mmm`).
pub fn format_range(start: f64, end: f64) -> String {
    format!("{} --> {}", format_timestamp(start), format_timestamp(end))
}
