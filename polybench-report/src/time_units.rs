//! Human-readable durations
//!
//! A duration starts out in nanoseconds and is then re-expressed in each
//! larger unit in ascending order. Every unit whose scaled value exceeds one
//! replaces the previous choice, so the last satisfied rule wins.
//!
//! The scale keeps the report format of earlier runs comparable: one "ms."
//! step is 100 000 ns, one "sec." is 1 000 of those and one "min." is 60 sec.

use std::fmt;

/// Nanoseconds per "ms." step
pub const NS_PER_MS_UNIT: f64 = 100_000.0;

/// "ms." steps per "sec."
pub const MS_UNITS_PER_SEC: f64 = 1_000.0;

/// Seconds per minute
pub const SECS_PER_MIN: f64 = 60.0;

/// Display unit for a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Nanoseconds
    Nanos,
    /// Milliseconds
    Millis,
    /// Seconds
    Secs,
    /// Minutes
    Mins,
}

impl TimeUnit {
    /// Suffix written to reports
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns.",
            TimeUnit::Millis => "ms.",
            TimeUnit::Secs => "sec.",
            TimeUnit::Mins => "min.",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Pick the display unit and scaled value for a duration in nanoseconds
pub fn scale_duration(ns: f64) -> (f64, TimeUnit) {
    let millis = ns / NS_PER_MS_UNIT;
    let secs = millis / MS_UNITS_PER_SEC;
    let mins = secs / SECS_PER_MIN;

    let mut scaled = (ns, TimeUnit::Nanos);
    if millis > 1.0 {
        scaled = (millis, TimeUnit::Millis);
    }
    if secs > 1.0 {
        scaled = (secs, TimeUnit::Secs);
    }
    if mins > 1.0 {
        scaled = (mins, TimeUnit::Mins);
    }
    scaled
}

/// Render nanoseconds as `<value> <unit>` with six decimal places
pub fn format_readable_time(ns: u64) -> String {
    let (value, unit) = scale_duration(ns as f64);
    format!("{:.6} {}", value, unit)
}
