//! Entries of the timing map.
//!
//! Both lists are kept in source order. Sorting and resolving duplicated beats are left to the
//! consumer converting beats into time.

/// A tempo change, `beat=bpm` in `#BPMS`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoChange {
    /// The beat where the tempo changes.
    pub beat: f64,
    /// The tempo from the beat, in beats per minute.
    pub bpm: f64,
}

/// A stop, `beat=seconds` in `#STOPS` or `#FREEZES`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopEvent {
    /// The beat where the scroll stops.
    pub beat: f64,
    /// How long the scroll stops, in seconds. Negative values encode a warp.
    pub duration: f64,
}

impl From<(f64, f64)> for TempoChange {
    fn from((beat, bpm): (f64, f64)) -> Self {
        Self { beat, bpm }
    }
}

impl From<(f64, f64)> for StopEvent {
    fn from((beat, duration): (f64, f64)) -> Self {
        Self { beat, duration }
    }
}

impl StopEvent {
    /// Returns `true` if the stop skips forward instead of pausing.
    #[must_use]
    pub fn is_warp(&self) -> bool {
        self.duration < 0.0
    }
}
