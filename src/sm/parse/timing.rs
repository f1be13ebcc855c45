//! This module handles the timing lists:
//!
//! - `#BPMS:beat=bpm,beat=bpm,...` - Tempo changes.
//! - `#STOPS:beat=seconds,...` / `#FREEZES:beat=seconds,...` - Stops.
//!
//! Entries are kept in source order. A malformed entry is skipped alone.

use itertools::Itertools;

use super::{ParseWarning, scalar::parse_decimal};
use crate::sm::model::{StopEvent, TempoChange};

/// Parses a comma-separated list of `first=second` decimal pairs.
///
/// Blank entries, such as the one after a trailing comma, are ignored. Every other entry without
/// exactly one `=` or with a non-decimal half is reported as [`ParseWarning::MalformedTimingPair`]
/// and skipped.
#[must_use]
pub fn parse_timing_list(value: &str) -> (Vec<(f64, f64)>, Vec<ParseWarning>) {
    let mut pairs = vec![];
    let mut warnings = vec![];
    for (index, entry) in value.split(',').map(str::trim).enumerate() {
        if entry.is_empty() {
            continue;
        }
        match parse_pair(entry) {
            Some(pair) => pairs.push(pair),
            None => warnings.push(ParseWarning::MalformedTimingPair {
                index,
                entry: entry.to_owned(),
            }),
        }
    }
    (pairs, warnings)
}

fn parse_pair(entry: &str) -> Option<(f64, f64)> {
    let (first, second) = entry.split('=').map(str::trim).collect_tuple()?;
    Some((parse_decimal(first).ok()?, parse_decimal(second).ok()?))
}

/// Parses the value of `#BPMS`.
#[must_use]
pub fn parse_tempo_changes(value: &str) -> (Vec<TempoChange>, Vec<ParseWarning>) {
    let (pairs, warnings) = parse_timing_list(value);
    (pairs.into_iter().map(TempoChange::from).collect(), warnings)
}

/// Parses the value of `#STOPS` or `#FREEZES`.
#[must_use]
pub fn parse_stops(value: &str) -> (Vec<StopEvent>, Vec<ParseWarning>) {
    let (pairs, warnings) = parse_timing_list(value);
    (pairs.into_iter().map(StopEvent::from).collect(), warnings)
}
