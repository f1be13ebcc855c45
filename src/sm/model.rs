//! Definitions of the parsed simfile.
//!
//! - [`Simfile`] is the aggregate root: song metadata, the timing map and the charts.
//! - [`chart`] holds the note charts, made of [`Measure`]s of [`Row`]s.
//! - [`timing`] holds the tempo changes and stops.
//! - [`snap`] names the rhythmic position of a row.

pub mod chart;
pub mod snap;
pub mod timing;

use std::collections::BTreeMap;

pub use self::{
    chart::{Chart, Measure, PlacedRow, Row},
    snap::Snap,
    timing::{StopEvent, TempoChange},
};
use crate::sm::command::Style;

/// A parsed SM simfile.
///
/// Every field has a well-defined absent value: an empty string, `None`, zero or an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Simfile {
    /// `#TITLE`. The title of the song.
    pub title: String,
    /// `#SUBTITLE`. The subtitle of the song.
    pub subtitle: String,
    /// `#ARTIST`. The artist of the song.
    pub artist: String,
    /// `#GENRE`. The genre of the song.
    pub genre: String,
    /// `#CREDIT`. The author of the simfile.
    pub credit: String,
    /// `#BANNER`. The banner image path, not validated.
    pub banner: Option<String>,
    /// `#BACKGROUND`. The background image path, not validated.
    pub background: Option<String>,
    /// `#CDTITLE`. The CD title image path, not validated.
    pub cd_title: Option<String>,
    /// `#MUSIC`. The music file path, not validated.
    pub music: Option<String>,
    /// `#OFFSET`. Signed seconds. Negative means the first beat occurs before the audio starts.
    pub offset: f64,
    /// `#SAMPLESTART`. Start of the music preview in seconds.
    pub sample_start: Option<f64>,
    /// `#SAMPLELENGTH`. Length of the music preview in seconds.
    pub sample_length: Option<f64>,
    /// `#DISPLAYBPM`. Kept unparsed, as it may be a number, a range or `*`.
    pub display_bpm: Option<String>,
    /// `#SELECTABLE`. Whether the song is shown on the music wheel.
    pub selectable: Option<bool>,
    /// `#BPMS`. Tempo changes in source order.
    pub tempo_changes: Vec<TempoChange>,
    /// `#STOPS` and `#FREEZES`. Stops in source order.
    pub stops: Vec<StopEvent>,
    /// `#NOTES`. Charts in source order, duplicates allowed.
    pub charts: Vec<Chart>,
    /// Pass-through and unrecognized tags, from the name to the verbatim value.
    pub opaque: BTreeMap<String, String>,
    /// Statements not in the `#NAME:value` form, verbatim.
    pub stray_statements: Vec<String>,
}

impl Simfile {
    /// Iterates the charts of the style, in source order.
    pub fn charts_of(&self, style: Style) -> impl Iterator<Item = &Chart> {
        self.charts.iter().filter(move |chart| chart.style == style)
    }

    /// Returns the verbatim value of a pass-through or unrecognized tag.
    #[must_use]
    pub fn opaque_value(&self, name: &str) -> Option<&str> {
        self.opaque.get(name).map(String::as_str)
    }
}
