//! This module handles the `#NOTES` tag:
//!
//! - `#NOTES:style:step_artist:difficulty_name:difficulty_value:radar_values:note_grid;`
//!
//! Older files omit the step artist: `#NOTES:style:difficulty_name:difficulty_value:radar_values:note_grid;`.

use super::{ParseWarning, notes::parse_note_grid, scalar};
use crate::sm::{command::Style, model::Chart};

/// Output of [`parse_chart`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ChartParseOutput {
    /// The chart, or `None` if the chart was aborted.
    pub chart: Option<Chart>,
    /// Warnings found in the chart, in order.
    pub warnings: Vec<ParseWarning>,
}

/// The `:`-separated fields of a `#NOTES` value.
struct ChartFields<'a> {
    style: &'a str,
    step_artist: Option<&'a str>,
    difficulty_name: Option<&'a str>,
    difficulty_value: Option<&'a str>,
    radar_values: Option<&'a str>,
    note_grid: &'a str,
}

impl<'a> ChartFields<'a> {
    fn split(value: &'a str) -> Self {
        let parts: Vec<&str> = value.splitn(6, ':').collect();
        match parts.as_slice() {
            &[style, step_artist, name, meter, radar, grid] => Self {
                style,
                step_artist: Some(step_artist),
                difficulty_name: Some(name),
                difficulty_value: Some(meter),
                radar_values: Some(radar),
                note_grid: grid,
            },
            &[style, name, meter, radar, grid] => Self {
                style,
                step_artist: None,
                difficulty_name: Some(name),
                difficulty_value: Some(meter),
                radar_values: Some(radar),
                note_grid: grid,
            },
            &[style, ref middle @ .., grid] => Self {
                style,
                step_artist: middle.first().copied(),
                difficulty_name: middle.get(1).copied(),
                difficulty_value: None,
                radar_values: None,
                note_grid: grid,
            },
            &[style] => Self {
                style,
                step_artist: None,
                difficulty_name: None,
                difficulty_value: None,
                radar_values: None,
                note_grid: "",
            },
            [] => Self {
                style: "",
                step_artist: None,
                difficulty_name: None,
                difficulty_value: None,
                radar_values: None,
                note_grid: "",
            },
        }
    }
}

/// Parses the value of a `#NOTES` tag into a [`Chart`].
///
/// An unknown style or a malformed note grid aborts the chart. A malformed difficulty value falls
/// back to zero, and the radar values are checked then discarded.
pub fn parse_chart(value: &str) -> ChartParseOutput {
    let fields = ChartFields::split(value);
    let mut warnings = vec![];

    let style_keyword = fields.style.trim();
    let style = match Style::try_from(style_keyword) {
        Ok(style) => style,
        Err(unknown) => {
            warnings.push(ParseWarning::UnknownStyle(unknown.to_owned()));
            return ChartParseOutput {
                chart: None,
                warnings,
            };
        }
    };

    let difficulty_value = match fields.difficulty_value.map(scalar::parse_int) {
        Some(Ok(Some(value))) => value,
        Some(Ok(None)) | None => 0,
        Some(Err(warning)) => {
            warnings.push(warning);
            0
        }
    };

    if let Some(radar_values) = fields.radar_values {
        warnings.extend(check_radar_values(radar_values));
    }

    let measures = match parse_note_grid(fields.note_grid, style) {
        Ok(measures) => measures,
        Err(warning) => {
            warnings.push(warning);
            return ChartParseOutput {
                chart: None,
                warnings,
            };
        }
    };

    ChartParseOutput {
        chart: Some(Chart {
            style,
            step_artist: fields.step_artist.and_then(scalar::parse_text),
            difficulty_name: fields.difficulty_name.and_then(scalar::parse_text),
            difficulty_value,
            measures,
        }),
        warnings,
    }
}

/// Radar values are comma-separated decimals. They are not kept.
fn check_radar_values(radar_values: &str) -> Vec<ParseWarning> {
    radar_values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter_map(|value| scalar::parse_decimal(value).err())
        .collect()
}
