//! Parser of the note grid, the last field of `#NOTES`.
//!
//! Measures are separated by `,` and each non-blank line of a measure is one row.

use super::{ParseWarning, Result};
use crate::sm::{
    command::{NoteObject, Style},
    model::{Measure, Row},
};

/// Parses the note grid for the style.
///
/// A blank body has no measures. A measure without rows is kept as silence.
///
/// # Errors
///
/// Returns the first [`ParseWarning::RowWidthMismatch`] or [`ParseWarning::UnknownObjectSymbol`]
/// found. The caller drops the whole chart then.
pub fn parse_note_grid(body: &str, style: Style) -> Result<Vec<Measure>> {
    if body.trim().is_empty() {
        return Ok(vec![]);
    }
    body.split(',')
        .enumerate()
        .map(|(measure, text)| parse_measure(measure, text, style.lane_count()))
        .collect()
}

fn parse_measure(measure: usize, text: &str, lane_count: usize) -> Result<Measure> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| parse_row(measure, row, line, lane_count))
        .collect::<Result<Vec<_>>>()
        .map(Measure::new)
}

fn parse_row(measure: usize, row: usize, line: &str, lane_count: usize) -> Result<Row> {
    let found = line.chars().count();
    if found != lane_count {
        return Err(ParseWarning::RowWidthMismatch {
            measure,
            row,
            expected: lane_count,
            found,
        });
    }
    line.chars()
        .enumerate()
        .map(|(lane, symbol)| {
            NoteObject::try_from(symbol).map_err(|symbol| ParseWarning::UnknownObjectSymbol {
                symbol,
                measure,
                row,
                lane,
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Row::new)
}
