//! Tests for `sm_rs::sm`.

mod diagnostics_test;
mod files;
mod properties;
mod scenarios;
mod serde_test;
mod tolerance;

use pretty_assertions::assert_eq;
use sm_rs::sm::prelude::*;

/// Parses the source and asserts that no warning was reported.
pub fn parse_clean(src: &str) -> Simfile {
    let SmOutput { simfile, warnings } = parse_sm(src);
    assert_eq!(warnings, vec![]);
    simfile
}

/// Renders the rows of every measure of the chart with the SM characters.
pub fn rendered_measures(chart: &Chart) -> Vec<Vec<String>> {
    chart
        .measures
        .iter()
        .map(|measure| measure.rows().iter().map(ToString::to_string).collect())
        .collect()
}

/// Extracts the parse warnings without their ranges.
pub fn parse_warning_contents(warnings: &[SmWarning]) -> Vec<ParseWarning> {
    warnings
        .iter()
        .filter_map(|warning| match warning {
            SmWarning::ParseWarning(warning) => Some(warning.content().clone()),
            _ => None,
        })
        .collect()
}
