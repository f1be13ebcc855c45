use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

use super::{parse_clean, parse_warning_contents, rendered_measures};

#[test]
fn single_chart_song() {
    let simfile = parse_clean(
        "#TITLE:Song A;#OFFSET:-0.5;#BPMS:0.000=120.000;#NOTES:dance-single::Easy:3::\n0000\n,\n1000\n;",
    );

    assert_eq!(simfile.title, "Song A");
    assert_eq!(simfile.offset, -0.5);
    assert_eq!(
        simfile.tempo_changes,
        vec![TempoChange {
            beat: 0.0,
            bpm: 120.0
        }]
    );
    assert_eq!(simfile.charts.len(), 1);
    let chart = &simfile.charts[0];
    assert_eq!(chart.style, Style::Single);
    assert_eq!(chart.lane_count(), 4);
    assert_eq!(chart.difficulty_name.as_deref(), Some("Easy"));
    assert_eq!(chart.difficulty_value, 3);
    assert_eq!(rendered_measures(chart), vec![vec!["0000"], vec!["1000"]]);
}

#[test]
fn short_row_drops_only_its_chart() {
    let SmOutput { simfile, warnings } = parse_sm(
        "#TITLE:Song B;\
         #NOTES:dance-single::Easy:1::\n0000\n000\n;\
         #BPMS:0=150;\
         #NOTES:dance-single::Hard:8::\n1000\n;",
    );

    assert_eq!(
        parse_warning_contents(&warnings),
        vec![ParseWarning::RowWidthMismatch {
            measure: 0,
            row: 1,
            expected: 4,
            found: 3,
        }]
    );
    assert_eq!(simfile.title, "Song B");
    assert_eq!(simfile.tempo_changes.len(), 1);
    assert_eq!(simfile.charts.len(), 1);
    assert_eq!(simfile.charts[0].difficulty_name.as_deref(), Some("Hard"));
    assert!(
        simfile
            .charts
            .iter()
            .flat_map(|chart| chart.rows())
            .all(|placed| placed.row.width() == 4)
    );
}

#[test]
fn empty_bpms() {
    let simfile = parse_clean("#BPMS:;");
    assert_eq!(simfile.tempo_changes, vec![]);
}

#[test]
fn later_title_wins() {
    let simfile = parse_clean("#TITLE:First;#ARTIST:A;#TITLE:Second;");
    assert_eq!(simfile.title, "Second");
    assert_eq!(simfile.artist, "A");
}
