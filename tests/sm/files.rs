use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

use super::{parse_clean, rendered_measures};

#[test]
fn test_long_night() {
    let source = include_str!("files/long_night.sm");
    let simfile = parse_clean(source);

    assert_eq!(simfile.title, "Long Night");
    assert_eq!(simfile.subtitle, "(Extended Mix)");
    assert_eq!(simfile.artist, "Mikuro Xina");
    assert_eq!(simfile.genre, "Trance");
    assert_eq!(simfile.credit, "Test Stepper");
    assert_eq!(simfile.banner.as_deref(), Some("long_night-bn.png"));
    assert_eq!(simfile.background.as_deref(), Some("long_night-bg.png"));
    assert_eq!(simfile.cd_title.as_deref(), Some("./CDTitles/mx.png"));
    assert_eq!(simfile.music.as_deref(), Some("long_night.ogg"));
    assert_eq!(simfile.offset, -0.012);
    assert_eq!(simfile.sample_start, Some(42.5));
    assert_eq!(simfile.sample_length, Some(15.0));
    assert_eq!(simfile.selectable, Some(true));
    assert_eq!(simfile.display_bpm.as_deref(), Some("140.000:280.000"));

    assert_eq!(
        simfile.tempo_changes,
        vec![
            TempoChange {
                beat: 0.0,
                bpm: 140.0
            },
            TempoChange {
                beat: 64.0,
                bpm: 280.0
            },
            TempoChange {
                beat: 128.0,
                bpm: 140.0
            },
        ]
    );
    assert_eq!(
        simfile.stops,
        vec![
            StopEvent {
                beat: 32.0,
                duration: 0.429
            },
            StopEvent {
                beat: 96.0,
                duration: 0.214
            },
        ]
    );

    assert_eq!(simfile.opaque_value("TITLETRANSLIT"), Some(""));
    assert_eq!(simfile.opaque_value("KEYSOUNDS"), Some(""));
    assert!(
        simfile
            .opaque_value("BGCHANGES")
            .is_some_and(|value| value.contains("-nosongbg-"))
    );
    assert_eq!(simfile.stray_statements, Vec::<String>::new());
}

#[test]
fn test_long_night_charts() {
    let simfile = parse_clean(include_str!("files/long_night.sm"));

    assert_eq!(simfile.charts.len(), 3);
    assert_eq!(simfile.charts_of(Style::Single).count(), 2);
    assert_eq!(simfile.charts_of(Style::Double).count(), 1);
    assert_eq!(simfile.charts_of(Style::Solo).count(), 0);

    let easy = &simfile.charts[0];
    assert_eq!(easy.step_artist.as_deref(), Some("Test Stepper"));
    assert_eq!(easy.difficulty_name.as_deref(), Some("Easy"));
    assert_eq!(easy.difficulty_value, 3);
    assert_eq!(
        easy.measures
            .iter()
            .map(Measure::subdivision)
            .collect::<Vec<_>>(),
        vec![4, 4, 8]
    );
    assert_eq!(easy.count_objects(NoteObject::Tap), 4);
    assert_eq!(easy.count_objects(NoteObject::HoldHead), 1);
    assert_eq!(easy.count_objects(NoteObject::Tail), 1);
    assert_eq!(easy.count_objects(NoteObject::Mine), 2);

    let challenge = &simfile.charts[1];
    assert_eq!(challenge.difficulty_name.as_deref(), Some("Challenge"));
    assert_eq!(challenge.difficulty_value, 11);
    assert_eq!(
        rendered_measures(challenge),
        vec![
            vec!["1001", "0110", "4002", "3003"],
            vec!["1111", "0000", "FLKM", "0000"],
        ]
    );

    let double = &simfile.charts[2];
    assert_eq!(double.style, Style::Double);
    assert_eq!(double.lane_count(), 8);
    assert_eq!(double.step_artist, None);
    assert_eq!(double.difficulty_name.as_deref(), Some("Medium"));
    assert_eq!(double.difficulty_value, 6);
    assert_eq!(
        rendered_measures(double),
        vec![vec!["10000001", "00011000"], vec!["00000000"]]
    );
}

#[test]
fn test_row_placement() {
    let simfile = parse_clean(include_str!("files/long_night.sm"));
    let easy = &simfile.charts[0];

    let holds: Vec<_> = easy
        .rows()
        .filter(|placed| !placed.row.is_blank())
        .map(|placed| (placed.measure, placed.index, placed.subdivision))
        .collect();
    assert_eq!(
        holds,
        vec![
            (1, 0, 4),
            (1, 1, 4),
            (1, 2, 4),
            (1, 3, 4),
            (2, 0, 8),
            (2, 2, 8),
            (2, 7, 8),
        ]
    );

    let mine_row = easy
        .rows()
        .last()
        .map(|placed| placed.row.clone())
        .unwrap_or_default();
    assert!(mine_row.is_decorative());
    assert_eq!(mine_row.lanes_of(NoteObject::Mine).collect::<Vec<_>>(), vec![0, 3]);
}

#[test]
fn test_row_analysis() {
    let simfile = parse_clean(include_str!("files/long_night.sm"));
    let easy = &simfile.charts[0];

    let snaps: Vec<_> = easy
        .non_blank_rows()
        .map(|placed| (placed.measure, placed.index, placed.snap()))
        .collect();
    assert_eq!(
        snaps,
        vec![
            (1, 0, Snap::Red),
            (1, 1, Snap::Red),
            (1, 2, Snap::Red),
            (1, 3, Snap::Red),
            (2, 0, Snap::Red),
            (2, 2, Snap::Red),
            (2, 7, Snap::Blue),
        ]
    );

    let distinct = easy.with_distinct_long_note_bodies();
    assert_eq!(
        rendered_measures(&distinct)[2],
        vec!["2000", "H000", "3000", "0000", "0000", "0000", "0000", "M00M"]
    );
    assert_eq!(distinct.count_objects(NoteObject::HoldBody), 1);
}
