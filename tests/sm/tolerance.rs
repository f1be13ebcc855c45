//! Malformed input is reported, never fatal.

use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

use super::{parse_clean, parse_warning_contents};

#[test]
fn unknown_keywords_are_kept_verbatim() {
    let with_unknown = parse_clean(
        "#TITLE:Song;#FUTURETAG:a:b=c;#title:lowercase;#BPMS:0=120;#NOTES:dance-solo::Beginner:1::000000;",
    );
    let without_unknown = parse_clean("#TITLE:Song;#BPMS:0=120;#NOTES:dance-solo::Beginner:1::000000;");

    assert_eq!(with_unknown.opaque_value("FUTURETAG"), Some("a:b=c"));
    assert_eq!(with_unknown.opaque_value("title"), Some("lowercase"));
    assert_eq!(with_unknown.title, "Song");
    assert_eq!(with_unknown.tempo_changes, without_unknown.tempo_changes);
    assert_eq!(with_unknown.charts, without_unknown.charts);
}

#[test]
fn malformed_timing_entries_are_skipped() {
    let SmOutput { simfile, warnings } = parse_sm("#BPMS:0=120,4=,8=240;#STOPS:1=0.5=2,2=0.25;");

    assert_eq!(
        parse_warning_contents(&warnings),
        vec![
            ParseWarning::MalformedTimingPair {
                index: 1,
                entry: "4=".to_string(),
            },
            ParseWarning::MalformedTimingPair {
                index: 0,
                entry: "1=0.5=2".to_string(),
            },
        ]
    );
    assert_eq!(
        simfile
            .tempo_changes
            .iter()
            .map(|change| change.beat)
            .collect::<Vec<_>>(),
        vec![0.0, 8.0]
    );
    assert_eq!(
        simfile.stops,
        vec![StopEvent {
            beat: 2.0,
            duration: 0.25
        }]
    );
}

#[test]
fn malformed_scalars_fall_back_to_absent() {
    let SmOutput { simfile, warnings } =
        parse_sm("#OFFSET:1.2.3;#SAMPLESTART:12s;#SAMPLELENGTH:10;#SELECTABLE:sometimes;");

    assert_eq!(
        parse_warning_contents(&warnings),
        vec![
            ParseWarning::MalformedNumber("1.2.3".to_string()),
            ParseWarning::MalformedNumber("12s".to_string()),
            ParseWarning::UnrecognizedEnum("sometimes".to_string()),
        ]
    );
    assert_eq!(simfile.offset, 0.0);
    assert_eq!(simfile.sample_start, None);
    assert_eq!(simfile.sample_length, Some(10.0));
    assert_eq!(simfile.selectable, None);
}

#[test]
fn bad_charts_do_not_stop_the_parse() {
    let SmOutput { simfile, warnings } = parse_sm(
        "#NOTES:dance-quad::Easy:1::0000;\
         #NOTES:dance-single::Easy:1::00X0;\
         #NOTES:dance-couple::Hard:x::0000;\
         #ARTIST:Still Here;",
    );

    assert_eq!(
        parse_warning_contents(&warnings),
        vec![
            ParseWarning::UnknownStyle("dance-quad".to_string()),
            ParseWarning::UnknownObjectSymbol {
                symbol: 'X',
                measure: 0,
                row: 0,
                lane: 2,
            },
            ParseWarning::MalformedNumber("x".to_string()),
        ]
    );
    assert_eq!(simfile.charts.len(), 1);
    assert_eq!(simfile.charts[0].style, Style::Couple);
    assert_eq!(simfile.charts[0].difficulty_value, 0);
    assert_eq!(simfile.artist, "Still Here");
}

#[test]
fn warnings_point_at_their_statements() {
    const SRC: &str = "#TITLE:ok;\n#OFFSET:bad;\n#BPMS:0=1,x;";
    let SmOutput { warnings, .. } = parse_sm(SRC);

    let spans: Vec<_> = warnings
        .iter()
        .map(|warning| match warning {
            SmWarning::ParseWarning(warning) => &SRC[warning.range()],
            SmWarning::LexWarning(warning) => &SRC[warning.range()],
            _ => "",
        })
        .collect();
    assert_eq!(spans, vec!["#OFFSET:bad", "#BPMS:0=1,x"]);
}

#[test]
fn unterminated_statement_is_dropped() {
    const SRC: &str = "#TITLE:Kept;\n#NOTES:dance-single::Easy:1::\n1000\n";
    let SmOutput { simfile, warnings } = parse_sm(SRC);

    assert_eq!(simfile.title, "Kept");
    assert_eq!(simfile.charts, vec![]);
    assert_eq!(warnings.len(), 1);
    let SmWarning::LexWarning(warning) = &warnings[0] else {
        panic!("expected a lex warning, got {:?}", warnings[0]);
    };
    assert_eq!(warning.content(), &LexWarning::UnterminatedStatement);
    assert!(SRC[warning.range()].starts_with("#NOTES"));
}

#[test]
fn comments_and_stray_statements() {
    let simfile = parse_clean(
        "// header; with a semicolon\n#TITLE:Song // trailing comment\n;\nnot a tag;\n#ARTIST;",
    );

    assert_eq!(simfile.title, "Song");
    assert_eq!(
        simfile.stray_statements,
        vec!["not a tag".to_string(), "#ARTIST".to_string()]
    );
}

#[test]
fn chart_order_is_source_order() {
    let source: String = (1..=24)
        .map(|level| format!("#NOTES:dance-single::Edit:{level}::1000\n,\n0001;\n"))
        .collect();
    let simfile = parse_clean(&source);

    assert_eq!(
        simfile
            .charts
            .iter()
            .map(|chart| chart.difficulty_value)
            .collect::<Vec<_>>(),
        (1..=24).collect::<Vec<u32>>()
    );
}

#[test]
fn parsing_is_idempotent() {
    let source = include_str!("files/long_night.sm");
    assert_eq!(parse_sm(source), parse_sm(source));

    let broken = "#TITLE:a;#BPMS:x;#NOTES:dance-single::Easy:1::000;#OFFSET";
    assert_eq!(parse_sm(broken), parse_sm(broken));
}

#[test]
fn byte_order_mark_is_ignored() {
    let simfile = parse_clean("\u{feff}#TITLE:Song A;#ARTIST:X;");

    assert_eq!(simfile.title, "Song A");
    assert_eq!(simfile.artist, "X");
    assert_eq!(simfile.stray_statements, Vec::<String>::new());
}

#[test]
fn warning_span_ends_at_statement_content() {
    let source = "#OFFSET:soon   // later\n;";
    let SmOutput { warnings, .. } = parse_sm(source);

    let [SmWarning::ParseWarning(warning)] = warnings.as_slice() else {
        panic!("expected a single parse warning, got {warnings:?}");
    };
    assert_eq!(&source[warning.range()], "#OFFSET:soon");
}
