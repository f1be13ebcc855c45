//! Test diagnostics module functionality

use sm_rs::diagnostics::SimpleSource;

#[test]
fn test_simple_source_creation() {
    let source_text = "#TITLE:Test Song;\n#ARTIST:Test Composer;\n#BPMS:0=120;\n";
    let source = SimpleSource::new("test.sm", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "test.sm");
}

#[cfg(feature = "diagnostics")]
mod reports {
    use sm_rs::{
        diagnostics::{SimpleSource, ToAriadne, collect_sm_reports, emit_sm_warnings},
        sm::{SmOutput, SmWarning, parse_sm},
    };

    const SRC: &str = "#TITLE:Test;\n#OFFSET:later;\n#NOTES:dance-single::Easy:1::000;\n#BPMS:0=1";

    #[test]
    fn test_reports_for_every_warning() {
        let SmOutput { warnings, .. } = parse_sm(SRC);
        assert_eq!(warnings.len(), 3);

        let reports = collect_sm_reports("test.sm", SRC, &warnings);
        assert_eq!(reports.len(), warnings.len());
    }

    #[test]
    fn test_report_rendering_mentions_warning() {
        let SmOutput { warnings, .. } = parse_sm(SRC);
        let source = SimpleSource::new("test.sm", SRC);

        let mut rendered = vec![];
        for warning in &warnings {
            let mut buffer = Vec::new();
            warning
                .to_report(&source)
                .write(("test.sm".to_string(), ariadne::Source::from(SRC)), &mut buffer)
                .expect("writing to a Vec never fails");
            rendered.push(String::from_utf8_lossy(&buffer).into_owned());
        }

        assert!(rendered.iter().all(|report| !report.is_empty()));
        // Lex warnings come before parse warnings.
        assert!(matches!(warnings[0], SmWarning::LexWarning(_)));
        assert!(matches!(warnings[1], SmWarning::ParseWarning(_)));
    }

    #[test]
    fn test_emit_empty_warnings() {
        let empty: Vec<SmWarning> = vec![];
        emit_sm_warnings("test.sm", SRC, &empty);
    }
}
