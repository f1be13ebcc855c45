use proptest::prelude::*;

use sm_rs::sm::prelude::*;

fn decimal() -> impl Strategy<Value = f64> {
    (-100_000i64..100_000, 0u32..4).prop_map(|(scaled, digits)| {
        scaled as f64 / 10f64.powi(digits as i32)
    })
}

proptest! {
    #[test]
    fn timing_list_keeps_source_order(pairs in prop::collection::vec((decimal(), decimal()), 0..16)) {
        let text = pairs
            .iter()
            .map(|(beat, value)| format!("{beat}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        let (parsed, warnings) = parse_timing_list(&text);
        prop_assert!(warnings.is_empty());
        prop_assert_eq!(parsed, pairs);
    }

    #[test]
    fn parsing_never_panics_and_is_idempotent(source in "[#A-Z:;=,.0-9MFLK\\n -]{0,200}") {
        let first = parse_sm(&source);
        let second = parse_sm(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parsed_rows_match_lane_count(
        rows in prop::collection::vec("[0-4MFLK]{4}", 1..12),
        bad_row in prop::option::of("[0-4]{1,3}"),
    ) {
        let mut grid = rows.join("\n");
        if let Some(bad_row) = &bad_row {
            grid.push('\n');
            grid.push_str(bad_row);
        }
        let source = format!("#TITLE:P;#NOTES:dance-single::Easy:1::{grid};");
        let SmOutput { simfile, warnings } = parse_sm(&source);

        prop_assert_eq!(simfile.title.as_str(), "P");
        prop_assert!(simfile.charts.iter().flat_map(|chart| chart.rows()).all(|placed| placed.row.width() == 4));
        prop_assert_eq!(simfile.charts.len(), usize::from(bad_row.is_none()));
        prop_assert_eq!(warnings.len(), usize::from(bad_row.is_some()));
    }
}
