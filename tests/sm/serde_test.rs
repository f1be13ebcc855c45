#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

#[test]
fn simfile_round_trips_through_json() {
    let SmOutput { simfile, warnings } = parse_sm(include_str!("files/long_night.sm"));
    assert_eq!(warnings, vec![]);

    let json = serde_json::to_string(&simfile).expect("simfile serializes");
    let restored: Simfile = serde_json::from_str(&json).expect("simfile deserializes");
    assert_eq!(restored, simfile);
}

#[test]
fn warnings_serialize_with_ranges() {
    let SmOutput { warnings, .. } = parse_sm("#OFFSET:x;");
    let value = serde_json::to_value(&warnings).expect("warnings serialize");

    assert_eq!(
        value,
        serde_json::json!([
            {
                "ParseWarning": {
                    "content": { "MalformedNumber": "x" },
                    "start": 0,
                    "end": 9
                }
            }
        ])
    );
}
