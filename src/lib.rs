//! The SM format parser.
//!
//! SM (`.sm`) is the simfile format of StepMania and its ancestors. A simfile describes the song
//! metadata, its timing map (BPM changes and stops) and one or more note charts for the dance
//! play styles.
//!
//! # Usage
//!
//! Parse the whole text at once with [`sm::parse_sm`]. It never fails: the best-effort
//! [`sm::model::Simfile`] is returned together with every warning found on the way.
//!
//! ```
//! use sm_rs::sm::{SmOutput, parse_sm};
//!
//! let source = "#TITLE:Song A;#OFFSET:-0.5;#BPMS:0.000=120.000;\
//!     #NOTES:dance-single::Easy:3::\n0000\n,\n1000\n;";
//! let SmOutput { simfile, warnings } = parse_sm(source);
//! assert!(warnings.is_empty());
//! assert_eq!(simfile.title, "Song A");
//! assert_eq!(simfile.charts.len(), 1);
//! assert_eq!(simfile.charts[0].lane_count(), 4);
//! ```
//!
//! # Features
//!
//! - `diagnostics` (default): renders warnings with [`ariadne`](https://docs.rs/ariadne).
//! - `serde`: derives `Serialize`/`Deserialize` on the data model.
//! - `parallel`: parses chart blocks on the `rayon` thread pool.
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod diagnostics;
pub mod sm;
