//! Prelude module for the SM parser.
//!
//! This module re-exports all public types from the SM module for convenient access.
//! You can use `use sm_rs::sm::prelude::*;` to import all SM types at once.

// Re-export diagnostics from the crate level
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, collect_sm_reports, emit_sm_warnings};

// Re-export types from sm module
pub use super::{
    SmOutput, SmWarning,
    command::{
        Keyword, NoteObject, Style,
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
    },
    lex::{
        LexOutput, LexWarning, LexWarningWithRange, TokenStream,
        cursor::{Cursor, Statement},
        token::{Token, TokenWithRange},
    },
    model::{
        Simfile,
        chart::{Chart, Measure, PlacedRow, Row},
        snap::Snap,
        timing::{StopEvent, TempoChange},
    },
    parse::{
        ParseOutput, ParseWarning, ParseWarningWithRange,
        chart::{ChartParseOutput, parse_chart},
        notes::parse_note_grid,
        prompt::{
            AlwaysUseNewer, AlwaysUseOlder, AlwaysWarnAndUseNewer, AlwaysWarnAndUseOlder,
            DuplicationWorkaround, FieldDuplication, Prompter,
        },
        scalar::{parse_decimal, parse_flag, parse_int, parse_text, parse_time},
        timing::{parse_stops, parse_tempo_changes, parse_timing_list},
    },
    parse_sm, parse_sm_with_prompter,
};
