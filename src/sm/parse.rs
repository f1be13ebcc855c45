//! Parsing Simfile from [`TokenStream`](crate::sm::lex::TokenStream).
//!
//! Raw [String] == [lex](crate::sm::lex) ==> [`TokenStream`](crate::sm::lex::TokenStream) (in
//! [`LexOutput`](crate::sm::lex::LexOutput)) == [parse](self) ==> [`Simfile`] (in [`ParseOutput`])
//!
//! Faults are local: a malformed timing entry drops only that entry, a malformed chart drops only
//! that chart, and a malformed scalar field falls back to its absent value.

pub mod chart;
pub mod notes;
pub mod prompt;
pub mod scalar;
pub mod timing;

use std::collections::HashMap;

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use crate::diagnostics::{SimpleSource, ToAriadne, build_report};
#[cfg(feature = "diagnostics")]
use ariadne::{Color, Report, ReportKind};

use self::{
    chart::{ChartParseOutput, parse_chart},
    prompt::{FieldDuplication, Prompter},
    timing::{parse_stops, parse_tempo_changes},
};
use crate::sm::{
    command::{
        Keyword,
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
    },
    lex::token::{Token, TokenWithRange},
    model::Simfile,
};

/// A warning occurred when parsing the tokens.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// A numeric field does not parse as the expected numeric type.
    #[error("malformed number: `{0}`")]
    MalformedNumber(String),
    /// A flag field has an unexpected spelling.
    #[error("expected `YES` or `NO`, but found `{0}`")]
    UnrecognizedEnum(String),
    /// A `beat=value` entry of a timing list has wrong arity or non-numeric content.
    #[error("malformed timing pair #{index}: `{entry}`")]
    MalformedTimingPair {
        /// The index of the entry in the list.
        index: usize,
        /// The entry text.
        entry: String,
    },
    /// The style keyword of a chart is not a known one.
    #[error("unknown chart style: `{0}`")]
    UnknownStyle(String),
    /// A row of the note grid does not have as many symbols as the lanes.
    #[error("row {row} of measure {measure} has {found} lanes, expected {expected}")]
    RowWidthMismatch {
        /// The index of the measure.
        measure: usize,
        /// The index of the row in the measure.
        row: usize,
        /// The lane count of the chart style.
        expected: usize,
        /// The symbol count of the row.
        found: usize,
    },
    /// A character of the note grid is not a note object.
    #[error("unknown note object `{symbol}` at measure {measure}, row {row}, lane {lane}")]
    UnknownObjectSymbol {
        /// The offending character.
        symbol: char,
        /// The index of the measure.
        measure: usize,
        /// The index of the row in the measure.
        row: usize,
        /// The index of the lane.
        lane: usize,
    },
    /// A singleton tag appeared again, and the [`Prompter`] asked to warn about it.
    #[error("duplicating tag: {0}")]
    DuplicatingField(Keyword),
}

/// Type alias of `core::result::Result<T, ParseWarning>`
pub(crate) type Result<T> = core::result::Result<T, ParseWarning>;

/// A parse warning with position information.
pub type ParseWarningWithRange = SourceRangeMixin<ParseWarning>;

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseWarningWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "parse",
            self.content(),
            Color::Blue,
        )
    }
}

/// Simfile Parse Output
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ParseOutput {
    /// The output Simfile.
    pub simfile: Simfile,
    /// Warnings that occurred during parsing.
    pub parse_warnings: Vec<ParseWarningWithRange>,
}

impl Simfile {
    /// Parses a token stream into [`Simfile`].
    ///
    /// Tokens are folded in order. Singleton tags are resolved by `prompter` when duplicated,
    /// timing lists are appended, and every chart parsed successfully is appended.
    pub fn from_token_stream<'t, 'a: 't>(
        token_iter: impl IntoIterator<Item = &'t TokenWithRange<'a>>,
        prompter: impl Prompter,
    ) -> ParseOutput {
        let tokens: Vec<&TokenWithRange<'a>> = token_iter.into_iter().collect();
        let mut charts = parse_charts(&tokens).into_iter();
        let mut assembler = Assembler::new(prompter);
        for token in tokens {
            assembler.on_token(token, &mut charts);
        }
        assembler.finish()
    }
}

/// Parses the chart blocks ahead of the fold, in source order.
fn parse_charts(tokens: &[&TokenWithRange<'_>]) -> Vec<ChartParseOutput> {
    let values: Vec<&str> = tokens
        .iter()
        .filter_map(|token| match token.content() {
            Token::Tag {
                keyword: Keyword::Notes,
                value,
            } => Some(value.as_ref()),
            _ => None,
        })
        .collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        values.par_iter().map(|value| parse_chart(value)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        values.iter().map(|value| parse_chart(value)).collect()
    }
}

struct Assembler<P> {
    simfile: Simfile,
    /// Verbatim values of the singleton tags in effect.
    in_effect: HashMap<Keyword, String>,
    warnings: Vec<ParseWarningWithRange>,
    prompter: P,
}

impl<P: Prompter> Assembler<P> {
    fn new(prompter: P) -> Self {
        Self {
            simfile: Simfile::default(),
            in_effect: HashMap::new(),
            warnings: vec![],
            prompter,
        }
    }

    fn finish(self) -> ParseOutput {
        ParseOutput {
            simfile: self.simfile,
            parse_warnings: self.warnings,
        }
    }

    fn on_token(
        &mut self,
        token: &TokenWithRange<'_>,
        charts: &mut impl Iterator<Item = ChartParseOutput>,
    ) {
        match token.content() {
            Token::Tag {
                keyword: Keyword::Notes,
                ..
            } => {
                let Some(ChartParseOutput { chart, warnings }) = charts.next() else {
                    return;
                };
                self.warn_all(warnings, token);
                if let Some(chart) = chart {
                    log::debug!(
                        "chart {} {:?} ({}) parsed with {} measures",
                        chart.style,
                        chart.difficulty_name,
                        chart.difficulty_value,
                        chart.measures.len()
                    );
                    self.simfile.charts.push(chart);
                }
            }
            Token::Tag {
                keyword: Keyword::Bpms,
                value,
            } => {
                let (tempo_changes, warnings) = parse_tempo_changes(value);
                self.simfile.tempo_changes.extend(tempo_changes);
                self.warn_all(warnings, token);
            }
            Token::Tag {
                keyword: Keyword::Stops | Keyword::Freezes,
                value,
            } => {
                let (stops, warnings) = parse_stops(value);
                self.simfile.stops.extend(stops);
                self.warn_all(warnings, token);
            }
            Token::Tag { keyword, value } => {
                if self.accepts(*keyword, value, token) {
                    self.on_singleton(*keyword, value, token);
                } else {
                    self.check_rejected(*keyword, value, token);
                }
            }
            Token::Unknown { name, value } => {
                self.simfile
                    .opaque
                    .insert(name.to_string(), value.to_string());
            }
            Token::NotATag(text) => {
                log::debug!("statement without a tag kept verbatim: {text:?}");
                self.simfile.stray_statements.push(text.to_string());
            }
        }
    }

    /// Consults the prompter if the tag was seen before, and returns whether the value applies.
    fn accepts(&mut self, keyword: Keyword, value: &str, token: &TokenWithRange<'_>) -> bool {
        let Some(older) = self.in_effect.get(&keyword) else {
            self.in_effect.insert(keyword, value.to_owned());
            return true;
        };
        let workaround = self.prompter.handle_duplication(FieldDuplication {
            keyword,
            older,
            newer: value,
        });
        if workaround.warns() {
            self.warn(ParseWarning::DuplicatingField(keyword), token);
        }
        if workaround.uses_newer() {
            self.in_effect.insert(keyword, value.to_owned());
        }
        workaround.uses_newer()
    }

    fn on_singleton(&mut self, keyword: Keyword, value: &str, token: &TokenWithRange<'_>) {
        match keyword {
            Keyword::Title => self.simfile.title = scalar::parse_text(value).unwrap_or_default(),
            Keyword::Subtitle => {
                self.simfile.subtitle = scalar::parse_text(value).unwrap_or_default();
            }
            Keyword::Artist => self.simfile.artist = scalar::parse_text(value).unwrap_or_default(),
            Keyword::Genre => self.simfile.genre = scalar::parse_text(value).unwrap_or_default(),
            Keyword::Credit => self.simfile.credit = scalar::parse_text(value).unwrap_or_default(),
            Keyword::Banner => self.simfile.banner = scalar::parse_text(value),
            Keyword::Background => self.simfile.background = scalar::parse_text(value),
            Keyword::CdTitle => self.simfile.cd_title = scalar::parse_text(value),
            Keyword::Music => self.simfile.music = scalar::parse_text(value),
            Keyword::DisplayBpm => self.simfile.display_bpm = scalar::parse_text(value),
            Keyword::Offset => {
                let offset = self.or_warn(scalar::parse_time(value), token);
                self.simfile.offset = offset.unwrap_or_default();
            }
            Keyword::SampleStart => {
                self.simfile.sample_start = self.or_warn(scalar::parse_time(value), token);
            }
            Keyword::SampleLength => {
                self.simfile.sample_length = self.or_warn(scalar::parse_time(value), token);
            }
            Keyword::Selectable => {
                self.simfile.selectable = self.or_warn(scalar::parse_flag(value), token);
                self.keep_opaque(keyword, value);
            }
            Keyword::Animations
            | Keyword::ArtistTranslit
            | Keyword::Attacks
            | Keyword::BgChanges
            | Keyword::FgChanges
            | Keyword::KeySounds
            | Keyword::LyricsPath
            | Keyword::MenuColor
            | Keyword::SubtitleTranslit
            | Keyword::TitleTranslit
            | Keyword::Delays
            | Keyword::TimeSignatures => self.keep_opaque(keyword, value),
            // Accumulating tags are folded in `on_token`.
            Keyword::Notes | Keyword::Bpms | Keyword::Stops | Keyword::Freezes => {}
        }
    }

    /// Reports the faults of a value the prompter rejected, without applying it.
    fn check_rejected(&mut self, keyword: Keyword, value: &str, token: &TokenWithRange<'_>) {
        let fault = match keyword {
            Keyword::Offset | Keyword::SampleStart | Keyword::SampleLength => {
                scalar::parse_time(value).err()
            }
            Keyword::Selectable => scalar::parse_flag(value).err(),
            _ => None,
        };
        if let Some(fault) = fault {
            self.warn(fault, token);
        }
    }

    fn keep_opaque(&mut self, keyword: Keyword, value: &str) {
        self.simfile
            .opaque
            .insert(keyword.name().to_owned(), value.to_owned());
    }

    /// Unwraps a scalar result, recording the warning and falling back to the absent value.
    fn or_warn<T>(&mut self, result: Result<Option<T>>, token: &TokenWithRange<'_>) -> Option<T> {
        result.unwrap_or_else(|warning| {
            self.warn(warning, token);
            None
        })
    }

    fn warn(&mut self, warning: ParseWarning, token: &TokenWithRange<'_>) {
        let warning = warning.into_wrapper(token);
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    fn warn_all(&mut self, warnings: Vec<ParseWarning>, token: &TokenWithRange<'_>) {
        for warning in warnings {
            self.warn(warning, token);
        }
    }
}
