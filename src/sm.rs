//! The parser module of SM (`.sm`) simfiles.
//!
//! This module consists of two phases: lexical analyzing and token parsing.
//!
//! `lex` module splits the source text into `;`-terminated statements and dispatches each of them
//! into a [`lex::token::Token`] by its `#KEYWORD:` prefix.
//!
//! `parse` module converts the tokens into the typed fields and charts of a [`model::Simfile`].
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input). Decoding is the caller's business.
//! - Never abort on malformed input. Every problem is reported as a warning, and the affected
//!   field, timing entry or chart is dropped alone.
//! - Do not sort or deduplicate the timing lists. It is up to the consumer converting beats into
//!   time.

pub mod command;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use crate::diagnostics::{SimpleSource, ToAriadne};
#[cfg(feature = "diagnostics")]
use ariadne::Report;

use self::{
    command::mixin::SourceRangeMixin,
    lex::{LexOutput, LexWarning, TokenStream},
    model::Simfile,
    parse::{
        ParseOutput, ParseWarning,
        prompt::{AlwaysUseNewer, Prompter},
    },
};

/// A warning occurred when parsing the SM format file.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmWarning {
    /// A warning comes from lexical analyzer.
    #[error("Warn: lex: {0}")]
    LexWarning(#[from] SourceRangeMixin<LexWarning>),
    /// A warning comes from the field, timing list or chart parsers.
    #[error("Warn: parse: {0}")]
    ParseWarning(#[from] SourceRangeMixin<ParseWarning>),
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for SmWarning {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        match self {
            Self::LexWarning(warning) => warning.to_report(src),
            Self::ParseWarning(warning) => warning.to_report(src),
        }
    }
}

/// Output of parsing a SM file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct SmOutput {
    /// The parsed simfile, as complete as the source allowed.
    pub simfile: Simfile,
    /// Warnings that occurred during parsing. Empty means a clean parse.
    pub warnings: Vec<SmWarning>,
}

impl SmOutput {
    /// Returns `true` if no warning was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parses a SM file from source text.
///
/// Duplicated singleton tags are resolved by [`AlwaysUseNewer`], so the last one wins.
///
/// # Example
///
/// ```
/// use sm_rs::sm::{SmOutput, parse_sm};
///
/// let SmOutput { simfile, warnings } = parse_sm("#TITLE:Old;#TITLE:New;#BPMS:;");
/// assert_eq!(simfile.title, "New");
/// assert!(simfile.tempo_changes.is_empty());
/// assert!(warnings.is_empty());
/// ```
pub fn parse_sm(source: &str) -> SmOutput {
    parse_sm_with_prompter(source, AlwaysUseNewer)
}

/// Parses a SM file from source text, resolving duplicated tags with `prompter`.
///
/// A step of [`parse_sm`].
pub fn parse_sm_with_prompter(source: &str, prompter: impl Prompter) -> SmOutput {
    let LexOutput {
        tokens,
        lex_warnings,
    } = TokenStream::parse_lex(source);

    let ParseOutput {
        simfile,
        parse_warnings,
    } = Simfile::from_token_stream(&tokens, prompter);

    let mut warnings: Vec<SmWarning> = lex_warnings
        .into_iter()
        .map(SmWarning::LexWarning)
        .collect();
    warnings.extend(parse_warnings.into_iter().map(SmWarning::ParseWarning));

    SmOutput { simfile, warnings }
}
