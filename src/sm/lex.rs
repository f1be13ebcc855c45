//! Lexical analyzer of SM format.
//!
//! Raw [String] == [`TokenStream::parse_lex`] ==> [`TokenStream`] (in [`LexOutput`]) ==
//! [`crate::sm::parse`] ==> [`crate::sm::model::Simfile`] (in
//! [`crate::sm::parse::ParseOutput`])

pub mod cursor;
pub mod token;

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use crate::diagnostics::{SimpleSource, ToAriadne, build_report};
#[cfg(feature = "diagnostics")]
use ariadne::{Color, Report, ReportKind};

use crate::sm::command::mixin::{SourceRangeMixin, SourceRangeMixinExt};

use self::{
    cursor::Cursor,
    token::{Token, TokenWithRange},
};

/// A warning occurred when lexical analysis.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexWarning {
    /// The source ended before the `;` closing the last statement. The statement is dropped.
    #[error("statement is not terminated by `;` before the end of input")]
    UnterminatedStatement,
}

/// A lex warning with position information.
pub type LexWarningWithRange = SourceRangeMixin<LexWarning>;

#[cfg(feature = "diagnostics")]
impl ToAriadne for LexWarningWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "lex",
            self.content(),
            Color::Yellow,
        )
    }
}

/// The tokens of a SM source, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenStream<'a> {
    /// The tokens.
    pub tokens: Vec<TokenWithRange<'a>>,
}

/// Lex Parsing Results, includes tokens and warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct LexOutput<'a> {
    /// tokens
    pub tokens: TokenStream<'a>,
    /// warnings
    pub lex_warnings: Vec<LexWarningWithRange>,
}

impl<'a> TokenStream<'a> {
    /// Analyzes and converts the SM format text into [`TokenStream`].
    pub fn parse_lex(source: &'a str) -> LexOutput<'a> {
        let mut tokens = vec![];
        let mut lex_warnings = vec![];
        for statement in Cursor::new(source) {
            match statement {
                Ok(statement) => {
                    let range = statement.range();
                    let token = Token::from_statement(statement.into_content());
                    log::trace!("lexed {token} at {range:?}");
                    tokens.push(token.into_wrapper_range(range));
                }
                Err(warning) => {
                    log::warn!("{warning}");
                    lex_warnings.push(warning);
                }
            }
        }
        LexOutput {
            tokens: TokenStream { tokens },
            lex_warnings,
        }
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, TokenWithRange<'a>> {
        self.tokens.iter()
    }
}

impl<'t, 'a> IntoIterator for &'t TokenStream<'a> {
    type Item = &'t TokenWithRange<'a>;
    type IntoIter = std::slice::Iter<'t, TokenWithRange<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
