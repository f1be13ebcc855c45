//! Definitions of the token in SM format.

use std::{borrow::Cow, fmt};

use crate::sm::command::{Keyword, mixin::SourceRangeMixin};

/// A token content of SM format, made from one statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum Token<'a> {
    /// `#KEYWORD:value` with a recognized [`Keyword`].
    Tag {
        /// The keyword before `:`.
        keyword: Keyword,
        /// Everything after the first `:`, untouched.
        value: Cow<'a, str>,
    },
    /// `#NAME:value` whose name is not a recognized keyword. It is kept for forward compatibility.
    Unknown {
        /// The name between `#` and the first `:`.
        name: Cow<'a, str>,
        /// Everything after the first `:`, untouched.
        value: Cow<'a, str>,
    },
    /// A statement not in the `#NAME:value` form.
    NotATag(Cow<'a, str>),
}

/// A token with position information.
pub type TokenWithRange<'a> = SourceRangeMixin<Token<'a>>;

impl<'a> Token<'a> {
    /// Dispatches a statement by its `#KEYWORD:` prefix.
    ///
    /// This never fails. Keywords are matched case-sensitively.
    #[must_use]
    pub fn from_statement(statement: Cow<'a, str>) -> Self {
        let Some(colon) = statement
            .strip_prefix('#')
            .and_then(|tagged| tagged.find(':'))
        else {
            return Self::NotATag(statement);
        };
        // `#` is one byte.
        let name = sub_cow(&statement, 1..colon + 1);
        let value = sub_cow(&statement, colon + 2..statement.len());
        match Keyword::from_name(&name) {
            Some(keyword) => Self::Tag { keyword, value },
            None => {
                log::debug!("unrecognized tag `#{name}`, kept as opaque");
                Self::Unknown { name, value }
            }
        }
    }

    /// Returns the value of a tag, or `None` for [`Token::NotATag`].
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Tag { value, .. } | Self::Unknown { value, .. } => Some(value),
            Self::NotATag(_) => None,
        }
    }

    /// Makes the token independent of the source text.
    #[must_use]
    pub fn into_owned(self) -> Token<'static> {
        match self {
            Self::Tag { keyword, value } => Token::Tag {
                keyword,
                value: Cow::Owned(value.into_owned()),
            },
            Self::Unknown { name, value } => Token::Unknown {
                name: Cow::Owned(name.into_owned()),
                value: Cow::Owned(value.into_owned()),
            },
            Self::NotATag(text) => Token::NotATag(Cow::Owned(text.into_owned())),
        }
    }
}

fn sub_cow<'a>(text: &Cow<'a, str>, range: std::ops::Range<usize>) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(&s[range]),
        Cow::Owned(s) => Cow::Owned(s[range].to_owned()),
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag { keyword, value } => write!(f, "{keyword}:{value};"),
            Self::Unknown { name, value } => write!(f, "#{name}:{value};"),
            Self::NotATag(text) => write!(f, "{text};"),
        }
    }
}
