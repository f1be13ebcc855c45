//! Prompting interface and utilities.
//!
//! An object implementing [`Prompter`] is required by [`crate::sm::model::Simfile::from_token_stream`].
//! It decides which value survives when a singleton tag such as `#TITLE` appears more than once.
//! Timing lists and charts are never prompted, they accumulate.
//! A rejected value is still checked, so a malformed duplicate reports its fault even though the
//! older value stays in effect.

use crate::sm::command::Keyword;

/// An interface to prompt about handling conflicts on the SM file.
pub trait Prompter {
    /// Determines a [`DuplicationWorkaround`] for a duplicated tag.
    fn handle_duplication(&self, duplication: FieldDuplication<'_>) -> DuplicationWorkaround;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn handle_duplication(&self, duplication: FieldDuplication<'_>) -> DuplicationWorkaround {
        T::handle_duplication(self, duplication)
    }
}

/// It represents that a singleton tag appeared again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDuplication<'a> {
    /// The duplicated keyword.
    pub keyword: Keyword,
    /// The verbatim value currently in effect.
    pub older: &'a str,
    /// The verbatim incoming value.
    pub newer: &'a str,
}

/// A choice to handle the duplicated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DuplicationWorkaround {
    /// Choose to use the existing one.
    UseOlder,
    /// Choose to use the incoming one.
    UseNewer,
    /// Choose to use the existing one, and warn about it.
    WarnAndUseOlder,
    /// Choose to use the incoming one, and warn about it.
    WarnAndUseNewer,
}

impl DuplicationWorkaround {
    /// Returns `true` if the incoming value replaces the existing one.
    #[must_use]
    pub const fn uses_newer(self) -> bool {
        matches!(self, Self::UseNewer | Self::WarnAndUseNewer)
    }

    /// Returns `true` if the duplication is reported as a warning.
    #[must_use]
    pub const fn warns(self) -> bool {
        matches!(self, Self::WarnAndUseOlder | Self::WarnAndUseNewer)
    }
}

/// The strategy that always using older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseOlder;

impl Prompter for AlwaysUseOlder {
    fn handle_duplication(&self, _: FieldDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseOlder
    }
}

/// The strategy that always using newer ones. The last tag wins, as the game does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseNewer;

impl Prompter for AlwaysUseNewer {
    fn handle_duplication(&self, _: FieldDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseNewer
    }
}

/// The strategy that always warns and uses older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysWarnAndUseOlder;

impl Prompter for AlwaysWarnAndUseOlder {
    fn handle_duplication(&self, _: FieldDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::WarnAndUseOlder
    }
}

/// The strategy that always warns and uses newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysWarnAndUseNewer;

impl Prompter for AlwaysWarnAndUseNewer {
    fn handle_duplication(&self, _: FieldDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::WarnAndUseNewer
    }
}
