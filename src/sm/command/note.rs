//! Symbols of the note grid.

use std::fmt;

/// An object occupying one lane of a row.
///
/// The parser gives them no gameplay meaning. It only checks that every character of a row
/// belongs to [`NoteObject::ALL`]. The long note bodies never appear in the source, they are
/// produced by [`crate::sm::model::Chart::with_distinct_long_note_bodies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteObject {
    /// `0`. No note on the lane.
    Empty,
    /// `1`. A tap note.
    Tap,
    /// `2`. The head of a hold note.
    HoldHead,
    /// `3`. The tail of a hold or roll note.
    Tail,
    /// `4`. The head of a roll note.
    RollHead,
    /// `M`. A mine.
    Mine,
    /// `F`. A fake note, shown but never judged.
    Fake,
    /// `L`. A lift note, judged on release.
    Lift,
    /// `K`. An automatic keysound.
    AutoKeysound,
    /// `H`. A lane held between a hold head and its tail.
    HoldBody,
    /// `R`. A lane held between a roll head and its tail.
    RollBody,
}

impl NoteObject {
    /// All the objects of the note grid.
    pub const ALL: [Self; 9] = [
        Self::Empty,
        Self::Tap,
        Self::HoldHead,
        Self::Tail,
        Self::RollHead,
        Self::Mine,
        Self::Fake,
        Self::Lift,
        Self::AutoKeysound,
    ];

    /// Returns the character of the object in the source.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Tap => '1',
            Self::HoldHead => '2',
            Self::Tail => '3',
            Self::RollHead => '4',
            Self::Mine => 'M',
            Self::Fake => 'F',
            Self::Lift => 'L',
            Self::AutoKeysound => 'K',
            Self::HoldBody => 'H',
            Self::RollBody => 'R',
        }
    }

    /// Returns `true` if the lane has nothing of its own: empty or a long note body.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Empty | Self::HoldBody | Self::RollBody)
    }

    /// Returns `true` if the object needs no player action of its own: a blank lane, a mine or a
    /// fake.
    #[must_use]
    pub const fn is_decorative(self) -> bool {
        self.is_blank() || matches!(self, Self::Mine | Self::Fake)
    }
}

impl TryFrom<char> for NoteObject {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '0' => Self::Empty,
            '1' => Self::Tap,
            '2' => Self::HoldHead,
            '3' => Self::Tail,
            '4' => Self::RollHead,
            'M' => Self::Mine,
            'F' => Self::Fake,
            'L' => Self::Lift,
            'K' => Self::AutoKeysound,
            other => return Err(other),
        })
    }
}

impl fmt::Display for NoteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
