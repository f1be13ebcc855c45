//! Snaps, the rhythmic colors of the rows.

/// The finest common note length a row falls on, named after the arrow color StepMania gives it.
///
/// The position of a row is its fraction of the measure, and the snap is taken from the
/// denominator of that fraction in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Snap {
    /// Quarter notes.
    Red,
    /// Eighth notes.
    Blue,
    /// Twelfth notes, the quarter note triplets.
    Violet,
    /// Sixteenth notes.
    Yellow,
    /// Twenty-fourth notes.
    Pink,
    /// Thirty-second notes.
    Orange,
    /// Forty-eighth notes.
    Cyan,
    /// Sixty-fourth notes.
    Green,
    /// Anything finer or irregular.
    Gray,
}

impl Snap {
    /// Returns the note length of the snap, as a count per measure.
    #[must_use]
    pub const fn denominator(self) -> usize {
        match self {
            Self::Red => 4,
            Self::Blue => 8,
            Self::Violet => 12,
            Self::Yellow => 16,
            Self::Pink => 24,
            Self::Orange => 32,
            Self::Cyan => 48,
            Self::Green => 64,
            Self::Gray => 192,
        }
    }

    /// Returns the snap of the row `index` of a measure divided into `subdivision` rows.
    #[must_use]
    pub const fn from_position(index: usize, subdivision: usize) -> Self {
        if subdivision == 0 {
            return Self::Red;
        }
        match subdivision / gcd(index, subdivision) {
            1 | 2 | 4 => Self::Red,
            8 => Self::Blue,
            3 | 6 | 12 => Self::Violet,
            16 => Self::Yellow,
            24 => Self::Pink,
            32 => Self::Orange,
            48 => Self::Cyan,
            64 => Self::Green,
            _ => Self::Gray,
        }
    }
}

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}
