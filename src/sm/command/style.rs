//! Play styles of charts.

use std::fmt;

/// The play style of a chart, written right after `#NOTES:`.
///
/// A style fixes the number of lanes, so the width of every row in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    /// `dance-single`. One player on one pad.
    Single,
    /// `dance-double`. One player on two pads.
    Double,
    /// `dance-solo`. One player on a six panel pad.
    Solo,
    /// `dance-couple`. Two players, each on their own four panels.
    Couple,
}

impl Style {
    /// All the styles.
    pub const ALL: [Self; 4] = [Self::Single, Self::Double, Self::Solo, Self::Couple];

    /// Returns the number of lanes of the style.
    #[must_use]
    pub const fn lane_count(self) -> usize {
        match self {
            Self::Single | Self::Couple => 4,
            Self::Solo => 6,
            Self::Double => 8,
        }
    }

    /// Returns the keyword of the style in the source.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Single => "dance-single",
            Self::Double => "dance-double",
            Self::Solo => "dance-solo",
            Self::Couple => "dance-couple",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl<'a> TryFrom<&'a str> for Style {
    type Error = &'a str;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|style| style.keyword() == value)
            .ok_or(value)
    }
}
