//! Definitions of command argument data.
//!
//! - [`Keyword`] is the closed set of `#KEYWORD:` tags understood by the dispatcher.
//! - [`style::Style`] is the play style of a chart, which fixes its lane count.
//! - [`note::NoteObject`] is a symbol of the note grid.

pub mod mixin;
pub mod note;
pub mod style;

use std::fmt;

pub use self::{note::NoteObject, style::Style};

/// A recognized top-level tag of the SM format, written as `#KEYWORD:value;`.
///
/// Keywords are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Keyword {
    /// `#TITLE`. The title of the song.
    Title,
    /// `#SUBTITLE`. The subtitle of the song.
    Subtitle,
    /// `#ARTIST`. The artist of the song.
    Artist,
    /// `#GENRE`. The genre of the song.
    Genre,
    /// `#CREDIT`. The author of the simfile.
    Credit,
    /// `#BANNER`. The path to the banner image.
    Banner,
    /// `#BACKGROUND`. The path to the background image.
    Background,
    /// `#CDTITLE`. The path to the CD title image.
    CdTitle,
    /// `#MUSIC`. The path to the music file.
    Music,
    /// `#OFFSET`. Seconds from the start of the music to the first beat, negated.
    Offset,
    /// `#SAMPLESTART`. Start of the music preview in seconds.
    SampleStart,
    /// `#SAMPLELENGTH`. Length of the music preview in seconds.
    SampleLength,
    /// `#BPMS`. The list of `beat=bpm` tempo changes.
    Bpms,
    /// `#STOPS`. The list of `beat=seconds` stops.
    Stops,
    /// `#FREEZES`. The legacy alias of [`Keyword::Stops`].
    Freezes,
    /// `#DISPLAYBPM`. The BPM shown on the music wheel, a number, a range or `*`.
    DisplayBpm,
    /// `#NOTES`. Introduces a chart block.
    Notes,
    /// `#ANIMATIONS`. Stored verbatim.
    Animations,
    /// `#ARTISTTRANSLIT`. Stored verbatim.
    ArtistTranslit,
    /// `#ATTACKS`. Stored verbatim.
    Attacks,
    /// `#BGCHANGES`. Stored verbatim.
    BgChanges,
    /// `#FGCHANGES`. Stored verbatim.
    FgChanges,
    /// `#KEYSOUNDS`. Stored verbatim.
    KeySounds,
    /// `#LYRICSPATH`. Stored verbatim.
    LyricsPath,
    /// `#MENUCOLOR`. Stored verbatim.
    MenuColor,
    /// `#SELECTABLE`. Stored verbatim, and also read as a `YES`/`NO` flag.
    Selectable,
    /// `#SUBTITLETRANSLIT`. Stored verbatim.
    SubtitleTranslit,
    /// `#TITLETRANSLIT`. Stored verbatim.
    TitleTranslit,
    /// `#DELAYS`. Stored verbatim.
    Delays,
    /// `#TIMESIGNATURES`. Stored verbatim.
    TimeSignatures,
}

impl Keyword {
    /// All the keywords, in the order of declaration.
    pub const ALL: [Self; 30] = [
        Self::Title,
        Self::Subtitle,
        Self::Artist,
        Self::Genre,
        Self::Credit,
        Self::Banner,
        Self::Background,
        Self::CdTitle,
        Self::Music,
        Self::Offset,
        Self::SampleStart,
        Self::SampleLength,
        Self::Bpms,
        Self::Stops,
        Self::Freezes,
        Self::DisplayBpm,
        Self::Notes,
        Self::Animations,
        Self::ArtistTranslit,
        Self::Attacks,
        Self::BgChanges,
        Self::FgChanges,
        Self::KeySounds,
        Self::LyricsPath,
        Self::MenuColor,
        Self::Selectable,
        Self::SubtitleTranslit,
        Self::TitleTranslit,
        Self::Delays,
        Self::TimeSignatures,
    ];

    /// Finds the keyword spelled exactly as `name`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.name() == name)
    }

    /// Returns the spelling of the keyword in the source, without `#` and `:`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Subtitle => "SUBTITLE",
            Self::Artist => "ARTIST",
            Self::Genre => "GENRE",
            Self::Credit => "CREDIT",
            Self::Banner => "BANNER",
            Self::Background => "BACKGROUND",
            Self::CdTitle => "CDTITLE",
            Self::Music => "MUSIC",
            Self::Offset => "OFFSET",
            Self::SampleStart => "SAMPLESTART",
            Self::SampleLength => "SAMPLELENGTH",
            Self::Bpms => "BPMS",
            Self::Stops => "STOPS",
            Self::Freezes => "FREEZES",
            Self::DisplayBpm => "DISPLAYBPM",
            Self::Notes => "NOTES",
            Self::Animations => "ANIMATIONS",
            Self::ArtistTranslit => "ARTISTTRANSLIT",
            Self::Attacks => "ATTACKS",
            Self::BgChanges => "BGCHANGES",
            Self::FgChanges => "FGCHANGES",
            Self::KeySounds => "KEYSOUNDS",
            Self::LyricsPath => "LYRICSPATH",
            Self::MenuColor => "MENUCOLOR",
            Self::Selectable => "SELECTABLE",
            Self::SubtitleTranslit => "SUBTITLETRANSLIT",
            Self::TitleTranslit => "TITLETRANSLIT",
            Self::Delays => "DELAYS",
            Self::TimeSignatures => "TIMESIGNATURES",
        }
    }

    /// Returns `true` if the content of the keyword is stored verbatim and not parsed further.
    #[must_use]
    pub const fn is_pass_through(self) -> bool {
        matches!(
            self,
            Self::Animations
                | Self::ArtistTranslit
                | Self::Attacks
                | Self::BgChanges
                | Self::FgChanges
                | Self::KeySounds
                | Self::LyricsPath
                | Self::MenuColor
                | Self::Selectable
                | Self::SubtitleTranslit
                | Self::TitleTranslit
                | Self::Delays
                | Self::TimeSignatures
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name())
    }
}
