//! Fancy diagnostics support using `ariadne`.
//!
//! This module provides convenient methods to convert warnings carrying `SourceRangeMixin`
//! (such as `LexWarningWithRange`, `ParseWarningWithRange`, and the aggregated `SmWarning`) to
//! `ariadne::Report` without modifying existing warning type definitions.
//!
//! Since `SourceRangeMixin` contains index span information (start/end byte offsets), ariadne
//! handles row/column calculations for display purposes.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use sm_rs::{diagnostics::emit_sm_warnings, sm::parse_sm};
//!
//! let sm_source = "#TITLE:Test;\n#OFFSET:soon;\n#BPMS:0=120";
//! let output = parse_sm(sm_source);
//!
//! emit_sm_warnings("test.sm", sm_source, &output.warnings);
//! # }
//! ```

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use sm_rs::diagnostics::SimpleSource;
///
/// let source_text = "#TITLE:test;\n#ARTIST:composer;\n";
/// let source = SimpleSource::new("test.sm", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.sm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    ///
    /// # Parameters
    /// * `name` - Name of the source file
    /// * `text` - Complete text content of the source file
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned warnings to `ariadne::Report`.
///
/// # Usage Example
///
/// ```rust
/// # #[cfg(feature = "diagnostics")]
/// # {
/// use ariadne::Source;
/// use sm_rs::{
///     diagnostics::{SimpleSource, ToAriadne},
///     sm::parse_sm,
/// };
///
/// let source_text = "#TITLE:test;\n#SELECTABLE:MAYBE;\n";
/// let warnings = parse_sm(source_text).warnings;
///
/// let source = SimpleSource::new("test.sm", source_text);
/// let ariadne_source = Source::from(source_text);
/// for warning in &warnings {
///     let report = warning.to_report(&source);
///     let _ = report.eprint(("test.sm".to_string(), ariadne_source.clone()));
/// }
/// # }
/// ```
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert the warning to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

/// Convenience method: batch render `SmWarning` list to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete SM source text
/// * `warnings` - List of warnings to display
#[cfg(feature = "diagnostics")]
pub fn emit_sm_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a crate::sm::SmWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of `SmWarning` without printing.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_sm_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a crate::sm::SmWarning>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}
