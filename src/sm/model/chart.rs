//! This module introduces struct [`Chart`], a playable note sequence of a simfile.

use std::fmt;

use itertools::Itertools;

use super::snap::Snap;
use crate::sm::command::{NoteObject, Style};

/// One playable note sequence for a style and difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// The play style, which fixes the lane count.
    pub style: Style,
    /// The author of the chart.
    pub step_artist: Option<String>,
    /// The difficulty name such as `Beginner` or `Challenge`.
    pub difficulty_name: Option<String>,
    /// The difficulty rating. Zero when absent.
    pub difficulty_value: u32,
    /// The note grid.
    pub measures: Vec<Measure>,
}

impl Chart {
    /// Returns the number of lanes, derived from the style.
    #[must_use]
    pub const fn lane_count(&self) -> usize {
        self.style.lane_count()
    }

    /// Iterates all the rows with their placement, in order.
    pub fn rows(&self) -> impl Iterator<Item = PlacedRow<'_>> {
        self.measures
            .iter()
            .enumerate()
            .flat_map(|(measure, rows)| {
                let subdivision = rows.subdivision();
                rows.rows()
                    .iter()
                    .enumerate()
                    .map(move |(index, row)| PlacedRow {
                        measure,
                        index,
                        subdivision,
                        row,
                    })
            })
    }

    /// Iterates the rows holding anything but blank lanes, keeping their placement.
    pub fn non_blank_rows(&self) -> impl Iterator<Item = PlacedRow<'_>> {
        self.rows().filter(|placed| !placed.row.is_blank())
    }

    /// Returns the chart whose empty lanes under a held hold or roll are replaced by
    /// [`NoteObject::HoldBody`] or [`NoteObject::RollBody`].
    ///
    /// A body runs from the row after the head up to the row before its [`NoteObject::Tail`],
    /// across measures. A head without a tail holds until the end of the chart.
    #[must_use]
    pub fn with_distinct_long_note_bodies(&self) -> Self {
        let mut held: Vec<Option<NoteObject>> = vec![None; self.lane_count()];
        let measures = self
            .measures
            .iter()
            .map(|measure| {
                let rows: Vec<Row> = measure
                    .rows()
                    .iter()
                    .map(|row| {
                        if held.len() < row.width() {
                            held.resize(row.width(), None);
                        }
                        row.0
                            .iter()
                            .zip(held.iter_mut())
                            .map(|(&object, body)| match object {
                                NoteObject::HoldHead => {
                                    *body = Some(NoteObject::HoldBody);
                                    object
                                }
                                NoteObject::RollHead => {
                                    *body = Some(NoteObject::RollBody);
                                    object
                                }
                                NoteObject::Tail => {
                                    *body = None;
                                    object
                                }
                                NoteObject::Empty => body.unwrap_or(object),
                                _ => object,
                            })
                            .collect()
                    })
                    .collect();
                Measure::new(rows)
            })
            .collect();
        Self {
            style: self.style,
            step_artist: self.step_artist.clone(),
            difficulty_name: self.difficulty_name.clone(),
            difficulty_value: self.difficulty_value,
            measures,
        }
    }

    /// Counts the objects of the kind in the whole chart.
    #[must_use]
    pub fn count_objects(&self, object: NoteObject) -> usize {
        self.rows()
            .map(|placed| placed.row.lanes_of(object).count())
            .sum()
    }
}

/// A row with its location in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRow<'a> {
    /// The index of the measure.
    pub measure: usize,
    /// The index of the row in the measure.
    pub index: usize,
    /// The number of rows in the measure.
    pub subdivision: usize,
    /// The row.
    pub row: &'a Row,
}

impl PlacedRow<'_> {
    /// Returns the snap of the row from its place in the measure.
    #[must_use]
    pub const fn snap(&self) -> Snap {
        Snap::from_position(self.index, self.subdivision)
    }
}

/// A measure, conventionally one bar.
///
/// Its row count is the subdivision: 4 rows are quarter notes, 16 rows are sixteenth notes. A
/// measure without rows is silence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure(Vec<Row>);

impl Measure {
    /// Creates a measure from its rows.
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Returns the number of rows, the subdivision of the measure.
    #[must_use]
    pub fn subdivision(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Row>> for Measure {
    fn from(rows: Vec<Row>) -> Self {
        Self(rows)
    }
}

/// One simultaneous timestep across all the lanes.
///
/// The parser guarantees its length equals the lane count of the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row(Vec<NoteObject>);

impl Row {
    /// Creates a row from its objects.
    #[must_use]
    pub const fn new(objects: Vec<NoteObject>) -> Self {
        Self(objects)
    }

    /// Returns the objects, one per lane.
    #[must_use]
    pub fn objects(&self) -> &[NoteObject] {
        &self.0
    }

    /// Returns the number of lanes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if every lane is blank, see [`NoteObject::is_blank`].
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|object| object.is_blank())
    }

    /// Returns `true` if every lane needs no player action.
    #[must_use]
    pub fn is_decorative(&self) -> bool {
        self.0.iter().all(|object| object.is_decorative())
    }

    /// Iterates the lanes holding the object.
    pub fn lanes_of(&self, object: NoteObject) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |&(_, &found)| found == object)
            .map(|(lane, _)| lane)
    }

    /// Returns the row with its lanes reversed.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Returns the row whose lane `i` takes the object of lane `lane_map[i]`.
    ///
    /// Lanes past the end of the map, or mapped outside the row, keep their own object.
    #[must_use]
    pub fn switch_lanes(&self, lane_map: &[usize]) -> Self {
        self.0
            .iter()
            .enumerate()
            .map(|(lane, &object)| {
                lane_map
                    .get(lane)
                    .and_then(|&source| self.0.get(source))
                    .copied()
                    .unwrap_or(object)
            })
            .collect()
    }

    /// Returns the row with every object in `from` replaced by `to`.
    #[must_use]
    pub fn replace_objects(&self, from: &[NoteObject], to: NoteObject) -> Self {
        self.0
            .iter()
            .map(|object| if from.contains(object) { to } else { *object })
            .collect()
    }

    /// Iterates the distinct rows made by reordering the lanes, this row included.
    pub fn permutations(&self) -> impl Iterator<Item = Self> + '_ {
        self.0
            .iter()
            .copied()
            .permutations(self.width())
            .unique()
            .map(Self)
    }
}

impl FromIterator<NoteObject> for Row {
    fn from_iter<I: IntoIterator<Item = NoteObject>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|object| write!(f, "{object}"))
    }
}
