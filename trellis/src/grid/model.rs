//! Shared grid model and the grid container delegate.
//!
//! One grid hierarchy has exactly one `GridModel`, owned by value by the
//! `GridLayout` delegate of the grid container box. Row and row-group
//! layouts hold no reference to it; they resolve (grid box, index) per call
//! and consult the model read-only during sizing. The model is
//! single-writer: only the host (through notifications and extent setters)
//! and the rebuild pass mutate it.
//!
//! Rebuild re-derives track *structure* (how many rows and columns exist,
//! and how many extra columns the widest rows force) from the box tree,
//! using the grid parts' counting and building operations. Solving track
//! *extents* (column-width computation) is the host's job; solved extents
//! are pushed in with [`GridModel::set_track_extents`].

use crate::geometry::Extent;
use crate::tree::{BoxId, BoxTree};

use super::part::{effective_child, monument, GridPart, Part};
use super::track::{Track, TrackCounts};

/// The authoritative row/column structure of one grid hierarchy.
#[derive(Debug, Default)]
pub struct GridModel {
    rows: Vec<Track>,
    columns: Vec<Track>,
    extra_rows: usize,
    extra_columns: usize,
    stale: bool,
}

impl GridModel {
    /// Create an empty model. Empty models are stale: no structure has
    /// been derived yet.
    pub fn new() -> Self {
        Self {
            stale: true,
            ..Self::default()
        }
    }

    #[inline]
    fn family(&self, family_is_row: bool) -> &[Track] {
        if family_is_row { &self.rows } else { &self.columns }
    }

    /// Number of columns perpendicular to the given axis (`is_row == true`
    /// selects the column array).
    #[inline]
    pub fn column_count(&self, is_row: bool) -> usize {
        self.family(!is_row).len()
    }

    /// Number of extra columns perpendicular to the given axis — columns
    /// contributed by rows whose own cells exceed the built column count.
    /// They occupy the tail of the column array.
    #[inline]
    pub fn extra_column_count(&self, is_row: bool) -> usize {
        if is_row { self.extra_columns } else { self.extra_rows }
    }

    /// The tracks of one family (`true` selects rows).
    #[inline]
    pub fn tracks(&self, family_is_row: bool) -> &[Track] {
        self.family(family_is_row)
    }

    /// Preferred extent of one track of the selected family.
    #[inline]
    pub fn pref_track_extent(&self, index: usize, family_is_row: bool) -> Extent {
        self.family(family_is_row)[index].pref()
    }

    /// Minimum extent of one track of the selected family.
    #[inline]
    pub fn min_track_extent(&self, index: usize, family_is_row: bool) -> Extent {
        self.family(family_is_row)[index].min()
    }

    /// Maximum extent of one track of the selected family.
    #[inline]
    pub fn max_track_extent(&self, index: usize, family_is_row: bool) -> Extent {
        self.family(family_is_row)[index].max()
    }

    /// Push solved extents for one track. Host entry point.
    pub fn set_track_extents(
        &mut self,
        index: usize,
        family_is_row: bool,
        pref: Extent,
        min: Extent,
        max: Extent,
    ) {
        let tracks = if family_is_row { &mut self.rows } else { &mut self.columns };
        tracks[index].set_extents(pref, min, max);
    }

    /// A row (or column) changed at `index`: mark the structure stale so
    /// the host re-derives arrays and extra-column accounting.
    pub fn row_added_or_removed(&mut self, index: usize, is_row: bool) {
        tracing::debug!(index, is_row, "grid track list changed, structure is stale");
        self.stale = true;
    }

    /// Whether the structure must be rebuilt before it is trusted.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub(crate) fn replace_structure(
        &mut self,
        rows: Vec<Track>,
        columns: Vec<Track>,
        extra_rows: usize,
        extra_columns: usize,
    ) {
        debug_assert!(rows.len() >= extra_rows);
        debug_assert!(columns.len() >= extra_columns);
        self.rows = rows;
        self.columns = columns;
        self.extra_rows = extra_rows;
        self.extra_columns = extra_columns;
        self.stale = false;
    }
}

/// The grid container delegate: single owner of the shared model.
#[derive(Debug, Default)]
pub struct GridLayout {
    model: GridModel,
}

impl GridLayout {
    /// Create a container with an empty, stale model.
    pub fn new() -> Self {
        Self {
            model: GridModel::new(),
        }
    }

    /// The shared model.
    #[inline]
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    /// Mutable access to the shared model.
    #[inline]
    pub fn model_mut(&mut self) -> &mut GridModel {
        &mut self.model
    }
}

/// Re-derive the grid's track structure from the tree.
///
/// The grid box's direct monument children are classified by orientation
/// family (horizontal parts contribute rows, vertical parts columns), then
/// counted and flattened per family. When the widest row
/// reports more cells than columns were built, the difference is appended
/// as extra columns at the tail (boxless tracks with default extents, until
/// the host solves them); symmetrically for extra rows. Extent solving is
/// not performed here.
///
/// No-op if `grid_box` does not carry a grid container delegate.
pub fn rebuild_grid(tree: &mut BoxTree, grid_box: BoxId) {
    let mut row_counts = TrackCounts::default();
    let mut column_counts = TrackCounts::default();
    let mut row_parts: Vec<(Part, BoxId)> = Vec::new();
    let mut column_parts: Vec<(Part, BoxId)> = Vec::new();

    for &child in tree.children(grid_box) {
        let Some(effective) = effective_child(tree, child) else {
            continue;
        };
        let Some(part) = monument(tree, effective) else {
            continue;
        };
        if tree.is_horizontal(effective) {
            part.count_tracks(tree, effective, &mut row_counts);
            row_parts.push((part, effective));
        } else {
            part.count_tracks(tree, effective, &mut column_counts);
            column_parts.push((part, effective));
        }
    }

    let mut rows = vec![Track::default(); row_counts.tracks];
    let mut written = 0;
    for &(part, part_box) in &row_parts {
        written += part.build_tracks(tree, part_box, &mut rows[written..]);
    }
    debug_assert_eq!(written, rows.len(), "row count/build passes disagree");

    let mut columns = vec![Track::default(); column_counts.tracks];
    let mut written = 0;
    for &(part, part_box) in &column_parts {
        written += part.build_tracks(tree, part_box, &mut columns[written..]);
    }
    debug_assert_eq!(written, columns.len(), "column count/build passes disagree");

    // rows wider than the built columns force extra columns; columns taller
    // than the built rows force extra rows
    let extra_columns = row_counts.computed_columns.saturating_sub(columns.len());
    columns.extend(std::iter::repeat_with(Track::default).take(extra_columns));
    let extra_rows = column_counts.computed_columns.saturating_sub(rows.len());
    rows.extend(std::iter::repeat_with(Track::default).take(extra_rows));

    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        extra_rows,
        extra_columns,
        "grid structure rebuilt"
    );

    if let Some(model) = tree.grid_model_mut(grid_box) {
        model.replace_structure(rows, columns, extra_rows, extra_columns);
    }
}
