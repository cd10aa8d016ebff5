//! Layout delegate switchboard and child classification.
//!
//! `Delegate` is the closed set of layout delegates a box can carry. The
//! grid-aware variants (leaf rows and row groups) expose the [`GridPart`]
//! capability (flattening, counting, and dirty propagation), which is how
//! a container discovers the monuments among its children. Scroll-frame
//! detection is an orthogonal box flag handled by [`effective_child`], not
//! a delegate capability.

use crate::tree::{BoxId, BoxTree};

use super::model::GridLayout;
use super::row::RowLayout;
use super::row_group::RowGroupLayout;
use super::track::{Track, TrackCounts};

/// Capability shared by every grid-aware layout delegate.
///
/// A part contributes one or more logical tracks to the grid hierarchy it
/// belongs to. All three operations classify children identically, so a
/// build into a buffer sized by a counting pass always fits exactly.
pub trait GridPart {
    /// Flatten this part's logical tracks into the head of `out`,
    /// returning how many slots were written.
    ///
    /// The caller must pre-size `out` via [`GridPart::count_tracks`]; bounds
    /// are its contract, checked here only by debug assertion.
    fn build_tracks(&self, tree: &BoxTree, box_id: BoxId, out: &mut [Track]) -> usize;

    /// Accumulate this part's track count and computed column count without
    /// building anything.
    fn count_tracks(&self, tree: &BoxTree, box_id: BoxId, counts: &mut TrackCounts);

    /// Mark this part (and every monument reachable through it) as needing
    /// re-measurement.
    fn dirty_tracks(&self, tree: &mut BoxTree, box_id: BoxId);
}

/// A layout delegate attached to a box.
#[derive(Debug)]
pub enum Delegate {
    /// Sizing delegate for a single leaf row or column.
    Row(RowLayout),
    /// Sizing delegate for a container of rows or columns.
    RowGroup(RowGroupLayout),
    /// The grid container; owns the shared grid model. Not a monument —
    /// a nested grid is opaque to an enclosing one.
    Grid(GridLayout),
}

impl Delegate {
    /// View this delegate through the grid-part capability.
    ///
    /// Returns `None` for grid containers: their structure is private to
    /// their own hierarchy.
    #[inline]
    pub fn as_part(&self) -> Option<Part> {
        match self {
            Delegate::Row(layout) => Some(Part::Row(*layout)),
            Delegate::RowGroup(layout) => Some(Part::RowGroup(*layout)),
            Delegate::Grid(_) => None,
        }
    }

    /// Capability accessor for callers that must distinguish row groups
    /// from plain rows.
    #[inline]
    pub fn as_row_group(&self) -> Option<&RowGroupLayout> {
        match self {
            Delegate::RowGroup(layout) => Some(layout),
            _ => None,
        }
    }
}

/// A grid-aware delegate, detached from the tree for dispatch.
///
/// The sizing delegates are stateless, so a `Part` is a plain copy: it can
/// be extracted while the tree is borrowed and then invoked with a fresh
/// (possibly mutable) borrow.
#[derive(Debug, Clone, Copy)]
pub enum Part {
    Row(RowLayout),
    RowGroup(RowGroupLayout),
}

impl GridPart for Part {
    fn build_tracks(&self, tree: &BoxTree, box_id: BoxId, out: &mut [Track]) -> usize {
        match self {
            Part::Row(layout) => layout.build_tracks(tree, box_id, out),
            Part::RowGroup(layout) => layout.build_tracks(tree, box_id, out),
        }
    }

    fn count_tracks(&self, tree: &BoxTree, box_id: BoxId, counts: &mut TrackCounts) {
        match self {
            Part::Row(layout) => layout.count_tracks(tree, box_id, counts),
            Part::RowGroup(layout) => layout.count_tracks(tree, box_id, counts),
        }
    }

    fn dirty_tracks(&self, tree: &mut BoxTree, box_id: BoxId) {
        match self {
            Part::Row(layout) => layout.dirty_tracks(tree, box_id),
            Part::RowGroup(layout) => layout.dirty_tracks(tree, box_id),
        }
    }
}

/// Resolve the box that actually carries grid semantics for a direct child.
///
/// Scroll frames are unwrapped to their scrolled content. A scroll frame
/// with no content is an inconsistency in the host tree: it is reported as
/// a diagnostic and the child is skipped — it contributes no track, no
/// count, and no dirty recursion.
pub fn effective_child(tree: &BoxTree, child: BoxId) -> Option<BoxId> {
    if !tree.is_scroll_frame(child) {
        return Some(child);
    }
    let content = tree.scrolled_content(child);
    if content.is_none() {
        tracing::warn!(?child, "scroll frame has no scrolled content, skipping child");
    }
    content
}

/// The monument view of a box: its delegate's grid-part capability.
///
/// Never mutates, and is safe on boxes with no delegate (not a monument).
#[inline]
pub fn monument(tree: &BoxTree, box_id: BoxId) -> Option<Part> {
    tree.delegate(box_id).and_then(Delegate::as_part)
}
