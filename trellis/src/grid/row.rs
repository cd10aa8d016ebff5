//! Row/Column layout (base) — sizing delegate for a single leaf row.
//!
//! A leaf row contributes exactly one track to its grid. Its baseline sizes
//! are the host's generic measurement results recorded on the box; this
//! module adds the grid bookkeeping on top: the (grid, index) resolution
//! shared with row groups, the single-track flattening, and the perpendicular
//! cell count that feeds the grid's extra-column accounting.

use crate::geometry::Size;
use crate::tree::{BoxId, BoxTree};

use super::part::{effective_child, monument, Delegate, GridPart};
use super::track::{Track, TrackCounts};

/// Sizing delegate for a single leaf row or column.
///
/// Stateless: every operation takes the tree and the box it is attached to.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowLayout;

impl RowLayout {
    /// Preferred size: the host-measured baseline, unchanged.
    #[inline]
    pub fn pref_size(&self, tree: &BoxTree, box_id: BoxId) -> Size {
        tree.base_pref_size(box_id)
    }

    /// Minimum size: the host-measured baseline, unchanged.
    #[inline]
    pub fn min_size(&self, tree: &BoxTree, box_id: BoxId) -> Size {
        tree.base_min_size(box_id)
    }

    /// Maximum size: the host-measured baseline, unchanged.
    #[inline]
    pub fn max_size(&self, tree: &BoxTree, box_id: BoxId) -> Size {
        tree.base_max_size(box_id)
    }

    /// Arrange the box's children.
    ///
    /// Arrangement itself is the generic box layout's job; the grid
    /// delegates only clear the dirty bit so later sizing queries observe a
    /// clean box.
    pub fn layout(&self, tree: &mut BoxTree, box_id: BoxId) {
        tree.clear_dirty(box_id);
    }

    /// Notify the grid that this row's cell list changed.
    pub fn child_added_or_removed(&self, tree: &mut BoxTree, box_id: BoxId) {
        let Some((grid_box, index)) = resolve_grid(tree, box_id) else {
            return;
        };
        let is_row = tree.is_horizontal(box_id);
        if let Some(model) = tree.grid_model_mut(grid_box) {
            model.row_added_or_removed(index, is_row);
        }
    }
}

impl GridPart for RowLayout {
    fn build_tracks(&self, _tree: &BoxTree, box_id: BoxId, out: &mut [Track]) -> usize {
        debug_assert!(
            !out.is_empty(),
            "track buffer undersized; caller skipped the counting pass"
        );
        out[0].init(box_id, false);
        1
    }

    fn count_tracks(&self, tree: &BoxTree, box_id: BoxId, counts: &mut TrackCounts) {
        counts.tracks += 1;
        // a leaf row's cells span the perpendicular axis; the widest row
        // decides how many columns the grid must really have
        let cells = tree
            .children(box_id)
            .iter()
            .filter(|&&child| effective_child(tree, child).is_some())
            .count();
        counts.computed_columns = counts.computed_columns.max(cells);
    }

    fn dirty_tracks(&self, tree: &mut BoxTree, box_id: BoxId) {
        tree.mark_dirty(box_id);
    }
}

/// Resolve the grid a part belongs to, and the index of the part's first
/// track within that grid.
///
/// Ascends parent links from `box_id`, hopping over the scroll frame that
/// may wrap a part (the frame's slot in the grandparent is what positions
/// it). At each row-group ancestor the tracks contributed by preceding
/// effective siblings are added to the running index; at the grid container
/// only preceding monuments of the same orientation family count. Returns
/// `None` when no grid container is on the path — the box is simply not
/// part of an active grid.
pub fn resolve_grid(tree: &BoxTree, box_id: BoxId) -> Option<(BoxId, usize)> {
    let mut index = 0;
    let mut current = box_id;
    loop {
        // the slot that positions us in the parent's child list is the
        // scroll frame when one wraps us
        let mut slot = current;
        let mut parent = tree.parent(current)?;
        if tree.is_scroll_frame(parent) {
            slot = parent;
            parent = tree.parent(parent)?;
        }

        match tree.delegate(parent) {
            Some(Delegate::Grid(_)) => {
                let family = tree.is_horizontal(current);
                for &sibling in tree.children(parent) {
                    if sibling == slot {
                        break;
                    }
                    let Some(effective) = effective_child(tree, sibling) else {
                        continue;
                    };
                    if tree.is_horizontal(effective) != family {
                        continue;
                    }
                    if let Some(part) = monument(tree, effective) {
                        let mut counts = TrackCounts::default();
                        part.count_tracks(tree, effective, &mut counts);
                        index += counts.tracks;
                    }
                }
                return Some((parent, index));
            }
            Some(delegate) if delegate.as_part().is_some() => {
                for &sibling in tree.children(parent) {
                    if sibling == slot {
                        break;
                    }
                    match effective_child(tree, sibling) {
                        Some(effective) => match monument(tree, effective) {
                            Some(part) => {
                                let mut counts = TrackCounts::default();
                                part.count_tracks(tree, effective, &mut counts);
                                index += counts.tracks;
                            }
                            // a bogus sibling occupies exactly one slot
                            None => index += 1,
                        },
                        None => {}
                    }
                }
                current = parent;
            }
            _ => return None,
        }
    }
}
