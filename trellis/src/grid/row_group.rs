//! Row group layout — sizing delegate for a container of rows or columns.
//!
//! A row group recursively flattens nested monuments into a single logical
//! track sequence, aggregates sizes on top of the host-measured baseline,
//! and forwards structural and dirtiness notifications through scroll-frame
//! and monument indirections. Children that are not monuments count as one
//! bogus track each.

use crate::geometry::{add_to_axis, Extent, Size};
use crate::tree::{BoxId, BoxTree};

use super::model::GridModel;
use super::part::{effective_child, monument, GridPart};
use super::row::{resolve_grid, RowLayout};
use super::track::{Track, TrackCounts};

/// Which size kind an aggregation pass folds.
#[derive(Debug, Clone, Copy)]
enum SizeKind {
    Pref,
    Min,
    Max,
}

impl SizeKind {
    fn track_extent(self, model: &GridModel, index: usize, family_is_row: bool) -> Extent {
        match self {
            SizeKind::Pref => model.pref_track_extent(index, family_is_row),
            SizeKind::Min => model.min_track_extent(index, family_is_row),
            SizeKind::Max => model.max_track_extent(index, family_is_row),
        }
    }
}

/// Sizing delegate for a container of rows or columns.
///
/// Stateless: every operation takes the tree and the box it is attached to.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowGroupLayout;

impl RowGroupLayout {
    /// Preferred size: the baseline plus the extra columns the grid has
    /// accumulated beyond what this box's own children represent.
    pub fn pref_size(&self, tree: &BoxTree, box_id: BoxId) -> Size {
        let mut size = RowLayout.pref_size(tree, box_id);
        self.add_extra_columns(tree, box_id, &mut size, SizeKind::Pref);
        size
    }

    /// Minimum size, aggregated the same way as the preferred size.
    pub fn min_size(&self, tree: &BoxTree, box_id: BoxId) -> Size {
        let mut size = RowLayout.min_size(tree, box_id);
        self.add_extra_columns(tree, box_id, &mut size, SizeKind::Min);
        size
    }

    /// Maximum size, aggregated the same way as the preferred size.
    pub fn max_size(&self, tree: &BoxTree, box_id: BoxId) -> Size {
        let mut size = RowLayout.max_size(tree, box_id);
        self.add_extra_columns(tree, box_id, &mut size, SizeKind::Max);
        size
    }

    /// Fold the extents of the grid's extra columns into the `is_row`
    /// component of `size`.
    ///
    /// Extra columns occupy the tail of the column array; their extents are
    /// queried on the transposed axis. A box with no grid association is
    /// left at its baseline.
    fn add_extra_columns(&self, tree: &BoxTree, box_id: BoxId, size: &mut Size, kind: SizeKind) {
        let Some((grid_box, _index)) = resolve_grid(tree, box_id) else {
            return;
        };
        let Some(model) = tree.grid_model(grid_box) else {
            return;
        };
        let is_row = tree.is_horizontal(box_id);
        let extra = model.extra_column_count(is_row);
        let start = model.column_count(is_row) - extra;
        for i in start..start + extra {
            let contribution = kind.track_extent(model, i, !is_row);
            add_to_axis(size, contribution, is_row);
        }
    }

    /// Arrange the box's children. Delegated wholesale to the base row
    /// layout; a row group adds no arrangement behavior of its own.
    pub fn layout(&self, tree: &mut BoxTree, box_id: BoxId) {
        RowLayout.layout(tree, box_id);
    }

    /// Notify the grid that a direct child of this group was added or
    /// removed, so it can re-solve its arrays and extra-column accounting.
    ///
    /// A box with no grid association swallows the notification.
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

impl GridPart for RowGroupLayout {
    fn build_tracks(&self, tree: &BoxTree, box_id: BoxId, out: &mut [Track]) -> usize {
        let mut written = 0;
        for &child in tree.children(box_id) {
            let Some(effective) = effective_child(tree, child) else {
                continue;
            };
            match monument(tree, effective) {
                Some(part) => {
                    written += part.build_tracks(tree, effective, &mut out[written..]);
                }
                None => {
                    debug_assert!(
                        written < out.len(),
                        "track buffer undersized; caller skipped the counting pass"
                    );
                    // a bogus track references the original child, not the
                    // unwrapped one
                    out[written].init(child, true);
                    written += 1;
                }
            }
        }
        written
    }

    fn count_tracks(&self, tree: &BoxTree, box_id: BoxId, counts: &mut TrackCounts) {
        for &child in tree.children(box_id) {
            let Some(effective) = effective_child(tree, child) else {
                continue;
            };
            match monument(tree, effective) {
                Some(part) => part.count_tracks(tree, effective, counts),
                None => counts.tracks += 1,
            }
        }
    }

    fn dirty_tracks(&self, tree: &mut BoxTree, box_id: BoxId) {
        tree.mark_dirty(box_id);
        let children = tree.children(box_id).to_vec();
        for child in children {
            let Some(effective) = effective_child(tree, child) else {
                continue;
            };
            if let Some(part) = monument(tree, effective) {
                part.dirty_tracks(tree, effective);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::part::Delegate;
    use crate::tree::BoxFlags;

    fn bogus_group(tree: &mut BoxTree, children: usize) -> BoxId {
        let group = tree.new_box(BoxFlags::HORIZONTAL);
        tree.set_delegate(group, Delegate::RowGroup(RowGroupLayout));
        for _ in 0..children {
            let child = tree.new_box(BoxFlags::empty());
            tree.append_child(group, child).unwrap();
        }
        group
    }

    #[test]
    fn test_bogus_children_count_one_each() {
        let mut tree = BoxTree::new();
        let group = bogus_group(&mut tree, 3);

        let mut counts = TrackCounts::default();
        RowGroupLayout.count_tracks(&tree, group, &mut counts);
        assert_eq!(counts.tracks, 3);
        assert_eq!(counts.computed_columns, 0);
    }

    #[test]
    fn test_build_references_original_children_as_bogus() {
        let mut tree = BoxTree::new();
        let group = bogus_group(&mut tree, 2);
        let children: Vec<BoxId> = tree.children(group).to_vec();

        let mut out = vec![Track::default(); 2];
        let written = RowGroupLayout.build_tracks(&tree, group, &mut out);
        assert_eq!(written, 2);
        for (track, child) in out.iter().zip(children) {
            assert_eq!(track.item(), Some(child));
            assert!(track.is_bogus());
        }
    }

    #[test]
    fn test_contentless_scroll_frame_is_skipped_consistently() {
        let mut tree = BoxTree::new();
        let group = bogus_group(&mut tree, 1);
        let empty_frame = tree.new_box(BoxFlags::SCROLL_FRAME);
        tree.append_child(group, empty_frame).unwrap();

        let mut counts = TrackCounts::default();
        RowGroupLayout.count_tracks(&tree, group, &mut counts);
        assert_eq!(counts.tracks, 1);

        let mut out = vec![Track::default(); counts.tracks];
        assert_eq!(RowGroupLayout.build_tracks(&tree, group, &mut out), 1);
    }

    #[test]
    fn test_sizes_pass_through_without_grid() {
        let mut tree = BoxTree::new();
        let group = bogus_group(&mut tree, 3);
        tree.set_base_sizes(
            group,
            Size::new(100.0, 40.0),
            Size::new(20.0, 10.0),
            Size::new(400.0, 200.0),
        );

        assert_eq!(RowGroupLayout.pref_size(&tree, group), Size::new(100.0, 40.0));
        assert_eq!(RowGroupLayout.min_size(&tree, group), Size::new(20.0, 10.0));
        assert_eq!(RowGroupLayout.max_size(&tree, group), Size::new(400.0, 200.0));
    }

    #[test]
    fn test_layout_delegates_to_base() {
        let mut tree = BoxTree::new();
        let group = bogus_group(&mut tree, 1);
        tree.mark_dirty(group);
        RowGroupLayout.layout(&mut tree, group);
        assert!(!tree.is_dirty(group));
    }

    #[test]
    fn test_notification_without_grid_is_a_no_op() {
        let mut tree = BoxTree::new();
        let group = bogus_group(&mut tree, 1);
        // must not panic or mark anything
        RowGroupLayout.child_added_or_removed(&mut tree, group);
        assert!(!tree.is_dirty(group));
    }
}
