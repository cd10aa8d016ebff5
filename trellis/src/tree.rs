//! Box tree arena.
//!
//! Boxes are the nodes the surrounding layout engine measures and arranges.
//! The tree owns every node and its attached layout delegate; callers
//! address nodes by `BoxId`. This module stores only the structural facts
//! the grid core consumes — ordered children, parent links, orientation,
//! dirtiness, scroll-frame content, and the base sizes recorded by the
//! host's generic measurement pass. It knows nothing about flow layout.

use bitflags::bitflags;
use thiserror::Error;

use crate::geometry::Size;
use crate::grid::model::GridModel;
use crate::grid::part::Delegate;

/// Identifies a box within its `BoxTree`.
///
/// Boxes are created by the tree owner and live for the whole layout pass,
/// so a plain index is sufficient; there is no generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId(u32);

impl BoxId {
    #[inline]
    pub(crate) fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Per-box state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BoxFlags: u8 {
        /// Needs re-measurement before the next arrange pass.
        const DIRTY = 1 << 0;
        /// Children flow along the horizontal axis.
        const HORIZONTAL = 1 << 1;
        /// Wraps a single scrolled content box instead of ordinary children.
        const SCROLL_FRAME = 1 << 2;
    }
}

impl Default for BoxFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Errors from tree construction.
///
/// These can only arise while the host assembles the tree; no layout-pass
/// operation produces them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("box is already parented")]
    AlreadyParented,
    #[error("a box cannot contain itself")]
    SelfAdoption,
    #[error("box is not a scroll frame")]
    NotScrollFrame,
}

/// A single node in the box tree.
#[derive(Debug, Default)]
struct BoxNode {
    parent: Option<BoxId>,
    children: Vec<BoxId>,
    flags: BoxFlags,
    delegate: Option<Delegate>,
    scrolled_content: Option<BoxId>,
    base_pref: Size,
    base_min: Size,
    base_max: Size,
}

/// Arena owning all boxes of one layout tree.
#[derive(Debug, Default)]
pub struct BoxTree {
    nodes: Vec<BoxNode>,
}

impl BoxTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new unparented box with the given flags.
    ///
    /// Base sizes start at zero preferred/minimum and unbounded maximum,
    /// matching a box the host has not measured yet.
    pub fn new_box(&mut self, flags: BoxFlags) -> BoxId {
        let id = BoxId(self.nodes.len() as u32);
        self.nodes.push(BoxNode {
            flags,
            base_max: Size::UNBOUNDED,
            ..BoxNode::default()
        });
        id
    }

    /// Append `child` to `parent`'s ordered child list.
    pub fn append_child(&mut self, parent: BoxId, child: BoxId) -> Result<(), TreeError> {
        if parent == child {
            return Err(TreeError::SelfAdoption);
        }
        if self.node(child).parent.is_some() {
            return Err(TreeError::AlreadyParented);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        Ok(())
    }

    /// Remove `child` from `parent`'s child list, leaving it unparented.
    pub fn remove_child(&mut self, parent: BoxId, child: BoxId) {
        self.node_mut(parent).children.retain(|&c| c != child);
        self.node_mut(child).parent = None;
    }

    /// Associate a scroll frame with its single scrolled content box.
    ///
    /// The content becomes the frame's hidden child: it is reachable only
    /// through [`BoxTree::scrolled_content`], never through `children`.
    pub fn set_scrolled_content(&mut self, frame: BoxId, content: BoxId) -> Result<(), TreeError> {
        if !self.node(frame).flags.contains(BoxFlags::SCROLL_FRAME) {
            return Err(TreeError::NotScrollFrame);
        }
        if frame == content {
            return Err(TreeError::SelfAdoption);
        }
        if self.node(content).parent.is_some() {
            return Err(TreeError::AlreadyParented);
        }
        self.node_mut(content).parent = Some(frame);
        self.node_mut(frame).scrolled_content = Some(content);
        Ok(())
    }

    /// Attach a layout delegate to a box, replacing any existing one.
    pub fn set_delegate(&mut self, id: BoxId, delegate: Delegate) {
        self.node_mut(id).delegate = Some(delegate);
    }

    /// The box's attached layout delegate, if any.
    #[inline]
    pub fn delegate(&self, id: BoxId) -> Option<&Delegate> {
        self.node(id).delegate.as_ref()
    }

    /// Ordered direct children of a box.
    ///
    /// For scroll frames this is empty; the scrolled content is a separate
    /// association.
    #[inline]
    pub fn children(&self, id: BoxId) -> &[BoxId] {
        &self.node(id).children
    }

    /// The box's parent, if it has been adopted.
    #[inline]
    pub fn parent(&self, id: BoxId) -> Option<BoxId> {
        self.node(id).parent
    }

    /// Whether the box lays out its children along the horizontal axis.
    #[inline]
    pub fn is_horizontal(&self, id: BoxId) -> bool {
        self.node(id).flags.contains(BoxFlags::HORIZONTAL)
    }

    /// Whether the box is a scroll frame.
    #[inline]
    pub fn is_scroll_frame(&self, id: BoxId) -> bool {
        self.node(id).flags.contains(BoxFlags::SCROLL_FRAME)
    }

    /// The scrolled content of a scroll frame, if one has been attached.
    #[inline]
    pub fn scrolled_content(&self, id: BoxId) -> Option<BoxId> {
        self.node(id).scrolled_content
    }

    /// Mark a box as needing re-measurement.
    #[inline]
    pub fn mark_dirty(&mut self, id: BoxId) {
        self.node_mut(id).flags.insert(BoxFlags::DIRTY);
    }

    /// Clear a box's dirty bit after arrangement.
    #[inline]
    pub fn clear_dirty(&mut self, id: BoxId) {
        self.node_mut(id).flags.remove(BoxFlags::DIRTY);
    }

    /// Whether a box is marked dirty.
    #[inline]
    pub fn is_dirty(&self, id: BoxId) -> bool {
        self.node(id).flags.contains(BoxFlags::DIRTY)
    }

    /// Record the host-measured base sizes for a box.
    ///
    /// These are the generic (grid-unaware) measurement results the sizing
    /// delegates use as their baseline.
    pub fn set_base_sizes(&mut self, id: BoxId, pref: Size, min: Size, max: Size) {
        let node = self.node_mut(id);
        node.base_pref = pref;
        node.base_min = min;
        node.base_max = max;
    }

    /// Host-measured preferred size.
    #[inline]
    pub fn base_pref_size(&self, id: BoxId) -> Size {
        self.node(id).base_pref
    }

    /// Host-measured minimum size.
    #[inline]
    pub fn base_min_size(&self, id: BoxId) -> Size {
        self.node(id).base_min
    }

    /// Host-measured maximum size.
    #[inline]
    pub fn base_max_size(&self, id: BoxId) -> Size {
        self.node(id).base_max
    }

    /// The shared grid model owned by a grid container box, if this box is
    /// one.
    pub fn grid_model(&self, id: BoxId) -> Option<&GridModel> {
        match self.node(id).delegate.as_ref() {
            Some(Delegate::Grid(layout)) => Some(layout.model()),
            _ => None,
        }
    }

    /// Mutable access to a grid container's model.
    pub fn grid_model_mut(&mut self, id: BoxId) -> Option<&mut GridModel> {
        match self.node_mut(id).delegate.as_mut() {
            Some(Delegate::Grid(layout)) => Some(layout.model_mut()),
            _ => None,
        }
    }

    #[inline]
    fn node(&self, id: BoxId) -> &BoxNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: BoxId) -> &mut BoxNode {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::UNBOUNDED;

    #[test]
    fn test_append_child_order_and_parent() {
        let mut tree = BoxTree::new();
        let parent = tree.new_box(BoxFlags::empty());
        let a = tree.new_box(BoxFlags::empty());
        let b = tree.new_box(BoxFlags::empty());
        tree.append_child(parent, a).unwrap();
        tree.append_child(parent, b).unwrap();
        assert_eq!(tree.children(parent), &[a, b]);
        assert_eq!(tree.parent(a), Some(parent));
        assert_eq!(tree.parent(parent), None);
    }

    #[test]
    fn test_append_rejects_reparenting_and_self() {
        let mut tree = BoxTree::new();
        let p1 = tree.new_box(BoxFlags::empty());
        let p2 = tree.new_box(BoxFlags::empty());
        let child = tree.new_box(BoxFlags::empty());
        tree.append_child(p1, child).unwrap();
        assert_eq!(tree.append_child(p2, child), Err(TreeError::AlreadyParented));
        assert_eq!(tree.append_child(p1, p1), Err(TreeError::SelfAdoption));
    }

    #[test]
    fn test_remove_child_unparents() {
        let mut tree = BoxTree::new();
        let parent = tree.new_box(BoxFlags::empty());
        let child = tree.new_box(BoxFlags::empty());
        tree.append_child(parent, child).unwrap();
        tree.remove_child(parent, child);
        assert!(tree.children(parent).is_empty());
        assert_eq!(tree.parent(child), None);
        // removed child can be adopted again
        tree.append_child(parent, child).unwrap();
    }

    #[test]
    fn test_scrolled_content_requires_scroll_frame() {
        let mut tree = BoxTree::new();
        let plain = tree.new_box(BoxFlags::empty());
        let frame = tree.new_box(BoxFlags::SCROLL_FRAME);
        let content = tree.new_box(BoxFlags::empty());
        assert_eq!(
            tree.set_scrolled_content(plain, content),
            Err(TreeError::NotScrollFrame)
        );
        tree.set_scrolled_content(frame, content).unwrap();
        assert_eq!(tree.scrolled_content(frame), Some(content));
        assert_eq!(tree.parent(content), Some(frame));
        assert!(tree.children(frame).is_empty());
    }

    #[test]
    fn test_dirty_bit_round_trip() {
        let mut tree = BoxTree::new();
        let id = tree.new_box(BoxFlags::empty());
        assert!(!tree.is_dirty(id));
        tree.mark_dirty(id);
        tree.mark_dirty(id);
        assert!(tree.is_dirty(id));
        tree.clear_dirty(id);
        assert!(!tree.is_dirty(id));
    }

    #[test]
    fn test_unmeasured_box_defaults() {
        let mut tree = BoxTree::new();
        let id = tree.new_box(BoxFlags::HORIZONTAL);
        assert_eq!(tree.base_pref_size(id), Size::ZERO);
        assert_eq!(tree.base_min_size(id), Size::ZERO);
        assert_eq!(tree.base_max_size(id).width, UNBOUNDED);
        assert!(tree.is_horizontal(id));
    }
}
