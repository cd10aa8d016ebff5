//! Trellis: nested grid sizing core for a box-based layout engine.
//!
//! Trellis implements the row/column composition half of a grid layout:
//! flattening an arbitrary tree of boxes into a logical track sequence,
//! aggregating preferred/min/max sizes across a box's children plus the
//! grid's accumulated extra columns, and propagating dirtiness through
//! scroll-frame and monument indirections.
//!
//! # Architecture
//!
//! ```text
//! host builds BoxTree -> rebuild_grid derives track structure
//!   -> host solves and pushes track extents
//!   -> sizing queries fold extra columns into the baseline
//! ```
//!
//! Boxes live in a [`tree::BoxTree`] arena and carry at most one layout
//! delegate from the closed [`grid::Delegate`] set. The grid-aware
//! delegates expose the [`grid::GridPart`] capability (counting,
//! flattening, dirty propagation), which is how a row group discovers the
//! monuments among its children; everything else counts as one bogus track.
//! The shared [`grid::GridModel`] is owned by the grid container's delegate
//! and consulted read-only during sizing.
//!
//! Out of scope by design: generic box flow layout (hosts record measured
//! base sizes on the boxes), the grid's track extent solving (hosts push
//! solved extents), painting, events, styles.
//!
//! # Usage
//!
//! ```ignore
//! use trellis::grid::{Delegate, GridLayout, RowGroupLayout, RowLayout};
//! use trellis::tree::{BoxFlags, BoxTree};
//!
//! let mut tree = BoxTree::new();
//! let grid = tree.new_box(BoxFlags::empty());
//! tree.set_delegate(grid, Delegate::Grid(GridLayout::new()));
//!
//! let rows = tree.new_box(BoxFlags::HORIZONTAL);
//! tree.set_delegate(rows, Delegate::RowGroup(RowGroupLayout));
//! tree.append_child(grid, rows)?;
//!
//! trellis::grid::rebuild_grid(&mut tree, grid);
//! let pref = RowGroupLayout.pref_size(&tree, rows);
//! ```

pub mod geometry;
pub mod grid;
pub mod tree;

pub use geometry::{add_extent, Extent, Size, UNBOUNDED};
pub use grid::{
    rebuild_grid, Delegate, GridLayout, GridModel, GridPart, Part, RowGroupLayout, RowLayout,
    Track, TrackCounts,
};
pub use tree::{BoxFlags, BoxId, BoxTree, TreeError};
