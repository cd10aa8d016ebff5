//! Grid layout delegates.
//!
//! A grid is built from rows and columns that may themselves contain
//! nested grid-aware parts ("monuments"), scroll frames, or plain boxes.
//! The modules here cover the whole delegate family:
//!
//! - [`track`] — one logical row/column slot and the counting pair
//! - [`part`] — the delegate switchboard and child classification
//! - [`row`] — the leaf row/column sizing delegate and grid resolution
//! - [`row_group`] — the recursive container delegate
//! - [`model`] — the shared grid model and its container delegate

pub mod track;

pub mod model;
pub mod part;
pub mod row;
pub mod row_group;

pub use model::{rebuild_grid, GridLayout, GridModel};
pub use part::{effective_child, monument, Delegate, GridPart, Part};
pub use row::{resolve_grid, RowLayout};
pub use row_group::RowGroupLayout;
pub use track::{Track, TrackCounts};
